//! Login, token use, legacy credentials and the merged profile.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use serde_json::json;

fn login_body(username: &str, password: &str) -> Option<serde_json::Value> {
    Some(json!({ "username": username, "password": password }))
}

#[tokio::test]
async fn test_faculty_login_returns_user_and_token() {
    let Some(app) = TestApp::connect().await else { return };

    let response = app
        .request("POST", "/api/auth/login", login_body("  faculty ", "password123"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], json!("Login successful"));
    let data = response.data();
    assert_eq!(data["user_id"], json!(app.demo().faculty_user_id));
    assert_eq!(data["username"], json!("faculty"));
    assert_eq!(data["display_name"], json!("faculty"));
    assert_eq!(data["role_name"], json!("Faculty"));
    assert_eq!(data["access_channel"], json!("WEB"));
    assert_eq!(data["token_type"], json!("Bearer"));
    assert!(data["token"].as_str().is_some_and(|t| !t.is_empty()));

    let token = data["token"].as_str().unwrap_or_default();
    let me = app.request("GET", "/api/profile/me", None, Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_in_order() {
    let Some(app) = TestApp::connect().await else { return };

    let response = app
        .request("POST", "/api/auth/login", login_body("nobody", "password123"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], json!("User not found"));

    let response = app
        .request("POST", "/api/auth/login", login_body("faculty", "wrong-password"), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], json!("Invalid password"));

    let response = app
        .request("POST", "/api/auth/login", login_body("cs-a-01", "password123"), None)
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], json!("This account is APP only"));

    sqlx::query("UPDATE users SET status = 'Inactive' WHERE username = 'faculty'")
        .execute(&app.db_pool)
        .await
        .expect("deactivate");
    let response = app
        .request("POST", "/api/auth/login", login_body("faculty", "password123"), None)
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["message"], json!("Account inactive"));
}

#[tokio::test]
async fn test_legacy_sha256_hash_is_upgraded() {
    let Some(app) = TestApp::connect().await else { return };

    sqlx::query("UPDATE users SET password_hash = $1 WHERE username = 'faculty'")
        .bind("EF92B778BAFE771E89245B89ECBC08A44A4E166C06659911881F383D4473E94F")
        .execute(&app.db_pool)
        .await
        .expect("store legacy hash");

    app.login("faculty", "password123").await;

    let stored: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE username = 'faculty'")
            .fetch_one(&app.db_pool)
            .await
            .expect("read hash");
    assert!(stored.starts_with("$argon2"), "hash not upgraded: {stored}");

    app.login("faculty", "password123").await;
}

#[tokio::test]
async fn test_profile_sources() {
    let Some(app) = TestApp::connect().await else { return };

    let response = app
        .request("GET", "/api/profile/me", None, Some(&app.faculty_token()))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["full_name"], json!("Faculty Coordinator"));
    assert_eq!(response.data()["source"], json!("users"));
    assert!(response.data().get("teacher_details").is_none());

    let response = app
        .request("GET", "/api/profile/me", None, Some(&app.leader_token()))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["full_name"], json!("Student CS-A 01"));
    assert_eq!(response.data()["source"], json!("students"));
    assert_eq!(response.data()["role_name"], json!("Student"));
}

#[tokio::test]
async fn test_profile_prefers_teacher_record() {
    let Some(app) = TestApp::connect().await else { return };

    sqlx::query(
        "INSERT INTO teachers (user_id, teacher_code, name, phone, email) \
         VALUES ($1, 'T-001', 'Dr. Ada Byron', '555-0100', 'ada@example.edu')",
    )
    .bind(app.demo().faculty_user_id)
    .execute(&app.db_pool)
    .await
    .expect("insert teacher");

    let response = app
        .request("GET", "/api/profile/me", None, Some(&app.faculty_token()))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["full_name"], json!("Dr. Ada Byron"));
    assert_eq!(response.data()["source"], json!("teachers"));
    assert_eq!(
        response.data()["teacher_details"]["teacher_code"],
        json!("T-001")
    );

    let login = app
        .request("POST", "/api/auth/login", login_body("faculty", "password123"), None)
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.data()["display_name"], json!("Dr. Ada Byron"));
}

#[tokio::test]
async fn test_legacy_identity_header_when_enabled() {
    let Some(app) = TestApp::connect_with(|c| c.auth.legacy_identity_header = true).await else {
        return;
    };

    let faculty_id = app.demo().faculty_user_id.to_string();
    let response = app
        .request_with_headers("GET", "/api/profile/me", None, &[("X-USER-ID", faculty_id)])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["username"], json!("faculty"));

    let response = app
        .request_with_headers(
            "GET",
            "/api/profile/me",
            None,
            &[("X-USER-ID", "999999".to_string())],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
