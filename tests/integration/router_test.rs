//! Routing, authentication and guard behavior that resolves before any
//! query runs, so these tests need no database.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::lazy();
    let response = app.request("GET", "/api/nothing-here", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_token_is_401() {
    let app = TestApp::lazy();
    for path in [
        "/api/profile/me",
        "/api/faculty/issues",
        "/api/faculty/classes",
        "/api/academic-structure/faculties",
        "/api/student-management/schools",
    ] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(response.error_code(), "UNAUTHORIZED");
        assert_eq!(response.body["success"], json!(false));
    }
}

#[tokio::test]
async fn test_malformed_and_forged_tokens_are_401() {
    let app = TestApp::lazy();

    let response = app
        .request_with_headers(
            "GET",
            "/api/faculty/issues",
            None,
            &[("Authorization", "Basic Zm9vOmJhcg==".to_string())],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let forged = TestApp::lazy_with(|c| c.auth.jwt_secret = "another-secret".to_string())
        .token_for(1, "faculty", "Faculty");
    let response = app
        .request("GET", "/api/faculty/issues", None, Some(&forged))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], json!("Invalid token signature"));
}

#[tokio::test]
async fn test_legacy_header_ignored_unless_enabled() {
    let app = TestApp::lazy();
    let response = app
        .request_with_headers(
            "GET",
            "/api/faculty/issues",
            None,
            &[("X-USER-ID", "1".to_string())],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], json!("Missing Authorization header"));
}

#[tokio::test]
async fn test_students_cannot_reach_staff_routes() {
    let app = TestApp::lazy();
    let token = app.token_for(7, "cs-a-01", "Student");

    for (method, path) in [
        ("GET", "/api/faculty/issues"),
        ("GET", "/api/faculty/issues/stats"),
        ("GET", "/api/faculty/classes"),
        ("GET", "/api/academic-structure/subjects"),
        ("GET", "/api/student-management/parents"),
    ] {
        let response = app.request(method, path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{path}");
        assert_eq!(response.error_code(), "FORBIDDEN");
    }
}

#[tokio::test]
async fn test_faculty_cannot_manage_registry() {
    let app = TestApp::lazy();
    let token = app.token_for(1, "faculty", "Faculty");
    let response = app
        .request(
            "POST",
            "/api/student-management/schools",
            Some(json!({ "name": "North High" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_non_numeric_id_is_422() {
    let app = TestApp::lazy();
    let token = app.token_for(1, "faculty", "Faculty");

    let response = app
        .request("GET", "/api/faculty/issues/abc", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request("GET", "/api/faculty/issues/0", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_bodies_are_422() {
    let app = TestApp::lazy();
    let token = app.token_for(1, "faculty", "Faculty");

    let response = app
        .request(
            "PUT",
            "/api/faculty/issues/1/status",
            Some(json!({ "new_status": "Done" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .request(
            "POST",
            "/api/academic-structure/faculties",
            Some(json!({ "name": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["message"],
        json!("The name must be 1 to 150 characters.")
    );
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::lazy();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "", "password": "x" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["message"],
        json!("The username field is required.")
    );

    let response = app
        .request("POST", "/api/auth/login", Some(json!({ "username": "faculty" })), None)
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let app = TestApp::lazy();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], json!("Internal server error"));
}
