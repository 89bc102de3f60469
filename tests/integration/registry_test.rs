//! Schools and parents, maintained by administrators.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use helpers::TestApp;
use serde_json::json;

use unidesk_auth::PasswordHasher;
use unidesk_database::repositories::UserRepository;
use unidesk_entity::user::AccessChannel;
use unidesk_service::{AdminUserService, CreateUserRequest};

async fn admin_token(app: &TestApp) -> String {
    let service = AdminUserService::new(
        Arc::new(UserRepository::new(app.db_pool.clone())),
        Arc::new(PasswordHasher::new()),
    );
    service
        .create_user(CreateUserRequest {
            username: "registrar".to_string(),
            password: "registrar-pass".to_string(),
            role_name: "super admin".to_string(),
            full_name: Some("Registry Office".to_string()),
            access_channel: AccessChannel::Both,
        })
        .await
        .expect("create admin");

    app.login("registrar", "registrar-pass").await
}

#[tokio::test]
async fn test_school_lifecycle() {
    let Some(app) = TestApp::connect().await else { return };
    let token = admin_token(&app).await;

    let created = app
        .request(
            "POST",
            "/api/student-management/schools",
            Some(json!({ "name": "North High", "address": "   " })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["address"], json!(null));
    let school_id = created.data()["id"].as_i64().expect("school id");

    let updated = app
        .request(
            "PUT",
            &format!("/api/student-management/schools/{school_id}"),
            Some(json!({ "name": "North High School", "address": "1 Main St" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["address"], json!("1 Main St"));

    let duplicate = app
        .request(
            "POST",
            "/api/student-management/schools",
            Some(json!({ "name": "North High School" })),
            Some(&token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::UNPROCESSABLE_ENTITY);

    sqlx::query("UPDATE students SET school_id = $1 WHERE student_code = 'CS-A-02'")
        .bind(school_id)
        .execute(&app.db_pool)
        .await
        .expect("link student");
    let blocked = app
        .request(
            "DELETE",
            &format!("/api/student-management/schools/{school_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(blocked.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_parent_lifecycle() {
    let Some(app) = TestApp::connect().await else { return };
    let token = admin_token(&app).await;

    let created = app
        .request(
            "POST",
            "/api/student-management/parents",
            Some(json!({ "name": "Maria Lopez", "phone_primary": "555-0101" })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["phone_secondary"], json!(null));
    let parent_id = created.data()["id"].as_i64().expect("parent id");

    let listed = app
        .request("GET", "/api/student-management/parents", None, Some(&token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.data().as_array().map(Vec::len), Some(1));

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/student-management/parents/{parent_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], json!("Parent deleted successfully"));

    let again = app
        .request(
            "DELETE",
            &format!("/api/student-management/parents/{parent_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_faculty_is_forbidden() {
    let Some(app) = TestApp::connect().await else { return };

    let response = app
        .request(
            "GET",
            "/api/student-management/schools",
            None,
            Some(&app.faculty_token()),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
