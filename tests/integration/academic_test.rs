//! Academic structure CRUD over the HTTP API.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_faculty_and_department_lifecycle() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();

    let created = app
        .request(
            "POST",
            "/api/academic-structure/faculties",
            Some(json!({ "name": "  Engineering " })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["name"], json!("Engineering"));
    let faculty_id = created.data()["id"].as_i64().expect("faculty id");

    let duplicate = app
        .request(
            "POST",
            "/api/academic-structure/faculties",
            Some(json!({ "name": "Engineering" })),
            Some(&token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(duplicate.body["message"], json!("The name has already been taken."));

    let bad_parent = app
        .request(
            "POST",
            "/api/academic-structure/departments",
            Some(json!({ "name": "Mechanical", "faculty_id": 999_999 })),
            Some(&token),
        )
        .await;
    assert_eq!(bad_parent.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(bad_parent.body["message"], json!("The selected faculty is invalid."));

    let department = app
        .request(
            "POST",
            "/api/academic-structure/departments",
            Some(json!({ "name": "Mechanical", "faculty_id": faculty_id })),
            Some(&token),
        )
        .await;
    assert_eq!(department.status, StatusCode::CREATED);
    let department_id = department.data()["id"].as_i64().expect("department id");

    let blocked = app
        .request(
            "DELETE",
            &format!("/api/academic-structure/faculties/{faculty_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(blocked.status, StatusCode::CONFLICT);

    let renamed = app
        .request(
            "PUT",
            &format!("/api/academic-structure/departments/{department_id}"),
            Some(json!({ "name": "Mechanical Engineering", "faculty_id": faculty_id })),
            Some(&token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.data()["name"], json!("Mechanical Engineering"));

    let listed = app
        .request("GET", "/api/academic-structure/departments", None, Some(&token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.data().as_array().map(Vec::len), Some(1));

    for path in [
        format!("/api/academic-structure/departments/{department_id}"),
        format!("/api/academic-structure/faculties/{faculty_id}"),
    ] {
        let deleted = app.request("DELETE", &path, None, Some(&token)).await;
        assert_eq!(deleted.status, StatusCode::OK, "{path}");
    }

    let gone = app
        .request(
            "PUT",
            &format!("/api/academic-structure/faculties/{faculty_id}"),
            Some(json!({ "name": "Science" })),
            Some(&token),
        )
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_subject_codes_are_unique() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();

    let first = app
        .request(
            "POST",
            "/api/academic-structure/subjects",
            Some(json!({ "name": "Databases", "code": "CS301" })),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            "/api/academic-structure/subjects",
            Some(json!({ "name": "Distributed Systems", "code": "CS301" })),
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(second.body["message"], json!("The code has already been taken."));
}

#[tokio::test]
async fn test_semesters_list_after_create() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();

    for name in ["Fall", "Spring"] {
        let created = app
            .request(
                "POST",
                "/api/academic-structure/semesters",
                Some(json!({ "name": name })),
                Some(&token),
            )
            .await;
        assert_eq!(created.status, StatusCode::CREATED, "{name}");
    }

    let listed = app
        .request("GET", "/api/academic-structure/semesters", None, Some(&token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.data().as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_academic_session_dates_must_be_ordered() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();

    let backwards = app
        .request(
            "POST",
            "/api/academic-structure/academics",
            Some(json!({
                "start_date": "2025-09-01",
                "end_date": "2025-06-30",
                "active_year": "2025-2026",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(backwards.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        backwards.body["message"],
        json!("The end date must be a date after or equal to start date.")
    );

    let created = app
        .request(
            "POST",
            "/api/academic-structure/academics",
            Some(json!({
                "start_date": "2025-09-01",
                "end_date": "2026-06-30",
                "active_year": "2025-2026",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["start_date"], json!("2025-09-01"));

    let bad_date = app
        .request(
            "POST",
            "/api/academic-structure/academics",
            Some(json!({
                "start_date": "not-a-date",
                "end_date": "2026-06-30",
                "active_year": "2026-2027",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(bad_date.status, StatusCode::UNPROCESSABLE_ENTITY);
}
