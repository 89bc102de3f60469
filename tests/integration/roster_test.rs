//! Class rosters, leader changes and student migration.

mod helpers;

use axum::http::StatusCode;
use helpers::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_classes_list_their_leaders() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();

    let response = app
        .request("GET", "/api/faculty/classes", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let classes = response.data().as_array().expect("class list");
    assert_eq!(classes.len(), 3);
    for class in classes {
        assert!(class["leader_student_id"].is_i64(), "{class}");
    }

    let class_id = app.demo().class_ids[1];
    let roster = app
        .request(
            "GET",
            &format!("/api/faculty/classes/{class_id}/students"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(roster.status, StatusCode::OK);
    assert_eq!(roster.data().as_array().map(Vec::len), Some(10));

    let missing = app
        .request("GET", "/api/faculty/classes/999999/students", None, Some(&token))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_change_leader_replaces_previous() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();
    let class_id = app.demo().class_ids[0];
    let new_leader = app.demo().student_ids[0][3];

    let response = app
        .request(
            "PUT",
            &format!("/api/faculty/classes/{class_id}/leader"),
            Some(json!({ "std_id": new_leader })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["student_id"], json!(new_leader));

    let leaders: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM class_leaders WHERE class_id = $1")
            .bind(class_id)
            .fetch_one(&app.db_pool)
            .await
            .expect("count leaders");
    assert_eq!(leaders, 1);

    let classes = app
        .request("GET", "/api/faculty/classes", None, Some(&token))
        .await;
    let class = classes
        .data()
        .as_array()
        .and_then(|all| all.iter().find(|c| c["class_id"] == json!(class_id)))
        .cloned()
        .expect("class in list");
    assert_eq!(class["leader_student_id"], json!(new_leader));

    let invalid = app
        .request(
            "PUT",
            &format!("/api/faculty/classes/{class_id}/leader"),
            Some(json!({ "std_id": 999_999 })),
            Some(&token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(invalid.body["message"], json!("The selected student is invalid."));
}

#[tokio::test]
async fn test_migrating_a_leader_leaves_class_leaderless() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();
    let leader = app.demo().student_ids[0][0];
    let from_class = app.demo().class_ids[0];
    let to_class = app.demo().class_ids[2];

    let response = app
        .request(
            "POST",
            "/api/faculty/students/migrate",
            Some(json!({ "std_id": leader, "new_cls_no": to_class })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["memberships_updated"], json!(1));
    assert_eq!(response.data()["leaderships_removed"], json!(1));

    let placements = app
        .request("GET", "/api/faculty/students", None, Some(&token))
        .await;
    let placement = placements
        .data()
        .as_array()
        .and_then(|all| all.iter().find(|s| s["student_id"] == json!(leader)))
        .cloned()
        .expect("student placement");
    assert_eq!(placement["class_id"], json!(to_class));

    let classes = app
        .request("GET", "/api/faculty/classes", None, Some(&token))
        .await;
    let old_class = classes
        .data()
        .as_array()
        .and_then(|all| all.iter().find(|c| c["class_id"] == json!(from_class)))
        .cloned()
        .expect("class in list");
    assert_eq!(old_class["leader_student_id"], json!(null));
}

#[tokio::test]
async fn test_migrate_rejects_unknown_class() {
    let Some(app) = TestApp::connect().await else { return };

    let response = app
        .request(
            "POST",
            "/api/faculty/students/migrate",
            Some(json!({ "std_id": app.demo().student_ids[1][4], "new_cls_no": 999_999 })),
            Some(&app.faculty_token()),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
