//! Class issue lifecycle: backlog, listing, transitions, history,
//! notifications and dashboard counts.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use helpers::TestApp;
use serde_json::{Value, json};

use unidesk_database::repositories::IssueRepository;
use unidesk_service::IssueService;

async fn list(app: &TestApp, query: &str) -> Vec<Value> {
    let response = app
        .request(
            "GET",
            &format!("/api/faculty/issues{query}"),
            None,
            Some(&app.faculty_token()),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.data().as_array().cloned().unwrap_or_default()
}

async fn first_issue_id(app: &TestApp) -> i64 {
    list(app, "").await[0]["id"].as_i64().expect("issue id")
}

#[tokio::test]
async fn test_listing_generates_backlog_once() {
    let Some(app) = TestApp::connect().await else { return };

    let issues = list(&app, "").await;
    assert_eq!(issues.len(), 6);
    assert!(issues.iter().all(|i| i["status"] == json!("Pending")));
    assert!(issues.iter().all(|i| i["class_name"].is_string()));

    let class_ids: Vec<i64> = issues.iter().filter_map(|i| i["class_id"].as_i64()).collect();
    let mut sorted = class_ids.clone();
    sorted.sort();
    assert_eq!(class_ids, sorted);

    assert_eq!(list(&app, "").await.len(), 6);
}

#[tokio::test]
async fn test_larger_minimum_tops_up() {
    let Some(app) = TestApp::connect_with(|c| c.issues.min_backlog = 3).await else {
        return;
    };
    assert_eq!(list(&app, "").await.len(), 9);
}

#[tokio::test]
async fn test_concurrent_backlog_runs_do_not_duplicate() {
    let Some(app) = TestApp::connect().await else { return };

    let service = IssueService::new(
        Arc::new(IssueRepository::new(app.db_pool.clone())),
        app.config.issues.clone(),
    );
    let (a, b) = tokio::join!(service.ensure_backlog(), service.ensure_backlog());
    assert_eq!(a.expect("first run") + b.expect("second run"), 6);
    assert_eq!(service.ensure_backlog().await.expect("third run"), 0);
}

#[tokio::test]
async fn test_filters() {
    let Some(app) = TestApp::connect().await else { return };
    let class_id = app.demo().class_ids[1];

    let by_class = list(&app, &format!("?class_id={class_id}")).await;
    assert_eq!(by_class.len(), 2);
    assert!(by_class.iter().all(|i| i["class_id"] == json!(class_id)));

    assert_eq!(list(&app, "?status=Pending&class_id=").await.len(), 6);
    assert!(list(&app, "?status=In%20Review").await.is_empty());

    let response = app
        .request(
            "GET",
            "/api/faculty/issues?status=Closed",
            None,
            Some(&app.faculty_token()),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_transition_records_history_and_notifies_leader() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();
    let issue_id = first_issue_id(&app).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/faculty/issues/{issue_id}/status"),
            Some(json!({
                "new_status": "In Review",
                "note": "Technician booked",
                "user_id": app.demo().faculty_user_id,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data()["old_status"], json!("Pending"));
    assert_eq!(response.data()["new_status"], json!("In Review"));
    assert!(response.data()["notification_id"].is_i64());

    let detail = app
        .request("GET", &format!("/api/faculty/issues/{issue_id}"), None, Some(&token))
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.data()["issue"]["status"], json!("In Review"));
    let history = detail.data()["history"].as_array().cloned().unwrap_or_default();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["old_status"], json!("Pending"));
    assert_eq!(history[0]["note"], json!("Technician booked"));
    assert_eq!(history[0]["changed_by_name"], json!("Faculty Coordinator"));

    let stats = app
        .request("GET", "/api/faculty/issues/stats", None, Some(&token))
        .await;
    assert_eq!(stats.status, StatusCode::OK);
    assert_eq!(
        stats.data(),
        &json!({ "total": 6, "pending": 5, "inReview": 1, "resolved": 0, "completed": 0 })
    );

    let leader_id = detail.data()["issue"]["class_id"]
        .as_i64()
        .and_then(|class_id| app.demo().class_ids.iter().position(|&c| c == class_id))
        .map(|index| app.demo().leader_user_ids[index])
        .expect("leader of the issue's class");
    let leader_token = app.token_for(leader_id, "leader", "Student");

    let feed = app
        .request(
            "GET",
            &format!("/api/faculty/notifications/{leader_id}"),
            None,
            Some(&leader_token),
        )
        .await;
    assert_eq!(feed.status, StatusCode::OK);
    let notifications = feed.data().as_array().cloned().unwrap_or_default();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["is_read"], json!(false));
    assert_eq!(notifications[0]["record_id"], json!(issue_id));
    assert_eq!(
        notifications[0]["message"],
        json!("Your submitted issue status has been changed to In Review.")
    );
    let notification_id = notifications[0]["id"].as_i64().expect("notification id");

    let peek = app
        .request(
            "GET",
            &format!("/api/faculty/notifications/{leader_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(peek.status, StatusCode::FORBIDDEN);

    let stolen = app
        .request(
            "PUT",
            &format!("/api/faculty/notifications/{notification_id}/read"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(stolen.status, StatusCode::NOT_FOUND);

    let read = app
        .request(
            "PUT",
            &format!("/api/faculty/notifications/{notification_id}/read"),
            None,
            Some(&leader_token),
        )
        .await;
    assert_eq!(read.status, StatusCode::OK);
    assert_eq!(read.data()["is_read"], json!(true));
    assert!(read.data()["read_at"].is_string());
}

#[tokio::test]
async fn test_unread_notifications_come_first() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();
    let class_id = app.demo().class_ids[0];
    let leader_id = app.demo().leader_user_ids[0];
    let leader_token = app.leader_token();

    let issues = list(&app, &format!("?class_id={class_id}")).await;
    for issue in &issues {
        let id = issue["id"].as_i64().expect("issue id");
        let response = app
            .request(
                "PUT",
                &format!("/api/faculty/issues/{id}/status"),
                Some(json!({ "new_status": "Resolved" })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let feed = app
        .request(
            "GET",
            &format!("/api/faculty/notifications/{leader_id}"),
            None,
            Some(&leader_token),
        )
        .await;
    let newest = feed.data()[0]["id"].as_i64().expect("newest id");
    let oldest = feed.data()[1]["id"].as_i64().expect("oldest id");
    assert!(newest > oldest);

    app.request(
        "PUT",
        &format!("/api/faculty/notifications/{newest}/read"),
        None,
        Some(&leader_token),
    )
    .await;

    let feed = app
        .request(
            "GET",
            &format!("/api/faculty/notifications/{leader_id}"),
            None,
            Some(&leader_token),
        )
        .await;
    assert_eq!(feed.data()[0]["id"], json!(oldest));
    assert_eq!(feed.data()[0]["is_read"], json!(false));
    assert_eq!(feed.data()[1]["is_read"], json!(true));
}

#[tokio::test]
async fn test_transition_errors() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();
    let issue_id = first_issue_id(&app).await;

    let mismatch = app
        .request(
            "PUT",
            &format!("/api/faculty/issues/{issue_id}/status"),
            Some(json!({ "new_status": "Resolved", "user_id": app.demo().faculty_user_id + 1 })),
            Some(&token),
        )
        .await;
    assert_eq!(mismatch.status, StatusCode::FORBIDDEN);

    let missing = app
        .request(
            "PUT",
            "/api/faculty/issues/999999/status",
            Some(json!({ "new_status": "Resolved" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], json!("Issue not found"));

    let detail = app
        .request("GET", "/api/faculty/issues/999999", None, Some(&token))
        .await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);

    let backwards = app
        .request(
            "PUT",
            &format!("/api/faculty/issues/{issue_id}/status"),
            Some(json!({ "new_status": "Completed" })),
            Some(&token),
        )
        .await;
    assert_eq!(backwards.status, StatusCode::OK);
    let reopened = app
        .request(
            "PUT",
            &format!("/api/faculty/issues/{issue_id}/status"),
            Some(json!({ "new_status": "Pending" })),
            Some(&token),
        )
        .await;
    assert_eq!(reopened.status, StatusCode::OK);
}

#[tokio::test]
async fn test_forward_only_policy_rejects_reopening() {
    let Some(app) = TestApp::connect_with(|c| c.issues.enforce_forward_transitions = true).await
    else {
        return;
    };
    let token = app.faculty_token();
    let issue_id = first_issue_id(&app).await;

    let completed = app
        .request(
            "PUT",
            &format!("/api/faculty/issues/{issue_id}/status"),
            Some(json!({ "new_status": "Completed" })),
            Some(&token),
        )
        .await;
    assert_eq!(completed.status, StatusCode::OK);

    let reopened = app
        .request(
            "PUT",
            &format!("/api/faculty/issues/{issue_id}/status"),
            Some(json!({ "new_status": "Pending" })),
            Some(&token),
        )
        .await;
    assert_eq!(reopened.status, StatusCode::CONFLICT);
    assert_eq!(reopened.error_code(), "CONFLICT");
}

#[tokio::test]
async fn test_same_status_still_records_and_notifies() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();
    let issue_id = first_issue_id(&app).await;

    for _ in 0..2 {
        let response = app
            .request(
                "PUT",
                &format!("/api/faculty/issues/{issue_id}/status"),
                Some(json!({ "new_status": "Resolved" })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let detail = app
        .request("GET", &format!("/api/faculty/issues/{issue_id}"), None, Some(&token))
        .await;
    let history = detail.data()["history"].as_array().cloned().unwrap_or_default();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1]["old_status"], json!("Resolved"));
    assert_eq!(history[1]["new_status"], json!("Resolved"));

    let notifications: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE record_id = $1")
            .bind(issue_id)
            .fetch_one(&app.db_pool)
            .await
            .expect("count notifications");
    assert_eq!(notifications, 2);

    let mismatched: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM issue_assignments a \
         WHERE a.assigned_status <> (SELECT e.new_status FROM issue_status_events e \
                            WHERE e.complaint_id = a.complaint_id \
                            ORDER BY e.changed_at DESC, e.id DESC LIMIT 1)",
    )
    .fetch_one(&app.db_pool)
    .await
    .expect("compare assignment with history");
    assert_eq!(mismatched, 0);
}

async fn exec(app: &TestApp, sql: &str) {
    sqlx::query(sql)
        .execute(&app.db_pool)
        .await
        .unwrap_or_else(|e| panic!("{sql}: {e}"));
}

#[tokio::test]
async fn test_failed_notification_rolls_back_transition() {
    let Some(app) = TestApp::connect().await else { return };
    let token = app.faculty_token();
    let issue_id = first_issue_id(&app).await;

    exec(
        &app,
        "CREATE OR REPLACE FUNCTION reject_notifications() RETURNS trigger AS $$ \
         BEGIN RAISE EXCEPTION 'notifications unavailable'; END; $$ LANGUAGE plpgsql",
    )
    .await;
    exec(&app, "DROP TRIGGER IF EXISTS reject_notifications ON notifications").await;
    exec(
        &app,
        "CREATE TRIGGER reject_notifications BEFORE INSERT ON notifications \
         FOR EACH ROW EXECUTE FUNCTION reject_notifications()",
    )
    .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/faculty/issues/{issue_id}/status"),
            Some(json!({ "new_status": "In Review", "note": "checking" })),
            Some(&token),
        )
        .await;

    exec(&app, "DROP TRIGGER IF EXISTS reject_notifications ON notifications").await;
    exec(&app, "DROP FUNCTION IF EXISTS reject_notifications()").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_code(), "INTERNAL_ERROR");
    assert_eq!(response.body["message"], json!("Internal server error"));

    let (events, assignments): (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM issue_status_events WHERE complaint_id = $1), \
                (SELECT COUNT(*) FROM issue_assignments WHERE complaint_id = $1)",
    )
    .bind(issue_id)
    .fetch_one(&app.db_pool)
    .await
    .expect("count writes");
    assert_eq!(events, 0);
    assert_eq!(assignments, 0);

    let detail = app
        .request("GET", &format!("/api/faculty/issues/{issue_id}"), None, Some(&token))
        .await;
    assert_eq!(detail.data()["issue"]["status"], json!("Pending"));

    let retried = app
        .request(
            "PUT",
            &format!("/api/faculty/issues/{issue_id}/status"),
            Some(json!({ "new_status": "In Review" })),
            Some(&token),
        )
        .await;
    assert_eq!(retried.status, StatusCode::OK);
    assert_eq!(retried.data()["old_status"], json!("Pending"));
}
