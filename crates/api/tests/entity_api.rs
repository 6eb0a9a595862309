//! HTTP-level integration tests for the entity API endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener, over an in-memory spreadsheet.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_id, delete, get, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_project_returns_201() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/v1/projects", json!({"title": "Pantry"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Pantry");
    assert_eq!(json["status"], "available");
    assert_eq!(json["color"], "blue");
    assert!(json["assigneeName"].is_null());
}

#[tokio::test]
async fn test_create_project_with_blank_title_returns_400() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/v1/projects", json!({"title": "  "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_get_project_by_id() {
    let app = common::build_test_app();
    let id = create_id(&app, "/api/v1/projects", json!({"title": "Get Me"})).await;

    let response = get(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Get Me");
}

#[tokio::test]
async fn test_get_nonexistent_project_returns_404() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/projects/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id 999 not found");
}

#[tokio::test]
async fn test_assigning_project_moves_it_in_progress() {
    let app = common::build_test_app();
    let id = create_id(&app, "/api/v1/projects", json!({"title": "Van"})).await;

    let response = put_json(
        &app,
        &format!("/api/v1/projects/{id}"),
        json!({"assigneeName": "Ana", "assigneeId": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["assigneeId"], 3);

    let response = put_json(
        &app,
        &format!("/api/v1/projects/{id}"),
        json!({"assigneeName": ""}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "available");
    assert!(json["assigneeName"].is_null());
}

#[tokio::test]
async fn test_delete_and_restore_project() {
    let app = common::build_test_app();
    let id = create_id(&app, "/api/v1/projects", json!({"title": "Gone"})).await;

    let response = delete(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(&app, &format!("/api/v1/projects/{id}/restore"), json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Gone");

    let list = body_json(get(&app, "/api/v1/projects").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_status_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/projects",
        json!({"title": "Bad", "status": "finished"}),
    )
    .await;

    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_user_crud_round_trip() {
    let app = common::build_test_app();
    let id = create_id(
        &app,
        "/api/v1/users",
        json!({
            "username": "ana",
            "email": "ana@example.org",
            "permissions": ["view_reports"],
            "metadata": {"phone": "555-0100"}
        }),
    )
    .await;

    let json = body_json(get(&app, &format!("/api/v1/users/{id}")).await).await;
    assert_eq!(json["role"], "volunteer");
    assert_eq!(json["permissions"], json!(["view_reports"]));
    assert_eq!(json["metadata"]["phone"], "555-0100");

    let response = put_json(&app, &format!("/api/v1/users/{id}"), json!({"role": "admin"})).await;
    assert_eq!(body_json(response).await["role"], "admin");

    let response = delete(&app, &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_duplicate_email_returns_409() {
    let app = common::build_test_app();
    create_id(
        &app,
        "/api/v1/users",
        json!({"username": "ana", "email": "ana@example.org"}),
    )
    .await;

    let response = post_json(
        &app,
        "/api/v1/users",
        json!({"username": "ana2", "email": "ANA@example.org"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_replies_and_thread() {
    let app = common::build_test_app();
    let root = create_id(
        &app,
        "/api/v1/messages",
        json!({"sender": "ann", "content": "Who can drive Saturday?", "committee": "events"}),
    )
    .await;

    for content in ["Me", "Me too"] {
        let response = post_json(
            &app,
            &format!("/api/v1/messages/{root}/replies"),
            json!({"sender": "bo", "content": content}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["threadId"], root);
        assert_eq!(json["parentId"], root);
        assert_eq!(json["committee"], "events");
    }

    let json = body_json(get(&app, &format!("/api/v1/messages/{root}")).await).await;
    assert_eq!(json["replyCount"], 2);

    let thread = body_json(get(&app, &format!("/api/v1/messages/{root}/thread")).await).await;
    assert_eq!(thread["data"].as_array().unwrap().len(), 3);

    let events = body_json(get(&app, "/api/v1/messages?committee=events").await).await;
    assert_eq!(events.as_array().unwrap().len(), 3);
    let general = body_json(get(&app, "/api/v1/messages?committee=general").await).await;
    assert!(general.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_reply_to_missing_message_returns_404() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/messages/5/replies",
        json!({"sender": "bo", "content": "hello?"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Sandwich collections and weekly reports
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_collection_listing_and_stats() {
    let app = common::build_test_app();
    create_id(
        &app,
        "/api/v1/sandwich-collections",
        json!({
            "collectionDate": "2024-05-01",
            "hostName": "Main St",
            "individualSandwiches": 20,
            "groupCollections": [{"groupName": "Scouts", "sandwichCount": 30}]
        }),
    )
    .await;
    create_id(
        &app,
        "/api/v1/sandwich-collections",
        json!({
            "collectionDate": "2024-05-08",
            "hostName": "Oak Ave",
            "individualSandwiches": 5,
            "groupCollections": "[]"
        }),
    )
    .await;

    let page = body_json(get(&app, "/api/v1/sandwich-collections?limit=1").await).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["collectionDate"], "2024-05-08");

    let by_host = body_json(get(&app, "/api/v1/sandwich-collections?host=main%20st").await).await;
    assert_eq!(by_host.as_array().unwrap().len(), 1);

    let stats = body_json(get(&app, "/api/v1/sandwich-collections/stats").await).await;
    assert_eq!(
        stats["data"],
        json!({
            "totalEntries": 2,
            "individualSandwiches": 25,
            "groupSandwiches": 30,
            "totalSandwiches": 55
        })
    );
}

#[tokio::test]
async fn test_negative_collection_count_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/v1/sandwich-collections",
        json!({"collectionDate": "2024-05-01", "hostName": "Main St", "individualSandwiches": -3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let id = create_id(
        &app,
        "/api/v1/sandwich-collections",
        json!({"collectionDate": "2024-05-01", "hostName": "Main St", "individualSandwiches": 3}),
    )
    .await;
    let response = put_json(
        &app,
        &format!("/api/v1/sandwich-collections/{id}"),
        json!({"individualSandwiches": -1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_collection_stats_saturate_on_huge_counts() {
    let app = common::build_test_app();
    for _ in 0..2 {
        create_id(
            &app,
            "/api/v1/sandwich-collections",
            json!({
                "collectionDate": "2024-05-01",
                "hostName": "Main St",
                "individualSandwiches": i64::MAX
            }),
        )
        .await;
    }

    let response = get(&app, "/api/v1/sandwich-collections/stats").await;
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;
    assert_eq!(stats["data"]["totalEntries"], 2);
    assert_eq!(stats["data"]["individualSandwiches"], i64::MAX);
    assert_eq!(stats["data"]["totalSandwiches"], i64::MAX);
}

#[tokio::test]
async fn test_weekly_reports_latest_first() {
    let app = common::build_test_app();
    for week in ["2024-06-07", "2024-06-14"] {
        create_id(
            &app,
            "/api/v1/weekly-reports",
            json!({"weekEnding": week, "sandwichCount": 10, "submittedBy": "ann"}),
        )
        .await;
    }

    let list = body_json(get(&app, "/api/v1/weekly-reports").await).await;
    assert_eq!(list[0]["weekEnding"], "2024-06-14");

    let response = post_json(
        &app,
        "/api/v1/weekly-reports",
        json!({"weekEnding": "2024-06-21", "sandwichCount": -1, "submittedBy": "ann"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Minutes and links
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_meeting_minutes_and_drive_links() {
    let app = common::build_test_app();
    let minutes = create_id(
        &app,
        "/api/v1/meeting-minutes",
        json!({"title": "June board", "date": "2024-06-03"}),
    )
    .await;
    let link = create_id(
        &app,
        "/api/v1/drive-links",
        json!({"title": "Handbook", "url": "https://drive.example/handbook"}),
    )
    .await;

    let response = put_json(
        &app,
        &format!("/api/v1/meeting-minutes/{minutes}"),
        json!({"summary": "Approved budget"}),
    )
    .await;
    assert_eq!(body_json(response).await["summary"], "Approved budget");

    let json = body_json(get(&app, &format!("/api/v1/drive-links/{link}")).await).await;
    assert_eq!(json["iconColor"], "blue");

    let response = delete(&app, &format!("/api/v1/drive-links/{link}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let list = body_json(get(&app, "/api/v1/drive-links").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Tasks, completions, comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_tasks_are_scoped_to_their_project() {
    let app = common::build_test_app();
    let project = create_id(&app, "/api/v1/projects", json!({"title": "Drive"})).await;
    let other = create_id(&app, "/api/v1/projects", json!({"title": "Other"})).await;

    let task = create_id(
        &app,
        &format!("/api/v1/projects/{project}/tasks"),
        json!({"title": "Book van"}),
    )
    .await;

    let response = get(&app, &format!("/api/v1/projects/{project}/tasks/{task}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["order"], 0);
    assert_eq!(json["status"], "pending");

    let response = get(&app, &format!("/api/v1/projects/{other}/tasks/{task}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(
        &app,
        "/api/v1/projects/77/tasks",
        json!({"title": "Orphan"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_task_completions() {
    let app = common::build_test_app();
    let project = create_id(&app, "/api/v1/projects", json!({"title": "Drive"})).await;
    let task = create_id(
        &app,
        &format!("/api/v1/projects/{project}/tasks"),
        json!({"title": "Book van"}),
    )
    .await;

    let uri = format!("/api/v1/tasks/{task}/completions");
    let first = create_id(&app, &uri, json!({"userId": 4})).await;
    let again = create_id(&app, &uri, json!({"userId": 4})).await;
    assert_eq!(first, again);

    let list = body_json(get(&app, &uri).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let response = delete(&app, &format!("{uri}/users/4")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete(&app, &format!("{uri}/users/4")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(&app, "/api/v1/tasks/99/completions", json!({"userId": 4})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_project_comments() {
    let app = common::build_test_app();
    let project = create_id(&app, "/api/v1/projects", json!({"title": "Drive"})).await;
    let uri = format!("/api/v1/projects/{project}/comments");

    let comment = create_id(&app, &uri, json!({"userId": 2, "content": "On it"})).await;
    let response = put_json(
        &app,
        &format!("{uri}/{comment}"),
        json!({"content": "Done"}),
    )
    .await;
    assert_eq!(body_json(response).await["content"], "Done");

    let list = body_json(get(&app, &uri).await).await;
    assert_eq!(list[0]["content"], "Done");

    let response = delete(&app, &format!("{uri}/{comment}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
