mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

struct Fixture {
    app: TestApp,
    owner: String,
    other: String,
    other_id: String,
    project_id: String,
}

async fn setup() -> Fixture {
    let app = TestApp::new().await;
    let owner = app.register_token("alice", "alice@example.com", "pw").await;
    let other = app.register_token("bob", "bob@example.com", "pw").await;
    let other_id = app.user_id(&other).await;

    let res = app.post_json("/organizations", &owner, json!({ "name": "Acme" })).await;
    let org_id = parse_body(res).await["organization_id"].as_str().unwrap().to_string();

    let res = app.post_json(
        "/api/v1/projects",
        &owner,
        json!({ "name": "Apollo", "organization_id": org_id }),
    ).await;
    let project_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    Fixture { app, owner, other, other_id, project_id }
}

#[tokio::test]
async fn test_task_creation_defaults_and_membership_gate() {
    let f = setup().await;
    let tasks_uri = format!("/api/v1/projects/{}/tasks", f.project_id);

    let res = f.app.post_json(&tasks_uri, &f.owner, json!({ "title": "Design hull" })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let task = parse_body(res).await;
    assert_eq!(task["status"], "pending");
    assert!(task["assignee_id"].is_null());

    // Non-members cannot touch the task list
    let res = f.app.post_json(&tasks_uri, &f.other, json!({ "title": "Sabotage" })).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = f.app.get(&tasks_uri, &f.other).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_task_status_is_validated() {
    let f = setup().await;
    let tasks_uri = format!("/api/v1/projects/{}/tasks", f.project_id);

    let res = f.app.post_json(&tasks_uri, &f.owner, json!({
        "title": "Design hull", "status": "done"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = f.app.post_json(&tasks_uri, &f.owner, json!({ "title": "Design hull" })).await;
    let task_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = f.app.put_json(&format!("/api/v1/tasks/{task_id}"), &f.owner, json!({
        "status": "done"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_assignment_notifies_assignee() {
    let f = setup().await;
    let members_uri = format!("/api/v1/projects/{}/members", f.project_id);
    f.app.post_json(&members_uri, &f.owner, json!({
        "user_id": f.other_id, "role": "contributor"
    })).await;

    let res = f.app.post_json(&format!("/api/v1/projects/{}/tasks", f.project_id), &f.owner, json!({
        "title": "Design hull", "assignee_id": f.other_id
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let notifications = parse_body(f.app.get("/api/v1/notifications", &f.other).await).await;
    let list = notifications.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["type"], "task_assigned");
    assert_eq!(list[0]["is_read"], false);
    assert!(list[0]["message"].as_str().unwrap().contains("Design hull"));

    // Mark read, but only the recipient can
    let notification_id = list[0]["id"].as_str().unwrap();
    let res = f.app.post_json(
        &format!("/api/v1/notifications/{notification_id}/read"), &f.owner, json!({}),
    ).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = f.app.post_json(
        &format!("/api/v1/notifications/{notification_id}/read"), &f.other, json!({}),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);

    let notifications = parse_body(f.app.get("/api/v1/notifications", &f.other).await).await;
    assert_eq!(notifications.as_array().unwrap()[0]["is_read"], true);
}

#[tokio::test]
async fn test_reassignment_notifies_new_assignee_once() {
    let f = setup().await;
    let members_uri = format!("/api/v1/projects/{}/members", f.project_id);
    f.app.post_json(&members_uri, &f.owner, json!({
        "user_id": f.other_id, "role": "contributor"
    })).await;

    let res = f.app.post_json(&format!("/api/v1/projects/{}/tasks", f.project_id), &f.owner, json!({
        "title": "Design hull"
    })).await;
    let task_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    // Assign, then update without touching the assignee
    f.app.put_json(&format!("/api/v1/tasks/{task_id}"), &f.owner, json!({
        "assignee_id": f.other_id
    })).await;
    f.app.put_json(&format!("/api/v1/tasks/{task_id}"), &f.owner, json!({
        "description": "Aluminium alloy"
    })).await;

    let notifications = parse_body(f.app.get("/api/v1/notifications", &f.other).await).await;
    assert_eq!(notifications.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_progress_tracks_task_counts() {
    let f = setup().await;
    let tasks_uri = format!("/api/v1/projects/{}/tasks", f.project_id);
    let project_uri = format!("/api/v1/projects/{}", f.project_id);

    let res = f.app.post_json(&tasks_uri, &f.owner, json!({ "title": "One" })).await;
    let first_id = parse_body(res).await["id"].as_str().unwrap().to_string();
    f.app.post_json(&tasks_uri, &f.owner, json!({ "title": "Two" })).await;

    let project = parse_body(f.app.get(&project_uri, &f.owner).await).await;
    assert_eq!(project["progress"]["total_tasks"], 2);
    assert_eq!(project["progress"]["completed_tasks"], 0);

    let res = f.app.put_json(&format!("/api/v1/tasks/{first_id}"), &f.owner, json!({
        "status": "completed"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let project = parse_body(f.app.get(&project_uri, &f.owner).await).await;
    assert_eq!(project["progress"]["total_tasks"], 2);
    assert_eq!(project["progress"]["completed_tasks"], 1);
    assert_eq!(project["progress"]["completion"], 50.0);

    let res = f.app.delete(&format!("/api/v1/tasks/{first_id}"), &f.owner).await;
    assert_eq!(res.status(), StatusCode::OK);

    let project = parse_body(f.app.get(&project_uri, &f.owner).await).await;
    assert_eq!(project["progress"]["total_tasks"], 1);
    assert_eq!(project["progress"]["completed_tasks"], 0);
}

#[tokio::test]
async fn test_task_read_is_member_gated() {
    let f = setup().await;

    let res = f.app.post_json(&format!("/api/v1/projects/{}/tasks", f.project_id), &f.owner, json!({
        "title": "Design hull"
    })).await;
    let task_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = f.app.get(&format!("/api/v1/tasks/{task_id}"), &f.other).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = f.app.get(&format!("/api/v1/tasks/{task_id}"), &f.owner).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = f.app.get("/api/v1/tasks/ffffffffffffffffffffffff", &f.owner).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
