mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{parse_body, TestApp};
use serde_json::json;
use tower::ServiceExt;

struct Fixture {
    app: TestApp,
    token: String,
    task_id: String,
}

async fn setup() -> Fixture {
    let app = TestApp::new().await;
    let token = app.register_token("alice", "alice@example.com", "pw").await;

    let res = app.post_json("/organizations", &token, json!({ "name": "Acme" })).await;
    let org_id = parse_body(res).await["organization_id"].as_str().unwrap().to_string();

    let res = app.post_json(
        "/api/v1/projects",
        &token,
        json!({ "name": "Apollo", "organization_id": org_id }),
    ).await;
    let project_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.post_json(
        &format!("/api/v1/projects/{project_id}/tasks"),
        &token,
        json!({ "title": "Design hull" }),
    ).await;
    let task_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    Fixture { app, token, task_id }
}

#[tokio::test]
async fn test_comment_lifecycle() {
    let f = setup().await;
    let comments_uri = format!("/api/v1/tasks/{}/comments", f.task_id);
    let alice_id = f.app.user_id(&f.token).await;

    let res = f.app.post_json(&comments_uri, &f.token, json!({ "content": "First" })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let first = parse_body(res).await;
    assert_eq!(first["author_id"], alice_id.as_str());
    assert_eq!(first["content"], "First");

    f.app.post_json(&comments_uri, &f.token, json!({ "content": "Second" })).await;

    // Listed oldest first
    let list = parse_body(f.app.get(&comments_uri, &f.token).await).await;
    let contents: Vec<&str> = list.as_array().unwrap().iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["First", "Second"]);

    // Edit
    let comment_id = first["id"].as_str().unwrap();
    let res = f.app.put_json(
        &format!("/api/v1/comments/{comment_id}"),
        &f.token,
        json!({ "content": "First, revised" }),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["content"], "First, revised");

    // Delete, then deleting again is NotFound
    let res = f.app.delete(&format!("/api/v1/comments/{comment_id}"), &f.token).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = f.app.delete(&format!("/api/v1/comments/{comment_id}"), &f.token).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comment_on_missing_task_not_found() {
    let f = setup().await;

    let res = f.app.post_json(
        "/api/v1/tasks/ffffffffffffffffffffffff/comments",
        &f.token,
        json!({ "content": "Into the void" }),
    ).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_editing_missing_comment_not_found() {
    let f = setup().await;

    let res = f.app.put_json(
        "/api/v1/comments/ffffffffffffffffffffffff",
        &f.token,
        json!({ "content": "Ghost edit" }),
    ).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comments_require_authentication() {
    let f = setup().await;

    let res = f.app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri(format!("/api/v1/tasks/{}/comments", f.task_id))
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
