use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, comment, health, member, notification, organization, project, task, user};
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Users
        .route("/api/v1/users/me", get(user::get_me).put(user::update_me))
        .route("/api/v1/users/search", get(user::search_users))

        // Organizations
        .route("/organizations", post(organization::create_organization))
        .route("/organizations/join", post(organization::join_organization))

        // Projects & membership
        .route("/api/v1/projects", get(project::list_projects).post(project::create_project))
        .route(
            "/api/v1/projects/{id}",
            get(project::get_project).put(project::update_project).delete(project::delete_project),
        )
        .route("/api/v1/projects/{id}/members", post(member::add_member))
        .route("/api/v1/projects/{id}/members/{user_id}", delete(member::remove_member))

        // Tasks
        .route("/api/v1/projects/{id}/tasks", get(task::list_tasks).post(task::create_task))
        .route(
            "/api/v1/tasks/{id}",
            get(task::get_task).put(task::update_task).delete(task::delete_task),
        )

        // Comments
        .route(
            "/api/v1/tasks/{task_id}/comments",
            get(comment::list_comments).post(comment::add_comment),
        )
        .route(
            "/api/v1/comments/{id}",
            put(comment::edit_comment).delete(comment::delete_comment),
        )

        // Notifications
        .route("/api/v1/notifications", get(notification::list_notifications))
        .route("/api/v1/notifications/{id}/read", post(notification::mark_notification_read))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
