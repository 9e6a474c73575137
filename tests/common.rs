use synergy_backend::{
    api::router::create_router,
    config::Config,
    infra::factory::bootstrap_state,
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_SECRET_KEY: &str = "test-secret-key";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let config = Config {
            database_url: "memory://".to_string(),
            database_name: "synergysphere-test".to_string(),
            port: 0,
            secret_key: TEST_SECRET_KEY.to_string(),
            access_token_ttl_minutes: 30,
            refresh_token_ttl_days: 7,
        };

        let state = Arc::new(bootstrap_state(&config).await);
        let router = create_router(state.clone());

        Self { router, state }
    }

    /// Registers a user and returns the token response body.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Value {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password
                }).to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Register failed in test helper: status {}", response.status());
        }

        parse_body(response).await
    }

    /// Registers a user and returns just the access token.
    pub async fn register_token(&self, username: &str, email: &str, password: &str) -> String {
        let body = self.register(username, email, password).await;
        body["access_token"].as_str().expect("No access_token in body").to_string()
    }

    pub async fn login(&self, username: &str, password: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!("username={username}&password={password}")))
                .unwrap()
        ).await.unwrap()
    }

    /// Resolves the caller id behind an access token via /users/me.
    pub async fn user_id(&self, access_token: &str) -> String {
        let response = self.get("/api/v1/users/me", access_token).await;
        assert!(response.status().is_success(), "users/me failed: {}", response.status());
        let body = parse_body(response).await;
        body["id"].as_str().expect("No id in body").to_string()
    }

    pub async fn get(&self, uri: &str, token: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, token: &str, body: Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn put_json(&self, uri: &str, token: &str, body: Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn delete(&self, uri: &str, token: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
