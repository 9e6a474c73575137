use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::Span;

/// Resolves the caller from the `Authorization: Bearer` header. Runs before
/// every protected handler: token verification failures are Unauthorized,
/// a valid token whose subject no longer exists is NotFound.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let claims = app_state.auth_service.verify(token)?;
        let user_id = ObjectId::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;

        let user = app_state
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        Span::current().record("user_id", claims.sub.as_str());

        Ok(AuthUser(user))
    }
}
