pub mod auth;
pub mod comment;
pub mod health;
pub mod member;
pub mod notification;
pub mod organization;
pub mod project;
pub mod task;
pub mod user;

use crate::error::AppError;
use bson::oid::ObjectId;

pub(crate) fn parse_object_id(value: &str, what: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value).map_err(|_| AppError::Validation(format!("Invalid {what} id")))
}
