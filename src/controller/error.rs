use crate::model::ApiError;
use rocket::{catch, http::Status, Request};

#[catch(default)]
pub fn default(status: Status, req: &Request) -> ApiError {
    ApiError::custom(status.code, &format!("Failed to handle URI {}", req.uri()))
}
