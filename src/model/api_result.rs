use super::{ApiError, ValidationError};
use anyhow::Result;
use rocket::serde::{json::Json, Serialize};
use rocket::Responder;

#[derive(Responder)]
#[response(bound = "T: Serialize")]
pub enum ApiResult<T> {
    Ok(Json<T>),
    Err(ApiError),
}

impl<T> ApiResult<T> {
    /// Any error here came from the rate provider.
    pub fn upstream(result: Result<T>) -> ApiResult<T> {
        match result {
            Ok(val) => ApiResult::Ok(Json(val)),
            Err(e) => ApiResult::Err(ApiError::upstream(e)),
        }
    }
}

impl<T> From<ApiError> for ApiResult<T> {
    fn from(e: ApiError) -> Self {
        ApiResult::Err(e)
    }
}

impl<T> From<ValidationError> for ApiResult<T> {
    fn from(e: ValidationError) -> Self {
        ApiResult::Err(e.into())
    }
}
