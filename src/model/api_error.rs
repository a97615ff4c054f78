use super::ValidationError;
use anyhow::Error;
use rocket::{
    async_trait,
    http::{ContentType, Status},
    request::Request,
    response::{self, Responder, Response},
    serde::{json, Serialize},
};
use std::io::Cursor;
use tracing::{error, info};

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing)]
    pub error: Option<Error>,
}

impl ApiError {
    pub fn custom(code: u16, message: &str) -> ApiError {
        ApiError {
            code,
            message: message.to_string(),
            field: None,
            error: None,
        }
    }

    pub fn upstream(error: Error) -> ApiError {
        ApiError {
            code: Status::BadGateway.code,
            message: format!("Upstream provider failure: {}", summary(&error)),
            field: None,
            error: Some(error),
        }
    }
}

/// Outermost context plus root cause. The full chain only goes to the log.
fn summary(error: &Error) -> String {
    let root = error.root_cause().to_string();
    let top = error.to_string();

    if error.chain().count() == 1 || top == root {
        top
    } else {
        format!("{}: {}", top, root)
    }
}

#[async_trait]
impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        match &self.error {
            Some(error) if self.code >= 500 => error!(uri = %req.uri(), "{:#}", error),
            _ => info!(uri = %req.uri(), code = self.code, message = %self.message, "Request rejected"),
        }

        let body = json::to_string(&self).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .header(ContentType::JSON)
            .status(Status::new(self.code))
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError {
            code: Status::BadRequest.code,
            message: e.to_string(),
            field: Some(e.field.to_string()),
            error: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::ApiError;
    use crate::model::ValidationError;
    use anyhow::anyhow;
    use rocket::serde::json;

    #[test]
    fn validation_body() {
        let err: ApiError = ValidationError::new("amount", "must be a number").into();
        assert_eq!(400, err.code);
        assert_eq!(
            r#"{"code":400,"message":"amount: must be a number","field":"amount"}"#,
            json::to_string(&err).unwrap()
        );
    }

    #[test]
    fn upstream_body() {
        let err = ApiError::upstream(anyhow!("timed out").context("Request failed"));
        assert_eq!(502, err.code);
        assert_eq!(
            r#"{"code":502,"message":"Upstream provider failure: Request failed: timed out"}"#,
            json::to_string(&err).unwrap()
        );
    }

    #[test]
    fn upstream_message_skips_intermediate_causes() {
        let err = anyhow!("Connection refused")
            .context("tcp connect error")
            .context("Connection refused")
            .context("Request to http://localhost/convert failed");
        let err = ApiError::upstream(err);
        assert_eq!(
            "Upstream provider failure: Request to http://localhost/convert failed: Connection refused",
            err.message
        );
    }

    #[test]
    fn upstream_message_single_error() {
        let err = ApiError::upstream(anyhow!("boom"));
        assert_eq!("Upstream provider failure: boom", err.message);
    }
}
