use std::fmt;

use axum::http::StatusCode;
use thiserror::Error;

/// Message used when an object body carries no `message`.
pub const DEFAULT_MESSAGE: &str = "Error";

/// Response body attached to an [`HttpException`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExceptionBody {
    /// Plain string body, surfaced verbatim.
    Text(String),
    /// Object body with an optional `message` field.
    Object { message: Option<String> },
}

impl ExceptionBody {
    pub fn message(&self) -> &str {
        match self {
            ExceptionBody::Text(text) => text.as_str(),
            ExceptionBody::Object { message } => message.as_deref().unwrap_or(DEFAULT_MESSAGE),
        }
    }
}

impl fmt::Display for ExceptionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// An error raised on purpose by request handling, carrying the status and
/// body the client should see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {body}")]
pub struct HttpException {
    status: StatusCode,
    body: ExceptionBody,
}

impl HttpException {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self::with_body(status, ExceptionBody::Text(message.into()))
    }

    pub fn with_body(status: StatusCode, body: ExceptionBody) -> Self {
        Self { status, body }
    }

    /// Object body whose message is the canonical reason phrase, or none when
    /// the status has no reason phrase.
    pub fn from_status(status: StatusCode) -> Self {
        Self::with_body(
            status,
            ExceptionBody::Object {
                message: status.canonical_reason().map(str::to_string),
            },
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ExceptionBody {
        &self.body
    }

    pub fn message(&self) -> &str {
        self.body.message()
    }
}

/// Helpers for the statuses handlers raise most often
impl HttpException {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_body_is_verbatim() {
        let body = ExceptionBody::Text("Not found".to_string());
        assert_eq!(body.message(), "Not found");
    }

    #[test]
    fn test_object_body_with_message() {
        let body = ExceptionBody::Object {
            message: Some("Invalid id".to_string()),
        };
        assert_eq!(body.message(), "Invalid id");
    }

    #[test]
    fn test_object_body_without_message() {
        let body = ExceptionBody::Object { message: None };
        assert_eq!(body.message(), DEFAULT_MESSAGE);
    }

    #[test]
    fn test_empty_text_body_is_not_replaced() {
        let body = ExceptionBody::Text(String::new());
        assert_eq!(body.message(), "");
    }

    #[test]
    fn test_from_status_uses_reason_phrase() {
        let err = HttpException::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Not Found");
        assert!(matches!(err.body(), ExceptionBody::Object { message: Some(_) }));

        let unknown = HttpException::from_status(StatusCode::from_u16(599).unwrap());
        assert_eq!(unknown.message(), DEFAULT_MESSAGE);
    }

    #[test]
    fn test_helper_methods() {
        assert_eq!(HttpException::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(HttpException::unauthorized("x").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(HttpException::forbidden("x").status(), StatusCode::FORBIDDEN);
        assert_eq!(HttpException::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(HttpException::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(
            HttpException::unprocessable_entity("x").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            HttpException::internal_server_error("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        let err = HttpException::not_found("Card abc123");
        assert_eq!(err.to_string(), "404 Not Found: Card abc123");
    }
}
