//! Global exception filter: turns any error raised while handling a request
//! into an [`ErrorEnvelope`] response.

pub mod fallback;
pub mod panic;
pub mod timeout;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::{envelope::ErrorEnvelope, error::HttpException, status::status_code_name};

/// Message sent to clients for every unstructured error
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected server error";

/// Filters handle errors raised during request processing.
/// They must always return a valid Response.
pub trait ExceptionFilter: Send + Sync + 'static {
    fn catch(&self, error: anyhow::Error) -> Response;
}

/// The application-wide filter. Stateless, so every request can use its own
/// copy.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalExceptionFilter;

impl GlobalExceptionFilter {
    /// Status and envelope for `error`.
    ///
    /// Unstructured errors are logged once at error level; their details are
    /// never put in the envelope.
    pub fn respond(&self, error: &anyhow::Error) -> (StatusCode, ErrorEnvelope) {
        match as_http_exception(error) {
            Some(exception) => {
                let status = exception.status();
                (
                    status,
                    ErrorEnvelope::new(status_code_name(status), exception.message()),
                )
            }
            None => {
                error!("Unhandled exception: {:?}", error);

                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (
                    status,
                    ErrorEnvelope::new(status_code_name(status), UNEXPECTED_ERROR_MESSAGE),
                )
            }
        }
    }
}

impl ExceptionFilter for GlobalExceptionFilter {
    fn catch(&self, error: anyhow::Error) -> Response {
        let (status, envelope) = self.respond(&error);

        (status, Json(envelope)).into_response()
    }
}

/// Recover the structured form of `error`, if it has one.
///
/// Extractor rejections count as structured: axum already decided their
/// status and client-facing text.
fn as_http_exception(error: &anyhow::Error) -> Option<HttpException> {
    if let Some(exception) = error.downcast_ref::<HttpException>() {
        return Some(exception.clone());
    }

    if let Some(rejection) = error.downcast_ref::<JsonRejection>() {
        return Some(HttpException::new(rejection.status(), rejection.body_text()));
    }

    if let Some(rejection) = error.downcast_ref::<PathRejection>() {
        return Some(HttpException::new(rejection.status(), rejection.body_text()));
    }

    if let Some(rejection) = error.downcast_ref::<QueryRejection>() {
        return Some(HttpException::new(rejection.status(), rejection.body_text()));
    }

    None
}

/// Register the filter as the router's fallback for unmatched routes, wrong
/// methods and panicking handlers. Call once, after all routes are added.
pub fn register<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .fallback(fallback::route_not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(CatchPanicLayer::custom(panic::handle_panic))
}
