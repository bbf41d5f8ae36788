use axum::{
    http::{header, StatusCode},
    response::Response,
};

use super::{ExceptionFilter, GlobalExceptionFilter};
use crate::error::HttpException;

pub const TIMEOUT_MESSAGE: &str = "Request timed out";

/// Render the bare 408 produced by `TimeoutLayer` as an error envelope.
///
/// Use with `axum::middleware::map_response`, outside the timeout layer.
/// Responses that already carry a body type are left alone.
pub async fn render_timeout(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    GlobalExceptionFilter.catch(HttpException::new(StatusCode::REQUEST_TIMEOUT, TIMEOUT_MESSAGE).into())
}
