use std::any::Any;

use anyhow::anyhow;
use axum::response::Response;

use super::{ExceptionFilter, GlobalExceptionFilter};

/// Convert a handler panic into the generic 500 response.
///
/// Passed to `CatchPanicLayer::custom`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    GlobalExceptionFilter.catch(anyhow!("handler panicked: {details}"))
}
