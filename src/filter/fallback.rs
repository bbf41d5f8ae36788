use axum::http::{Method, StatusCode, Uri};

use crate::{app_types::AppError, error::HttpException};

/// Fallback for requests that match no route.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    HttpException::not_found(cannot(&method, &uri)).into()
}

/// Fallback for a known path requested with a method it has no handler for.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    HttpException::new(StatusCode::METHOD_NOT_ALLOWED, cannot(&method, &uri)).into()
}

fn cannot(method: &Method, uri: &Uri) -> String {
    format!("Cannot {} {}", method, uri.path())
}
