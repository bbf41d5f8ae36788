// Library exports for the binary and integration tests
pub mod app_types;
pub mod cli;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod shutdown_signal;
pub mod status;

pub use app_types::{AppError, AppJson, AppPath, AppQuery, AppResult};
pub use envelope::{ErrorDetail, ErrorEnvelope};
pub use error::{ExceptionBody, HttpException};
pub use filter::{register, ExceptionFilter, GlobalExceptionFilter};
