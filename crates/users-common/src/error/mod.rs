//! Error types shared across the application

mod app_error;

pub use app_error::{AppError, AppResult, ErrorResponse};
