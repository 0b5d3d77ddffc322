use actix_web::HttpResponse;
use std::fmt;

/// Error taxonomy for the service.
///
/// Validation/Conflict/Auth are detected before any mutation and map to
/// 400. ExternalService is caught at the dispatch site and downgraded to
/// a boolean result, so it normally never reaches the HTTP boundary.
/// Storage and Unexpected map to a generic 500 with the detail logged.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Conflict(String),
    Auth(String),
    ExternalService(String),
    Storage(String),
    Unexpected(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Auth(msg) => write!(f, "Auth error: {}", msg),
            AppError::ExternalService(msg) => write!(f, "External service error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Unexpected(msg) => write!(f, "Unexpected error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Client-facing message. Internal failures collapse to a generic
    /// message; the detail stays in the logs.
    pub fn public_message(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::Conflict(msg) | AppError::Auth(msg) => msg,
            _ => "Server error",
        }
    }

    /// Maps the error to the HTTP response the original API contract
    /// promises: 400 with the message for request-level errors, generic
    /// 500 for everything else.
    pub fn to_response(&self) -> HttpResponse {
        let body = serde_json::json!({ "error": self.public_message() });
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::Auth(_) => {
                HttpResponse::BadRequest().json(body)
            }
            _ => HttpResponse::InternalServerError().json(body),
        }
    }
}
