// shopcart_service/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use shopcart::{DecodeError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("{0}")]
  Validation(String),

  #[error("{0}")]
  NotFound(String),

  /// The `(customer_id, product_id)` pair is already in a cart.
  #[error("{0}")]
  Duplicate(String),

  #[error("Content-Type must be {expected}")]
  UnsupportedMediaType { expected: &'static str },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Unavailable: {source}")]
  StoreUnavailable {
    #[source]
    source: StoreError,
  },

  #[error("Database Error: {source}")]
  Store {
    #[source]
    source: StoreError,
  },
}

impl From<StoreError> for AppError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::Validation(m) => AppError::Validation(m),
      StoreError::Decode(e) => AppError::Validation(e.to_string()),
      StoreError::Duplicate { .. } => AppError::Duplicate(err.to_string()),
      StoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
      StoreError::Connection(_) => AppError::StoreUnavailable { source: err },
      StoreError::Database(_) => AppError::Store { source: err },
    }
  }
}

impl From<DecodeError> for AppError {
  fn from(err: DecodeError) -> Self {
    AppError::Validation(err.to_string())
  }
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub status_code: u16,
  pub error: String,
  pub message: String,
}

impl ErrorBody {
  pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code: status.as_u16(),
      error: status.canonical_reason().unwrap_or("Unknown Error").to_string(),
      message: message.into(),
    }
  }
}

impl AppError {
  /// Text safe to hand to clients. Server-side failures get a generic message;
  /// the detail only goes to the log.
  fn client_message(&self) -> String {
    match self {
      AppError::StoreUnavailable { .. } => "The database is currently unavailable. Please try again later.".to_string(),
      AppError::Store { .. } => "Database operation failed.".to_string(),
      AppError::Config(_) => "An internal error occurred.".to_string(),
      other => other.to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::Duplicate(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
      AppError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
      AppError::Config(_) | AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Infrastructure failures are logged louder than bad client input.
    if status.is_server_error() {
      tracing::error!(application_error = %self, status = status.as_u16(), "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with error");
    }
    HttpResponse::build(status).json(ErrorBody::new(status, self.client_message()))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
