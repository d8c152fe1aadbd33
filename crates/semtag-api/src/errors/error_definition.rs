//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// Error types of the semtag crate
use semtag::errors::SemtagError;

/// Kind of error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// A query parameter is missing or invalid
  Validation,
  /// Internal error
  Internal,
  /// Configuration / startup error
  Config,
}

impl ApiErrorKind {
  /// Returns the machine-readable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Validation => "validation_error",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// A query parameter is missing or invalid
  #[error("invalid value for query parameter `{field}`: {reason}")]
  Validation {
    /// Name of the failing query parameter
    field: String,
    /// Why validation failed
    reason: String,
  },

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration / startup error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the kind of this error
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Validation { .. } => ApiErrorKind::Validation,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the machine-readable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a validation error for a query parameter
  #[must_use]
  pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::Validation {
      field: field.into(),
      reason: reason.into(),
    }
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON structure of an error response
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  field: Option<String>,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let field = match &self {
      ApiError::Validation { field, .. } => Some(field.clone()),
      _ => None,
    };
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        field,
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Conversion from SemtagError to ApiError
///
/// Maps domain-layer errors onto API-layer errors. Startup errors (lexicon,
/// config) surface as configuration errors; a tag request against a
/// language with no loaded pipeline is a client-side validation error.
impl From<SemtagError> for ApiError {
  fn from(err: SemtagError) -> Self {
    match err {
      SemtagError::UnsupportedLanguage { language } => {
        ApiError::validation("lang", format!("unsupported language: {language}"))
      }
      SemtagError::Config(err) => ApiError::config(err.to_string()),
      SemtagError::Lexicon(err) => ApiError::config(format!("lexicon error: {err}")),
      // The enum is #[non_exhaustive]; future variants map to internal
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
