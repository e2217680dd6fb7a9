//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use proxima_core::Error as CoreError;
use proxima_gateway::Error as GatewayError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("forbidden: {0}")]
  Forbidden(String),

  #[error("unprocessable: {0}")]
  Unprocessable(String),
}

impl From<GatewayError> for ApiError {
  fn from(e: GatewayError) -> Self {
    let message = e.to_string();
    match e {
      GatewayError::Core(CoreError::NotRegistered { .. }) => {
        ApiError::NotFound(message)
      }
      GatewayError::Core(CoreError::RoleConflict { .. }) => {
        ApiError::Conflict(message)
      }
      GatewayError::Core(CoreError::LocationUnknown { .. }) => {
        ApiError::Unprocessable(message)
      }
      GatewayError::Core(
        CoreError::InvalidCoordinate { .. } | CoreError::InvalidRadius(_),
      )
      | GatewayError::UnknownRole(_)
      | GatewayError::EmptyContact
      | GatewayError::EmptyBroadcast => ApiError::BadRequest(message),
      GatewayError::NotAdmin(_) => ApiError::Forbidden(message),
    }
  }
}

impl From<CoreError> for ApiError {
  fn from(e: CoreError) -> Self { GatewayError::from(e).into() }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
      ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
  }

  /// The text placed under `"error"` in the response body.
  pub fn message(&self) -> &str {
    match self {
      ApiError::NotFound(m)
      | ApiError::BadRequest(m)
      | ApiError::Conflict(m)
      | ApiError::Forbidden(m)
      | ApiError::Unprocessable(m) => m,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = Json(json!({ "error": self.message() }));
    (self.status(), body).into_response()
  }
}
