//! Request extractors whose rejections are [`ApiError`]s.
//!
//! axum's own `Json` and `Path` reject with plain-text bodies and their own
//! status codes. These wrappers route every malformed body or path segment
//! through [`ApiError::BadRequest`] so clients always get `{"error": ...}`.

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, Path},
};

use crate::error::ApiError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
