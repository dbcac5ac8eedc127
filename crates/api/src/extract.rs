//! Request extractors whose rejections go through [`AppError`].
//!
//! axum's own `Json`, `Path` and `Query` reject with plain-text bodies. These
//! wrappers keep malformed requests inside the `{success: false, ...}`
//! envelope with a 400 `VALIDATION_ERROR`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Typed query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
