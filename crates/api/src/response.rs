//! Shared response envelope for API handlers.
//!
//! Successful `/api/v1` responses are `{ "success": true, "data": ... }`.
//! Failures are produced by [`AppError`](crate::error::AppError) as
//! `{ "success": false, "error": ..., "code": ... }`.

use serde::Serialize;
use stockroom_core::types::DbId;

/// Standard success envelope.
///
/// ```ignore
/// Ok(Json(ApiResponse::ok(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload returned by DELETE endpoints.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: DbId,
    pub deleted: bool,
}

impl Deleted {
    pub fn new(id: DbId) -> Self {
        Self { id, deleted: true }
    }
}
