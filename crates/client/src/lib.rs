//! Typed HTTP client for the stockroom API.
//!
//! - [`StockroomClient`] -- one method per endpoint, carrying a
//!   [`SessionContext`](stockroom_core::session::SessionContext) that is
//!   updated on register, login and logout.
//! - [`models`] -- wire types, implementing the `stockroom_core::records`
//!   traits so the shared search and aggregation code runs on them.
//! - [`search`] -- search over already-fetched listings.

pub mod api;
pub mod error;
pub mod models;
pub mod search;

pub use api::StockroomClient;
pub use error::ClientError;
