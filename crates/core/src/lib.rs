//! Pure domain logic for the stockroom inventory service.
//!
//! Nothing in this crate touches the database. Aggregation, search and
//! reporting work over pre-loaded rows handed in by the caller through the
//! [`records`] traits, so the same code runs on the server and in the client.

pub mod category;
pub mod error;
pub mod inventory;
pub mod records;
pub mod report;
pub mod search;
pub mod session;
pub mod stats;
pub mod types;
