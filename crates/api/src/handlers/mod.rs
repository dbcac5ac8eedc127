//! HTTP handlers, one module per resource.

pub mod inventory;
pub mod items;
pub mod reports;
pub mod search;
pub mod stats;
pub mod stock;
pub mod stock_out;
pub mod users;
