//! Stock-out (deployment history) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::records::DeploymentRecord;
use stockroom_core::types::{Date, DbId, Timestamp};
use validator::Validate;

/// A row from the `stock_out` table: a snapshot of a unit at deployment.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StockOutRecord {
    pub id: DbId,
    pub stock_id: DbId,
    pub item_id: DbId,
    pub item_name: String,
    pub item_category: String,
    pub item_brand: String,
    pub item_model: String,
    pub serial_number: Option<String>,
    pub asset_id: Option<String>,
    pub location: Option<String>,
    pub staff_id: Option<String>,
    pub deployment_location: Option<String>,
    pub deployment_date: Option<Date>,
    pub stock_out_date: Timestamp,
}

/// DTO for moving a unit out of stock.
///
/// Deployment fields are optional here; presence is enforced by the client.
/// When `item_id` is supplied it must match the unit's item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStockOut {
    pub stock_id: DbId,
    pub item_id: Option<DbId>,
    #[validate(length(max = 100))]
    pub staff_id: Option<String>,
    #[validate(length(max = 200))]
    pub deployment_location: Option<String>,
    pub deployment_date: Option<Date>,
}

/// Result of a stock-out transition.
#[derive(Debug)]
pub enum TransitionOutcome {
    /// The unit was moved; this is the new history row.
    Deployed(StockOutRecord),
    /// No stock row with the requested id (never existed or already moved).
    StockNotFound,
    /// The caller's `item_id` does not match the unit's item.
    ItemMismatch { stock_item_id: DbId },
}

impl DeploymentRecord for StockOutRecord {
    fn item_name(&self) -> &str {
        &self.item_name
    }
    fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }
    fn asset_id(&self) -> Option<&str> {
        self.asset_id.as_deref()
    }
    fn staff_id(&self) -> Option<&str> {
        self.staff_id.as_deref()
    }
}
