//! Stock unit entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::records::StockRecord;
use stockroom_core::types::{Date, DbId, Timestamp};
use validator::Validate;

/// A row from the `stock` table.
///
/// Deployment fields are staging data filled in before the unit is moved to
/// `stock_out`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StockUnit {
    pub id: DbId,
    pub item_id: DbId,
    pub serial_number: Option<String>,
    pub asset_id: Option<String>,
    pub location: Option<String>,
    pub staff_id: Option<String>,
    pub deployment_location: Option<String>,
    pub deployment_date: Option<Date>,
    pub created_at: Timestamp,
}

/// A stock row joined with its parent item's descriptive fields.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StockUnitDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub unit: StockUnit,
    pub item_name: String,
    pub item_category: String,
    pub item_brand: String,
    pub item_model: String,
}

/// One physical unit in a batch stock-in request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewStockEntry {
    #[validate(length(max = 100))]
    pub serial_number: Option<String>,
    #[validate(length(max = 100))]
    pub asset_id: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
}

/// DTO for adding one or more units of an item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStockBatch {
    pub item_id: DbId,
    #[validate(length(min = 1, message = "at least one stock entry is required"), nested)]
    pub entries: Vec<NewStockEntry>,
}

/// DTO for replacing a unit's mutable fields.
///
/// This is a full replacement: an omitted field is stored as NULL.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStockUnit {
    #[validate(length(max = 100))]
    pub serial_number: Option<String>,
    #[validate(length(max = 100))]
    pub asset_id: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    #[validate(length(max = 100))]
    pub staff_id: Option<String>,
    #[validate(length(max = 200))]
    pub deployment_location: Option<String>,
    pub deployment_date: Option<Date>,
}

impl StockRecord for StockUnit {
    fn item_id(&self) -> DbId {
        self.item_id
    }
    fn serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }
    fn asset_id(&self) -> Option<&str> {
        self.asset_id.as_deref()
    }
    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl StockRecord for StockUnitDetail {
    fn item_id(&self) -> DbId {
        self.unit.item_id
    }
    fn serial_number(&self) -> Option<&str> {
        self.unit.serial_number.as_deref()
    }
    fn asset_id(&self) -> Option<&str> {
        self.unit.asset_id.as_deref()
    }
    fn location(&self) -> Option<&str> {
        self.unit.location.as_deref()
    }
}
