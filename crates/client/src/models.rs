//! Wire types for the stockroom API.
//!
//! Response types mirror the server's JSON. Request types only carry the
//! fields a caller sets.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use stockroom_core::inventory::InventoryView;
use stockroom_core::records::{CatalogRecord, DeploymentRecord, StockRecord};
use stockroom_core::search::SearchLocation;
use stockroom_core::types::DbId;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// `{ "success": true, "data": T }`
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[allow(dead_code)]
    pub success: bool,
    pub data: T,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockUnit {
    pub id: DbId,
    pub item_id: DbId,
    pub serial_number: Option<String>,
    pub asset_id: Option<String>,
    pub location: Option<String>,
    pub staff_id: Option<String>,
    pub deployment_location: Option<String>,
    pub deployment_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// A stock unit as returned by `/stock`, with its item's fields alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockUnitDetail {
    #[serde(flatten)]
    pub unit: StockUnit,
    pub item_name: String,
    pub item_category: String,
    pub item_brand: String,
    pub item_model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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
    pub deployment_date: Option<NaiveDate>,
    pub stock_out_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

pub type ItemInventory = InventoryView<Item, StockUnit>;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    pub location: SearchLocation,
    pub inventory: Vec<ItemInventory>,
    pub stock_out: Vec<StockOutRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deleted {
    pub id: DbId,
    pub deleted: bool,
}

/// Root-level `/health` payload (not wrapped in the envelope).
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub db_healthy: bool,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewStockEntry {
    pub serial_number: Option<String>,
    pub asset_id: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockBatch {
    pub item_id: DbId,
    pub entries: Vec<NewStockEntry>,
}

/// Full replacement of a unit's mutable fields. `None` clears a field.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StockUpdate {
    pub serial_number: Option<String>,
    pub asset_id: Option<String>,
    pub location: Option<String>,
    pub staff_id: Option<String>,
    pub deployment_location: Option<String>,
    pub deployment_date: Option<NaiveDate>,
}

impl From<&StockUnit> for StockUpdate {
    /// Start an update from a unit's current values.
    fn from(unit: &StockUnit) -> Self {
        Self {
            serial_number: unit.serial_number.clone(),
            asset_id: unit.asset_id.clone(),
            location: unit.location.clone(),
            staff_id: unit.staff_id.clone(),
            deployment_location: unit.deployment_location.clone(),
            deployment_date: unit.deployment_date,
        }
    }
}

/// Body for moving a unit out of stock.
#[derive(Debug, Clone, Serialize)]
pub struct Deployment {
    pub stock_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<DbId>,
    pub staff_id: Option<String>,
    pub deployment_location: Option<String>,
    pub deployment_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

// ---------------------------------------------------------------------------
// Record trait impls
// ---------------------------------------------------------------------------

impl CatalogRecord for Item {
    fn id(&self) -> DbId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn brand(&self) -> &str {
        &self.brand
    }
    fn model(&self) -> &str {
        &self.model
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inventory_view_decodes_flattened_item() {
        let view: ItemInventory = serde_json::from_value(json!({
            "id": 1,
            "name": "OptiPlex 7090",
            "category": "PC",
            "brand": "Dell",
            "model": "7090",
            "created_at": "2024-01-01T00:00:00Z",
            "quantity": 1,
            "stock": [{
                "id": 10,
                "item_id": 1,
                "serial_number": "SN1",
                "asset_id": null,
                "location": "Warehouse A",
                "staff_id": null,
                "deployment_location": null,
                "deployment_date": null,
                "created_at": "2024-01-02T00:00:00Z"
            }]
        }))
        .unwrap();

        assert_eq!(view.item.name, "OptiPlex 7090");
        assert_eq!(view.quantity, 1);
        assert_eq!(view.stock[0].serial_number(), Some("SN1"));
        assert_eq!(view.stock[0].item_id(), view.item.id());
    }

    #[test]
    fn deployment_omits_absent_item_id() {
        let body = serde_json::to_value(Deployment {
            stock_id: 5,
            item_id: None,
            staff_id: Some("EMP01".into()),
            deployment_location: None,
            deployment_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        })
        .unwrap();

        assert!(body.get("item_id").is_none());
        assert_eq!(body["deployment_date"], "2024-01-01");
        assert!(body["deployment_location"].is_null());
    }
}
