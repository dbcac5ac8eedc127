//! Inventory report variants.
//!
//! Each report kind carries its own explicit field set. Reports are data
//! only; turning them into text, CSV or print layouts is left to consumers.

use serde::{Deserialize, Serialize};

use crate::inventory::InventoryView;
use crate::records::{CatalogRecord, StockRecord};
use crate::stats::StatsSummary;
use crate::types::Timestamp;

pub const KIND_SUMMARY: &str = "summary";
pub const KIND_DETAILED: &str = "detailed";
pub const KIND_LOW_STOCK: &str = "low-stock";

/// All valid report kind strings.
pub const VALID_REPORT_KINDS: &[&str] = &[KIND_SUMMARY, KIND_DETAILED, KIND_LOW_STOCK];

/// Which report to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Summary,
    Detailed,
    LowStock,
}

impl ReportKind {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            KIND_SUMMARY => Ok(Self::Summary),
            KIND_DETAILED => Ok(Self::Detailed),
            KIND_LOW_STOCK => Ok(Self::LowStock),
            _ => Err(format!(
                "Invalid report kind '{s}'. Must be one of: {}",
                VALID_REPORT_KINDS.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => KIND_SUMMARY,
            Self::Detailed => KIND_DETAILED,
            Self::LowStock => KIND_LOW_STOCK,
        }
    }
}

/// A stock unit line in the detailed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportUnit {
    pub serial_number: Option<String>,
    pub asset_id: Option<String>,
    pub location: Option<String>,
}

/// A catalog item block in the detailed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedItem {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub quantity: i64,
    pub units: Vec<ReportUnit>,
}

/// An out-of-stock catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
}

/// A generated report, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Report {
    Summary {
        generated_at: Timestamp,
        stats: StatsSummary,
    },
    Detailed {
        generated_at: Timestamp,
        items: Vec<DetailedItem>,
    },
    LowStock {
        generated_at: Timestamp,
        count: i64,
        items: Vec<LowStockItem>,
    },
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::Summary { .. } => ReportKind::Summary,
            Self::Detailed { .. } => ReportKind::Detailed,
            Self::LowStock { .. } => ReportKind::LowStock,
        }
    }
}

/// Build the requested report from pre-loaded inventory and stats.
pub fn build_report<I, S>(
    kind: ReportKind,
    inventory: &[InventoryView<I, S>],
    stats: StatsSummary,
    generated_at: Timestamp,
) -> Report
where
    I: CatalogRecord,
    S: StockRecord,
{
    match kind {
        ReportKind::Summary => Report::Summary {
            generated_at,
            stats,
        },
        ReportKind::Detailed => Report::Detailed {
            generated_at,
            items: inventory.iter().map(detailed_item).collect(),
        },
        ReportKind::LowStock => {
            let items: Vec<LowStockItem> = inventory
                .iter()
                .filter(|v| v.is_out_of_stock())
                .map(|v| LowStockItem {
                    name: v.item.name().to_string(),
                    category: v.item.category().to_string(),
                    brand: v.item.brand().to_string(),
                    model: v.item.model().to_string(),
                })
                .collect();
            Report::LowStock {
                generated_at,
                count: items.len() as i64,
                items,
            }
        }
    }
}

fn detailed_item<I: CatalogRecord, S: StockRecord>(view: &InventoryView<I, S>) -> DetailedItem {
    DetailedItem {
        name: view.item.name().to_string(),
        category: view.item.category().to_string(),
        brand: view.item.brand().to_string(),
        model: view.item.model().to_string(),
        quantity: view.quantity,
        units: view
            .stock
            .iter()
            .map(|s| ReportUnit {
                serial_number: s.serial_number().map(str::to_string),
                asset_id: s.asset_id().map(str::to_string),
                location: s.location().map(str::to_string),
            })
            .collect(),
    }
}
