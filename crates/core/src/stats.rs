//! Summary statistics over the catalog and current stock.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::category::{CATEGORY_LAPTOP, CATEGORY_PC};
use crate::records::{CatalogRecord, StockRecord};

/// Label used for stock units that have no location recorded.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Dashboard counters.
///
/// `total_quantity` counts units currently in stock; deployed units are not
/// included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_items: i64,
    pub pcs: i64,
    pub laptops: i64,
    pub total_quantity: i64,
}

/// Number of in-stock units at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
    pub location: String,
    pub count: i64,
}

/// Compute [`StatsSummary`] from the full item and stock sets.
///
/// Category counters use exact, case-sensitive matches. Items in any other
/// category still count toward `total_items`.
pub fn compute_stats<I: CatalogRecord, S: StockRecord>(items: &[I], stock: &[S]) -> StatsSummary {
    let count_category = |c: &str| items.iter().filter(|i| i.category() == c).count() as i64;

    StatsSummary {
        total_items: items.len() as i64,
        pcs: count_category(CATEGORY_PC),
        laptops: count_category(CATEGORY_LAPTOP),
        total_quantity: stock.len() as i64,
    }
}

/// Group in-stock units by location, busiest first.
///
/// Missing or blank locations are reported as [`UNKNOWN_LOCATION`]. Ties are
/// broken alphabetically so the output is stable.
pub fn location_counts<S: StockRecord>(stock: &[S]) -> Vec<LocationCount> {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for unit in stock {
        let location = unit
            .location()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_LOCATION);
        *counts.entry(location).or_default() += 1;
    }

    let mut out: Vec<LocationCount> = counts
        .into_iter()
        .map(|(location, count)| LocationCount {
            location: location.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.location.cmp(&b.location)));
    out
}
