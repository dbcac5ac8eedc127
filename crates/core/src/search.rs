//! Free-text search and category filtering over inventory and deployments.
//!
//! Matching is plain case-insensitive substring containment. There is no
//! tokenization, fuzzy matching or ranking. An empty term matches everything.

use serde::{Deserialize, Serialize};

use crate::inventory::InventoryView;
use crate::records::{CatalogRecord, DeploymentRecord, StockRecord};

/// The field that produced a match, in the order fields are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedField {
    ItemName,
    Brand,
    Model,
    SerialNumber,
    AssetId,
    StaffId,
}

/// Where a search term was found.
///
/// Deployment history takes precedence over current inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchLocation {
    StockOut,
    Inventory,
    NotFound,
}

/// A normalized search request: lowercase term plus optional exact category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    category: Option<String>,
}

impl SearchQuery {
    /// Build a query. A blank category means "all categories".
    pub fn new(term: &str, category: Option<&str>) -> Self {
        Self {
            term: term.to_lowercase(),
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// True when neither a term nor a category is set.
    pub fn is_pass_through(&self) -> bool {
        self.term.is_empty() && self.category.is_none()
    }

    fn contains(&self, field: Option<&str>) -> bool {
        if self.term.is_empty() {
            return true;
        }
        field.is_some_and(|f| f.to_lowercase().contains(&self.term))
    }

    /// Does this stock unit's serial number or asset id contain the term?
    pub fn unit_matches<S: StockRecord>(&self, unit: &S) -> bool {
        self.contains(unit.serial_number()) || self.contains(unit.asset_id())
    }

    /// First field of an item (or its units) that contains the term.
    pub fn matched_item_field<I, S>(&self, item: &I, stock: &[S]) -> Option<MatchedField>
    where
        I: CatalogRecord,
        S: StockRecord,
    {
        if self.contains(Some(item.name())) {
            return Some(MatchedField::ItemName);
        }
        if self.contains(Some(item.brand())) {
            return Some(MatchedField::Brand);
        }
        if self.contains(Some(item.model())) {
            return Some(MatchedField::Model);
        }
        stock.iter().find_map(|unit| {
            if self.contains(unit.serial_number()) {
                Some(MatchedField::SerialNumber)
            } else if self.contains(unit.asset_id()) {
                Some(MatchedField::AssetId)
            } else {
                None
            }
        })
    }

    /// Term and category filter applied to one item and its units.
    pub fn matches_item<I, S>(&self, item: &I, stock: &[S]) -> bool
    where
        I: CatalogRecord,
        S: StockRecord,
    {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| item.category() == c);
        category_ok && self.matched_item_field(item, stock).is_some()
    }

    /// First field of a deployment record that contains the term.
    pub fn matched_deployment_field<D: DeploymentRecord>(&self, record: &D) -> Option<MatchedField> {
        if self.contains(Some(record.item_name())) {
            Some(MatchedField::ItemName)
        } else if self.contains(record.serial_number()) {
            Some(MatchedField::SerialNumber)
        } else if self.contains(record.asset_id()) {
            Some(MatchedField::AssetId)
        } else if self.contains(record.staff_id()) {
            Some(MatchedField::StaffId)
        } else {
            None
        }
    }

    pub fn matches_deployment<D: DeploymentRecord>(&self, record: &D) -> bool {
        self.matched_deployment_field(record).is_some()
    }

    /// Inventory views that pass the filter, in input order.
    pub fn filter_inventory<'a, I, S>(
        &self,
        views: &'a [InventoryView<I, S>],
    ) -> Vec<&'a InventoryView<I, S>>
    where
        I: CatalogRecord,
        S: StockRecord,
    {
        views
            .iter()
            .filter(|v| self.matches_item(&v.item, &v.stock))
            .collect()
    }

    /// Deployment records that contain the term, in input order.
    pub fn filter_deployments<'a, D: DeploymentRecord>(&self, records: &'a [D]) -> Vec<&'a D> {
        records.iter().filter(|r| self.matches_deployment(*r)).collect()
    }

    /// Decide which listing a search should land on.
    pub fn locate<I, S, D>(&self, inventory: &[InventoryView<I, S>], stock_out: &[D]) -> SearchLocation
    where
        I: CatalogRecord,
        S: StockRecord,
        D: DeploymentRecord,
    {
        if stock_out.iter().any(|r| self.matches_deployment(r)) {
            SearchLocation::StockOut
        } else if inventory.iter().any(|v| self.matches_item(&v.item, &v.stock)) {
            SearchLocation::Inventory
        } else {
            SearchLocation::NotFound
        }
    }
}
