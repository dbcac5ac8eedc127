//! Search over listings the client already holds.
//!
//! Same matching rules as the server's `/search`, without a round trip.

use stockroom_core::search::{MatchedField, SearchLocation, SearchQuery};

use crate::models::{ItemInventory, StockOutRecord};

/// An inventory entry that matched, with the field to highlight.
#[derive(Debug, Clone, Copy)]
pub struct InventoryHit<'a> {
    pub view: &'a ItemInventory,
    /// `None` when the term was empty.
    pub matched: Option<MatchedField>,
}

/// A deployment record that matched, with the field to highlight.
#[derive(Debug, Clone, Copy)]
pub struct DeploymentHit<'a> {
    pub record: &'a StockOutRecord,
    pub matched: Option<MatchedField>,
}

/// Result of [`search_local`].
#[derive(Debug, Clone)]
pub struct LocalSearch<'a> {
    pub location: SearchLocation,
    pub inventory: Vec<InventoryHit<'a>>,
    pub stock_out: Vec<DeploymentHit<'a>>,
}

/// Filter both listings and decide which one the term belongs to.
pub fn search_local<'a>(
    term: &str,
    category: Option<&str>,
    inventory: &'a [ItemInventory],
    stock_out: &'a [StockOutRecord],
) -> LocalSearch<'a> {
    let query = SearchQuery::new(term.trim(), category);
    let highlight = !query.term().is_empty();

    let inventory_hits = query
        .filter_inventory(inventory)
        .into_iter()
        .map(|view| InventoryHit {
            view,
            matched: highlight
                .then(|| query.matched_item_field(&view.item, &view.stock))
                .flatten(),
        })
        .collect();

    let deployment_hits = query
        .filter_deployments(stock_out)
        .into_iter()
        .map(|record| DeploymentHit {
            record,
            matched: highlight
                .then(|| query.matched_deployment_field(record))
                .flatten(),
        })
        .collect();

    LocalSearch {
        location: query.locate(inventory, stock_out),
        inventory: inventory_hits,
        stock_out: deployment_hits,
    }
}
