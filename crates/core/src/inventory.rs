//! Inventory aggregation: catalog items joined with their current stock.
//!
//! The view is recomputed on every read. `quantity` is the number of stock
//! rows attached to the item, not a separately tracked counter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::records::{CatalogRecord, StockRecord};
use crate::types::DbId;

/// One catalog item with its nested stock units.
///
/// Serializes flat: the item's own fields sit next to `stock` and `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryView<I, S> {
    #[serde(flatten)]
    pub item: I,
    pub stock: Vec<S>,
    pub quantity: i64,
}

impl<I, S> InventoryView<I, S> {
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

/// Pair every item with the stock rows that reference it.
///
/// Output has exactly one entry per input item, in input order. Stock rows
/// keep their relative order. Rows whose `item_id` matches no item are
/// dropped.
pub fn build_inventory<I, S>(items: Vec<I>, stock: Vec<S>) -> Vec<InventoryView<I, S>>
where
    I: CatalogRecord,
    S: StockRecord,
{
    let mut by_item: HashMap<DbId, Vec<S>> = HashMap::new();
    for unit in stock {
        by_item.entry(unit.item_id()).or_default().push(unit);
    }

    items
        .into_iter()
        .map(|item| {
            let stock = by_item.remove(&item.id()).unwrap_or_default();
            InventoryView {
                quantity: stock.len() as i64,
                item,
                stock,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures::{item, unit, TestItem, TestUnit};

    #[test]
    fn one_view_per_item_with_matching_quantity() {
        let items = vec![item(1, "OptiPlex", "PC"), item(2, "Latitude", "Laptop"), item(3, "Spare", "PC")];
        let stock = vec![
            unit(10, 1, "SN1", "A1", None),
            unit(11, 2, "SN2", "A2", None),
            unit(12, 1, "SN3", "A3", None),
        ];

        let views = build_inventory(items, stock);

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].item.id, 1);
        assert_eq!(views[0].quantity, 2);
        assert_eq!(views[0].stock.iter().map(|s| s.id).collect::<Vec<_>>(), vec![10, 12]);
        assert_eq!(views[1].quantity, 1);
        assert_eq!(views[2].quantity, 0);
        assert!(views[2].is_out_of_stock());
    }

    #[test]
    fn orphaned_stock_is_ignored() {
        let views = build_inventory(vec![item(1, "OptiPlex", "PC")], vec![unit(10, 99, "SN", "A", None)]);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].quantity, 0);
    }

    #[test]
    fn empty_catalog_yields_empty_inventory() {
        let views = build_inventory(Vec::<TestItem>::new(), vec![unit(10, 1, "SN", "A", None)]);
        assert!(views.is_empty());
    }

    #[test]
    fn quantity_matches_count_for_every_item() {
        let items: Vec<TestItem> = (1..=5).map(|i| item(i, "Item", "PC")).collect();
        let stock: Vec<TestUnit> = (0..23).map(|n| unit(100 + n, (n % 7) + 1, "SN", "A", None)).collect();
        let expected: Vec<i64> = (1..=5)
            .map(|id| stock.iter().filter(|s| s.item_id == id).count() as i64)
            .collect();

        let views = build_inventory(items, stock);

        assert_eq!(views.len(), 5);
        for (view, want) in views.iter().zip(expected) {
            assert_eq!(view.quantity, want);
            assert_eq!(view.stock.len() as i64, view.quantity);
        }
    }

    #[test]
    fn serializes_item_fields_flat() {
        let views = build_inventory(vec![item(1, "OptiPlex", "PC")], vec![unit(10, 1, "SN1", "A1", None)]);
        let json = serde_json::to_value(&views[0]).unwrap();
        assert_eq!(json["name"], "OptiPlex");
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["stock"][0]["serial_number"], "SN1");
    }
}
