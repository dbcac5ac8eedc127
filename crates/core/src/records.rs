//! Read-only views over the three persisted record kinds.
//!
//! The database crate and the HTTP client each have their own row structs.
//! Aggregation, search and reporting only need a handful of fields, so they
//! are written against these traits instead of a concrete type.

use crate::types::DbId;

/// A catalog item (hardware model definition).
pub trait CatalogRecord {
    fn id(&self) -> DbId;
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn brand(&self) -> &str;
    fn model(&self) -> &str;
}

/// A physical unit currently held in stock.
pub trait StockRecord {
    fn item_id(&self) -> DbId;
    fn serial_number(&self) -> Option<&str>;
    fn asset_id(&self) -> Option<&str>;
    fn location(&self) -> Option<&str>;
}

/// A deployed unit's historical snapshot.
pub trait DeploymentRecord {
    fn item_name(&self) -> &str;
    fn serial_number(&self) -> Option<&str>;
    fn asset_id(&self) -> Option<&str>;
    fn staff_id(&self) -> Option<&str>;
}

impl<T: CatalogRecord + ?Sized> CatalogRecord for &T {
    fn id(&self) -> DbId {
        (**self).id()
    }
    fn name(&self) -> &str {
        (**self).name()
    }
    fn category(&self) -> &str {
        (**self).category()
    }
    fn brand(&self) -> &str {
        (**self).brand()
    }
    fn model(&self) -> &str {
        (**self).model()
    }
}

impl<T: StockRecord + ?Sized> StockRecord for &T {
    fn item_id(&self) -> DbId {
        (**self).item_id()
    }
    fn serial_number(&self) -> Option<&str> {
        (**self).serial_number()
    }
    fn asset_id(&self) -> Option<&str> {
        (**self).asset_id()
    }
    fn location(&self) -> Option<&str> {
        (**self).location()
    }
}
