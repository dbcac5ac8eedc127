//! Catalog item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stockroom_core::category::validate_category;
use stockroom_core::records::CatalogRecord;
use stockroom_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError};

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub created_at: Timestamp,
}

/// DTO for registering a new catalog item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 200, message = "name must not be empty"))]
    pub name: String,
    #[validate(custom(function = "category_is_known"))]
    pub category: String,
    #[validate(length(min = 1, max = 100, message = "brand must not be empty"))]
    pub brand: String,
    #[validate(length(min = 1, max = 100, message = "model must not be empty"))]
    pub model: String,
}

fn category_is_known(category: &str) -> Result<(), ValidationError> {
    validate_category(category).map_err(|msg| {
        let mut err = ValidationError::new("category");
        err.message = Some(msg.into());
        err
    })
}

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

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(category: &str) -> CreateItem {
        CreateItem {
            name: "OptiPlex 7090".into(),
            category: category.into(),
            brand: "Dell".into(),
            model: "7090".into(),
        }
    }

    #[test]
    fn accepts_known_category() {
        assert!(dto("PC").validate().is_ok());
        assert!(dto("Laptop").validate().is_ok());
    }

    #[test]
    fn rejects_unknown_category() {
        let errors = dto("Tablet").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category"));
    }

    #[test]
    fn rejects_empty_name() {
        let mut input = dto("PC");
        input.name.clear();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
