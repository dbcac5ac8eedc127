//! Hardware category constants and validation.
//!
//! Categories are stored as plain text. Only the two values below are
//! accepted when registering a catalog item, and aggregation matches them
//! case-sensitively.

use serde::{Deserialize, Serialize};

pub const CATEGORY_PC: &str = "PC";
pub const CATEGORY_LAPTOP: &str = "Laptop";

/// All categories accepted on item creation.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_PC, CATEGORY_LAPTOP];

/// A known hardware category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "PC")]
    Pc,
    Laptop,
}

impl Category {
    /// Convert from the stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            CATEGORY_PC => Ok(Self::Pc),
            CATEGORY_LAPTOP => Ok(Self::Laptop),
            _ => Err(format!(
                "Invalid category '{s}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            )),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => CATEGORY_PC,
            Self::Laptop => CATEGORY_LAPTOP,
        }
    }
}

/// Validate a category string for item registration.
pub fn validate_category(s: &str) -> Result<(), String> {
    Category::from_str_value(s).map(|_| ())
}
