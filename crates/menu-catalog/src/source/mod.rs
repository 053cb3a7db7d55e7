//! Menu Sources
//!
//! Where the catalog comes from. A source is asked once, at startup; the
//! resulting catalog is immutable for the life of the process.

mod builtin;

pub use builtin::BuiltinMenu;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::MenuItem;

/// Menu source trait (Strategy pattern)
pub trait MenuSource: Send + Sync {
    /// Build the catalog
    fn load(&self) -> Result<Catalog<MenuItem>>;

    /// Source name for logging
    fn name(&self) -> &str;
}

/// Menu read from a JSON file mapping dish name to item
///
/// ```json
/// {
///   "Pad Thai": {
///     "price": "13.99",
///     "cuisine": "Thai",
///     "calories": 700,
///     "spicy_level": 2,
///     "ingredients": ["noodles", "shrimp", "peanuts"]
///   }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct JsonFileMenu {
    path: PathBuf,
}

impl JsonFileMenu {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse and validate menu JSON
    pub fn from_json(content: &str) -> Result<Catalog<MenuItem>> {
        let items: BTreeMap<String, MenuItem> = serde_json::from_str(content)?;

        for (name, item) in &items {
            item.validate(name)?;
        }

        Ok(Catalog::from_entries(items)?)
    }
}

impl MenuSource for JsonFileMenu {
    fn load(&self) -> Result<Catalog<MenuItem>> {
        let content = std::fs::read_to_string(&self.path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %self.path.display(), dishes = catalog.len(), "Loaded menu file");
        Ok(catalog)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}
