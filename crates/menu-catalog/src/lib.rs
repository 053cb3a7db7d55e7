//! # menu-catalog
//!
//! Restaurant menu lookup with tiered fuzzy name resolution.
//!
//! ## Resolution tiers
//!
//! ```text
//! query ─▶ exact ─miss─▶ case-insensitive ─miss─▶ substring
//!            │                  │                   ├─ 1 hit   ─▶ entry
//!            ▼                  ▼                   ├─ 2+ hits ─▶ AmbiguousMatch (candidates)
//!          entry              entry                 └─ 0 hits  ─▶ NotFound (all names)
//! ```
//!
//! The [`Catalog`] and [`resolver`] are generic over the record type; the
//! menu is one instantiation (`Catalog<MenuItem>`) loaded from a
//! [`source::MenuSource`] and exposed to agents through the tools in
//! [`tools`].

pub mod catalog;
pub mod error;
pub mod model;
pub mod resolver;
pub mod source;
pub mod svckit;

pub use catalog::Catalog;
pub use error::{CatalogError, MenuError, ResolveError, Result};
pub use model::MenuItem;
pub use resolver::{resolve, MatchTier, Resolution};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{MenuListTool, MenuLookupTool};
}
