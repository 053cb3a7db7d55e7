//! Error Types for the Menu Catalog

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MenuError>;

/// Failure to resolve a query to exactly one catalog entry
///
/// Both kinds are recoverable by the caller: refine the query, or pick one
/// of the listed names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Ambiguous match for '{query}': {}", .candidates.join(", "))]
    AmbiguousMatch {
        query: String,
        candidates: Vec<String>,
    },

    #[error("No match for '{query}'. Available: {}", .available.join(", "))]
    NotFound {
        query: String,
        available: Vec<String>,
    },
}

impl ResolveError {
    /// Stable machine-readable kind
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::AmbiguousMatch { .. } => "ambiguous_match",
            ResolveError::NotFound { .. } => "not_found",
        }
    }

    /// The query that failed
    pub fn query(&self) -> &str {
        match self {
            ResolveError::AmbiguousMatch { query, .. } | ResolveError::NotFound { query, .. } => {
                query
            }
        }
    }

    /// Candidate names for an ambiguous match, or every name when nothing matched
    pub fn names(&self) -> &[String] {
        match self {
            ResolveError::AmbiguousMatch { candidates, .. } => candidates,
            ResolveError::NotFound { available, .. } => available,
        }
    }
}

/// Rejected catalog construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog names must not be empty")]
    EmptyName,

    #[error("Duplicate catalog name '{0}'")]
    Duplicate(String),

    #[error("Name '{incoming}' collides with '{existing}' when case is ignored")]
    CaseCollision { existing: String, incoming: String },
}

/// Failure to build the menu from a source
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid menu item '{dish}': {reason}")]
    InvalidItem { dish: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
