//! Name Resolution
//!
//! Maps a free-text query to exactly one catalog entry, trying progressively
//! looser tiers and stopping at the first tier that produces a candidate:
//!
//! 1. **Exact** - the query is a name verbatim (case and whitespace sensitive)
//! 2. **Case-insensitive** - the lowercased query equals a lowercased name
//! 3. **Substring** - the lowercased query occurs inside lowercased names;
//!    one hit resolves, several are ambiguous, none is not-found
//!
//! Resolution is a pure function of the catalog and the query. No ranking is
//! applied to multiple substring hits; the caller is asked to be more specific.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ResolveError;

/// Which tier produced a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    CaseInsensitive,
    Substring,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchTier::Exact => write!(f, "exact"),
            MatchTier::CaseInsensitive => write!(f, "case-insensitive"),
            MatchTier::Substring => write!(f, "substring"),
        }
    }
}

/// A successfully resolved entry, borrowed from the catalog
#[derive(Debug, PartialEq)]
pub struct Resolution<'a, T> {
    pub name: &'a str,
    pub entry: &'a T,
    pub tier: MatchTier,
}

impl<T> Clone for Resolution<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolution<'_, T> {}

/// Resolve `query` against `catalog`
///
/// # Errors
///
/// - [`ResolveError::AmbiguousMatch`] when the substring tier finds two or
///   more names; candidates are listed in catalog order.
/// - [`ResolveError::NotFound`] when no tier matches; every catalog name is
///   listed in catalog order.
pub fn resolve<'a, T>(
    query: &str,
    catalog: &'a Catalog<T>,
) -> Result<Resolution<'a, T>, ResolveError> {
    if let Some((name, entry)) = catalog.get_key_value(query) {
        return Ok(matched(query, name, entry, MatchTier::Exact));
    }

    // Catalog names are unique under folding, so this tier has at most one hit.
    let folded = query.to_lowercase();
    if let Some((name, entry)) = catalog.get_folded(&folded) {
        return Ok(matched(query, name, entry, MatchTier::CaseInsensitive));
    }

    let mut hits = catalog
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&folded));

    match (hits.next(), hits.next()) {
        (Some((name, entry)), None) => Ok(matched(query, name, entry, MatchTier::Substring)),
        (Some((first, _)), Some((second, _))) => {
            let candidates: Vec<String> = [first, second]
                .into_iter()
                .chain(hits.map(|(name, _)| name))
                .map(str::to_owned)
                .collect();
            tracing::debug!(query, count = candidates.len(), "Ambiguous match");
            Err(ResolveError::AmbiguousMatch {
                query: query.to_owned(),
                candidates,
            })
        }
        (None, _) => {
            tracing::debug!(query, "No match");
            Err(ResolveError::NotFound {
                query: query.to_owned(),
                available: catalog.names().map(str::to_owned).collect(),
            })
        }
    }
}

fn matched<'a, T>(query: &str, name: &'a str, entry: &'a T, tier: MatchTier) -> Resolution<'a, T> {
    tracing::debug!(query, name, %tier, "Resolved");
    Resolution { name, entry, tier }
}
