//! Catalog
//!
//! A fixed set of uniquely named records. Built once, then shared read-only
//! (typically behind an `Arc`) by every caller that resolves names against it.
//!
//! Names are kept in an ordered map, so every listing (`names`, `iter`, and
//! the candidate lists in resolution errors) comes out in byte-wise sorted
//! order, independent of insertion order.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::{CatalogError, ResolveError};
use crate::resolver::{self, Resolution};

#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct Catalog<T> {
    entries: BTreeMap<String, T>,

    /// lowercase name -> name, enforces uniqueness under case folding
    #[serde(skip)]
    folded: HashMap<String, String>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Catalog<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            folded: HashMap::new(),
        }
    }

    /// Build from `(name, entry)` pairs, stopping at the first rejected name
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, entry) in entries {
            catalog.insert(name, entry)?;
        }
        Ok(catalog)
    }

    /// Add an entry
    ///
    /// Rejects empty names, exact duplicates, and names equal to an existing
    /// one under lowercase folding ("Pad Thai" vs "pad thai").
    pub fn insert(&mut self, name: impl Into<String>, entry: T) -> Result<(), CatalogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.entries.contains_key(&name) {
            return Err(CatalogError::Duplicate(name));
        }

        let folded = name.to_lowercase();
        if let Some(existing) = self.folded.get(&folded) {
            return Err(CatalogError::CaseCollision {
                existing: existing.clone(),
                incoming: name,
            });
        }

        self.folded.insert(folded, name.clone());
        self.entries.insert(name, entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub(crate) fn get_key_value(&self, name: &str) -> Option<(&str, &T)> {
        self.entries
            .get_key_value(name)
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Entry whose lowercase name equals `folded`
    pub(crate) fn get_folded(&self, folded: &str) -> Option<(&str, &T)> {
        self.folded
            .get(folded)
            .and_then(|name| self.get_key_value(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(name, entry)` pairs in sorted name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a free-text query; see [`resolver::resolve`]
    pub fn resolve(&self, query: &str) -> Result<Resolution<'_, T>, ResolveError> {
        resolver::resolve(query, self)
    }
}
