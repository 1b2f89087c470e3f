//! # Search
//!
//! Case-insensitive substring filter over the catalog's `title` and
//! `description`. No scoring, no tokenizing, no fuzzy matching: a match keeps
//! its catalog position, so results are always a stable subsequence of the
//! catalog.
//!
//! ```text
//! SearchOverlay (open/close lifecycle)
//! └── Option<SearchState>      // Some while the overlay is open
//!     ├── query: String
//!     └── matches: Vec<usize>  // derived from query, never edited directly
//! ```
//!
//! An empty (or whitespace-only) query shows the first `POPULAR_COUNT`
//! entries in declaration order.

use std::sync::Arc;

use log::debug;

use crate::core::catalog::{Catalog, CatalogEntry};

/// Size of the default list shown for an empty query.
pub const POPULAR_COUNT: usize = 4;

/// One search session: a query and the results derived from it.
#[derive(Debug)]
pub struct SearchState {
    catalog: Arc<Catalog>,
    query: String,
    matches: Vec<usize>,
}

impl SearchState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let mut state = Self {
            catalog,
            query: String::new(),
            matches: Vec::new(),
        };
        state.recompute();
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query and recompute the results.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn results(&self) -> Vec<&CatalogEntry> {
        let entries = self.catalog.entries();
        self.matches.iter().map(|&i| &entries[i]).collect()
    }

    pub fn result(&self, index: usize) -> Option<&CatalogEntry> {
        self.matches
            .get(index)
            .and_then(|&i| self.catalog.entries().get(i))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True when the results are the default list rather than a filter.
    pub fn is_popular(&self) -> bool {
        self.query.trim().is_empty()
    }

    fn recompute(&mut self) {
        self.matches = if self.is_popular() {
            (0..self.catalog.len().min(POPULAR_COUNT)).collect()
        } else {
            let needle = self.query.to_lowercase();
            self.catalog
                .iter()
                .enumerate()
                .filter(|(_, entry)| matches(entry, &needle))
                .map(|(i, _)| i)
                .collect()
        };
        debug!(
            "search query {:?} -> {} result(s)",
            self.query,
            self.matches.len()
        );
    }
}

/// `needle` must already be lowercased.
fn matches(entry: &CatalogEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.description.to_lowercase().contains(needle)
}

/// The search overlay: holds a `SearchState` only while open.
#[derive(Debug)]
pub struct SearchOverlay {
    catalog: Arc<Catalog>,
    session: Option<SearchState>,
}

impl SearchOverlay {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            session: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Start a fresh session. Opening an open overlay keeps the current one.
    pub fn open(&mut self) {
        if self.session.is_none() {
            self.session = Some(SearchState::new(self.catalog.clone()));
        }
    }

    /// End the session. The query does not survive a reopen.
    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn state(&self) -> Option<&SearchState> {
        self.session.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut SearchState> {
        self.session.as_mut()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        match self.session.as_mut() {
            Some(state) => state.set_query(query),
            None => debug!("ignoring query while search overlay is closed"),
        }
    }
}
