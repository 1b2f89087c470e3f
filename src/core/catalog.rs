//! # Search Catalog
//!
//! The fixed set of searchable documentation entries. Built once at startup,
//! shared as `Arc<Catalog>`, never mutated afterwards. There is no `&mut`
//! accessor on purpose: the search results are positions into this list, so
//! the declaration order is part of the contract.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Which part of the site an entry points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Documentation,
    ApiReference,
    Changelog,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Documentation => "Documentation",
            Category::ApiReference => "API Reference",
            Category::Changelog => "Changelog",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Opaque navigation target, resolved by `content::routes`.
    pub target: String,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => write!(f, "duplicate catalog id: {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting any repeated `id`.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The entries shipped with the site, in declaration order.
    pub fn builtin() -> Self {
        // Ids are literal and distinct, so this skips the uniqueness scan.
        Self {
            entries: builtin_entries(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "1",
            "Send SMS",
            "Learn how to send SMS messages using our API",
            Category::Documentation,
            "/documentation/sms/send",
        ),
        CatalogEntry::new(
            "2",
            "SMS API Reference",
            "Complete API reference for SMS endpoints",
            Category::ApiReference,
            "/api/sms",
        ),
        CatalogEntry::new(
            "3",
            "USSD Sessions",
            "Create interactive USSD applications",
            Category::Documentation,
            "/documentation/ussd/sessions",
        ),
        CatalogEntry::new(
            "4",
            "Voice API",
            "Make and receive voice calls",
            Category::ApiReference,
            "/api/voice",
        ),
        CatalogEntry::new(
            "5",
            "Authentication",
            "How to authenticate with our APIs",
            Category::Documentation,
            "/documentation/auth",
        ),
        CatalogEntry::new(
            "6",
            "v2.4.0 Release",
            "Latest updates and improvements",
            Category::Changelog,
            "/changelog/v2.4.0",
        ),
    ]
}
