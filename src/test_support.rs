//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::state::App;

/// The six-entry catalog the site ships with.
pub fn test_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin())
}

/// Creates a test App over the built-in catalog with default navigation.
pub fn test_app() -> App {
    App::new(test_catalog())
}
