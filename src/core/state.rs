//! # Application State
//!
//! Core state for talkdocs. Domain data only; scroll offsets, list cursors
//! and focus live in `tui::TuiState`.
//!
//! ```text
//! App
//! ├── catalog: Arc<Catalog>        // read-only search catalog
//! ├── search: SearchOverlay        // open/closed + current SearchState
//! ├── navigation: NavigationState  // tab, section, expanded groups
//! ├── dark_mode: bool              // the only theme switch
//! ├── language: Language           // selected code-sample language
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::content::samples::Language;
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavigationState;
use crate::core::search::SearchOverlay;

pub struct App {
    pub catalog: Arc<Catalog>,
    pub search: SearchOverlay,
    pub navigation: NavigationState,
    pub dark_mode: bool,
    pub language: Language,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            search: SearchOverlay::new(catalog.clone()),
            catalog,
            navigation: NavigationState::default(),
            dark_mode: true,
            language: Language::default(),
            status_message: String::from("Press / to search"),
        }
    }

    /// Create an App from resolved config (the normal startup path).
    pub fn from_config(catalog: Arc<Catalog>, config: &ResolvedConfig) -> Self {
        Self {
            navigation: NavigationState::new(
                config.tab,
                config.landing_section.clone(),
                config.expanded_groups.iter().cloned(),
            ),
            dark_mode: config.dark_mode,
            language: config.language,
            ..Self::new(catalog)
        }
    }
}
