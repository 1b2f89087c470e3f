//! # Core Application Logic
//!
//! This module contains talkdocs' domain logic: the search catalog and
//! filter, the navigation state, and the reducer that ties them together.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (read-only)  │
//!                    │  • Search / Navigation  │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    CLI     │
//!             │  Adapter   │          │ --search   │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Catalog` and `CatalogEntry`, the searchable entries
//! - [`search`]: `SearchState` (query → results) and the `SearchOverlay` lifecycle
//! - [`navigation`]: `NavigationState` and the closed `Tab` set
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Layered configuration (file → env → CLI)

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod search;
pub mod state;
