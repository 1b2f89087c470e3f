//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as struct fields and implement `Component`:
//! - `TitleBar`: product name, status message, search and theme hints
//! - `TabBar`: Documentation / API Reference / Changelog strip
//! - `Outline`: "On this page" heading list
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState` and implements `EventHandler`; a
//! transient view struct borrows it for one frame:
//! - `SidebarState` / `Sidebar`: collapsible menu tree
//! - `ContentViewState` / `ContentView`: scrollable page body
//! - `SearchOverlayState` / `SearchOverlayView`: the `/` search modal,
//!   built around a `QueryInput` field
//!
//! Components never read `App` directly. Anything core-owned reaches them
//! as a prop, and anything they want changed leaves as an event that the
//! adapter turns into an `Action`.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs
//! ├── tab_bar.rs
//! ├── sidebar.rs
//! ├── content_view.rs
//! ├── outline.rs
//! ├── query_input.rs
//! └── search_overlay.rs
//! ```

pub mod content_view;
pub mod outline;
pub mod query_input;
pub mod search_overlay;
pub mod sidebar;
mod tab_bar;
mod title_bar;

pub use content_view::{ContentView, ContentViewState};
pub use outline::Outline;
pub use search_overlay::{SearchEvent, SearchOverlayState, SearchOverlayView};
pub use sidebar::{Sidebar, SidebarEvent, SidebarState};
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;
