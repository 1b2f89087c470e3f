//! # Navigation State
//!
//! Which tab is active, which section is selected, which sidebar groups are
//! open. A plain value holder: tab and section are independent axes, and the
//! section id is never checked against the menu (that belongs to `content`).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub const LANDING_SECTION: &str = "introduction";
pub const DEFAULT_EXPANDED_GROUPS: &[&str] = &["getting-started", "sms"];

/// Top-level tabs. Closed set; string ids only cross the boundary via `FromStr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Documentation,
    ApiReference,
    Changelog,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Documentation, Tab::ApiReference, Tab::Changelog];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Documentation => "documentation",
            Tab::ApiReference => "api-reference",
            Tab::Changelog => "changelog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Documentation => "Documentation",
            Tab::ApiReference => "API Reference",
            Tab::Changelog => "Changelog",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Documentation => Tab::ApiReference,
            Tab::ApiReference => Tab::Changelog,
            Tab::Changelog => Tab::Documentation,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Documentation => Tab::Changelog,
            Tab::ApiReference => Tab::Documentation,
            Tab::Changelog => Tab::ApiReference,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| NavigationError::UnknownTab(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    UnknownTab(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::UnknownTab(id) => {
                let valid: Vec<&str> = Tab::ALL.iter().map(|t| t.id()).collect();
                write!(f, "unknown tab '{id}' (expected one of: {})", valid.join(", "))
            }
        }
    }
}

impl std::error::Error for NavigationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_tab: Tab,
    active_section: String,
    expanded_groups: HashSet<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(
            Tab::default(),
            LANDING_SECTION,
            DEFAULT_EXPANDED_GROUPS.iter().copied(),
        )
    }
}

impl NavigationState {
    pub fn new<I, S>(tab: Tab, section: impl Into<String>, expanded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_tab: tab,
            active_section: section.into(),
            expanded_groups: expanded.into_iter().map(Into::into).collect(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn active_section(&self) -> &str {
        &self.active_section
    }

    pub fn expanded_groups(&self) -> &HashSet<String> {
        &self.expanded_groups
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Select a tab by id. An unknown id is rejected and the tab is left as is.
    pub fn select_tab(&mut self, id: &str) -> Result<(), NavigationError> {
        let tab = id.parse::<Tab>()?;
        self.active_tab = tab;
        Ok(())
    }

    pub fn set_active_section(&mut self, section: impl Into<String>) {
        self.active_section = section.into();
    }

    pub fn toggle_group(&mut self, group_id: &str) {
        if !self.expanded_groups.remove(group_id) {
            self.expanded_groups.insert(group_id.to_string());
        }
    }

    pub fn is_expanded(&self, group_id: &str) -> bool {
        self.expanded_groups.contains(group_id)
    }
}
