//! Resolves catalog targets (site paths) into tab + section.

use crate::content::menu;
use crate::core::navigation::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub tab: Tab,
    pub section: Option<&'static str>,
}

/// Short paths used by catalog entries that differ from the menu paths.
const ALIASES: &[(&str, &str)] = &[("/documentation/auth", "authentication")];

pub fn resolve(target: &str) -> Option<Route> {
    let path = target.trim_end_matches('/');

    if path == "/documentation" || path.starts_with("/documentation/") {
        let section = menu::find_path(path).map(|item| item.id).or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == path)
                .map(|(_, id)| *id)
        });
        return Some(Route {
            tab: Tab::Documentation,
            section,
        });
    }

    let tab = if path == "/api" || path.starts_with("/api/") {
        Tab::ApiReference
    } else if path == "/changelog" || path.starts_with("/changelog/") {
        Tab::Changelog
    } else {
        return None;
    };
    Some(Route { tab, section: None })
}
