//! # Actions
//!
//! Everything that can happen in talkdocs becomes an `Action`.
//! User presses `/`? That's `Action::OpenSearch`.
//! User types in the overlay? That's `Action::SetQuery(text)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. No I/O here; the returned `Effect` tells the
//! event loop if anything outside the state has to happen.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info, warn};

use crate::content::{pages, routes};
use crate::content::samples::Language;
use crate::core::navigation::Tab;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenSearch,
    CloseSearch,
    SetQuery(String),
    /// Navigate to a catalog target path and close the overlay.
    OpenTarget(String),
    SelectTab(Tab),
    NextTab,
    PrevTab,
    SelectSection(String),
    ToggleGroup(String),
    ToggleTheme,
    SelectLanguage(Language),
    CycleLanguage,
    /// Copy the current page's sample in the selected language.
    CopySample,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Put this text on the system clipboard.
    CopyToClipboard(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::OpenSearch => app.search.open(),
        Action::CloseSearch => app.search.close(),
        Action::SetQuery(query) => app.search.set_query(query),
        Action::OpenTarget(target) => open_target(app, &target),
        Action::SelectTab(tab) => app.navigation.set_active_tab(tab),
        Action::NextTab => {
            let tab = app.navigation.active_tab().next();
            app.navigation.set_active_tab(tab);
        }
        Action::PrevTab => {
            let tab = app.navigation.active_tab().prev();
            app.navigation.set_active_tab(tab);
        }
        Action::SelectSection(section) => {
            // Sections only exist on the Documentation tab
            app.navigation.set_active_tab(Tab::Documentation);
            app.navigation.set_active_section(section);
        }
        Action::ToggleGroup(group) => app.navigation.toggle_group(&group),
        Action::ToggleTheme => {
            app.dark_mode = !app.dark_mode;
            app.status_message = format!("Theme: {}", theme_label(app.dark_mode));
        }
        Action::SelectLanguage(language) => set_language(app, language),
        Action::CycleLanguage => {
            let next = app.language.next();
            set_language(app, next);
        }
        Action::CopySample => return copy_sample(app),
        Action::Quit => {
            info!("Quit requested");
            return Effect::Quit;
        }
    }
    Effect::None
}

fn open_target(app: &mut App, target: &str) {
    match routes::resolve(target) {
        Some(route) => {
            info!("Opening {} -> {:?}", target, route);
            app.navigation.set_active_tab(route.tab);
            if let Some(section) = route.section {
                app.navigation.set_active_section(section);
            }
            app.search.close();
            app.status_message.clear();
        }
        None => {
            warn!("No route for search target {}", target);
            app.status_message = format!("No page for {target}");
        }
    }
}

fn copy_sample(app: &mut App) -> Effect {
    let page = pages::page_for(app.navigation.active_tab(), app.navigation.active_section());
    match page.samples {
        Some(samples) => {
            app.status_message = format!("Copied {} sample", app.language.label());
            Effect::CopyToClipboard(samples.get(app.language).to_string())
        }
        None => {
            app.status_message = "No code sample on this page".to_string();
            Effect::None
        }
    }
}

fn set_language(app: &mut App, language: Language) {
    app.language = language;
    app.status_message = format!("Samples: {}", language.label());
}

pub fn theme_label(dark_mode: bool) -> &'static str {
    if dark_mode { "dark" } else { "light" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_open_set_query_close() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::OpenSearch), Effect::None);
        assert!(app.search.is_open());

        update(&mut app, Action::SetQuery("sms".into()));
        assert_eq!(app.search.state().map(|s| s.len()), Some(2));

        update(&mut app, Action::CloseSearch);
        assert!(!app.search.is_open());
    }

    #[test]
    fn test_open_target_navigates_and_closes() {
        let mut app = test_app();
        update(&mut app, Action::OpenSearch);
        update(&mut app, Action::OpenTarget("/documentation/sms/send".into()));

        assert!(!app.search.is_open());
        assert_eq!(app.navigation.active_tab(), Tab::Documentation);
        assert_eq!(app.navigation.active_section(), "send-sms");
    }

    #[test]
    fn test_open_target_without_section_keeps_section() {
        let mut app = test_app();
        app.navigation.set_active_section("ussd-sessions");
        update(&mut app, Action::OpenSearch);
        update(&mut app, Action::OpenTarget("/changelog/v2.4.0".into()));

        assert_eq!(app.navigation.active_tab(), Tab::Changelog);
        assert_eq!(app.navigation.active_section(), "ussd-sessions");
    }

    #[test]
    fn test_unroutable_target_keeps_overlay_open() {
        let mut app = test_app();
        update(&mut app, Action::OpenSearch);
        update(&mut app, Action::OpenTarget("/nowhere".into()));

        assert!(app.search.is_open());
        assert!(app.status_message.contains("/nowhere"));
    }

    #[test]
    fn test_select_section_switches_to_documentation() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(Tab::Changelog));
        update(&mut app, Action::SelectSection("make-calls".into()));
        assert_eq!(app.navigation.active_tab(), Tab::Documentation);
        assert_eq!(app.navigation.active_section(), "make-calls");
    }

    #[test]
    fn test_tab_cycling_actions() {
        let mut app = test_app();
        update(&mut app, Action::NextTab);
        assert_eq!(app.navigation.active_tab(), Tab::ApiReference);
        update(&mut app, Action::PrevTab);
        update(&mut app, Action::PrevTab);
        assert_eq!(app.navigation.active_tab(), Tab::Changelog);
    }

    #[test]
    fn test_toggle_group_action_twice() {
        let mut app = test_app();
        let before = app.navigation.expanded_groups().clone();
        update(&mut app, Action::ToggleGroup("voice".into()));
        assert!(app.navigation.is_expanded("voice"));
        update(&mut app, Action::ToggleGroup("voice".into()));
        assert_eq!(app.navigation.expanded_groups(), &before);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = test_app();
        update(&mut app, Action::ToggleTheme);
        assert!(!app.dark_mode);
        assert_eq!(app.status_message, "Theme: light");
        update(&mut app, Action::ToggleTheme);
        assert!(app.dark_mode);
    }

    #[test]
    fn test_language_actions() {
        let mut app = test_app();
        update(&mut app, Action::CycleLanguage);
        assert_eq!(app.language, Language::Python);
        update(&mut app, Action::SelectLanguage(Language::Curl));
        assert_eq!(app.language, Language::Curl);
        assert_eq!(app.status_message, "Samples: cURL");
    }

    #[test]
    fn test_copy_sample_uses_selected_language() {
        let mut app = test_app();
        update(&mut app, Action::SelectSection("send-sms".into()));
        update(&mut app, Action::SelectLanguage(Language::Python));

        let effect = update(&mut app, Action::CopySample);
        let Effect::CopyToClipboard(text) = effect else {
            panic!("expected a clipboard effect, got {effect:?}");
        };
        assert!(text.contains("import africastalking"));
        assert_eq!(app.status_message, "Copied Python sample");
    }

    #[test]
    fn test_copy_sample_without_sample() {
        let mut app = test_app();
        assert_eq!(app.navigation.active_section(), "introduction");
        assert_eq!(update(&mut app, Action::CopySample), Effect::None);
        assert_eq!(app.status_message, "No code sample on this page");
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
