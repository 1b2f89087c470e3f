//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! 1. Ctrl+C quits from anywhere.
//! 2. While the search overlay is open it receives every other event.
//! 3. Otherwise global shortcuts (`/`, `q`, `t`, `l`, `y`, `[`, `]`, `1`-`3`,
//!    Tab) are checked, and the rest goes to the focused pane.
//!
//! `handle_event` does all of this without touching the terminal, so the
//! routing is tested directly.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps in `poll` and only redraws after an
//! event (including resize).

pub mod clipboard;
mod component;
pub mod components;
pub mod event;
pub mod markdown;
pub mod theme;
mod ui;

use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use log::{debug, info, warn};
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Tab;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ContentViewState, SearchEvent, SearchOverlayState, SidebarEvent, SidebarState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which pane receives navigation keys when the overlay is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub sidebar: SidebarState,
    pub content: ContentViewState,
    pub search: SearchOverlayState,
    /// Section seen at the last sync, to follow navigation in the sidebar.
    last_section: String,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let focus = if app.navigation.active_tab() == Tab::Documentation {
            Focus::Sidebar
        } else {
            Focus::Content
        };
        Self {
            focus,
            sidebar: SidebarState::new(&app.navigation),
            content: ContentViewState::new(),
            search: SearchOverlayState::new(),
            last_section: app.navigation.active_section().to_string(),
        }
    }

    /// Bring cached component state in line with the core after an update.
    pub fn sync(&mut self, app: &App) {
        self.sidebar.sync(&app.navigation);
        let section = app.navigation.active_section();
        if section != self.last_section {
            self.sidebar.focus_section(section);
            self.last_section = section.to_string();
        }

        match app.search.state() {
            Some(search) => self.search.sync(search.len()),
            None => self.search.reset(),
        }

        if app.navigation.active_tab() != Tab::Documentation {
            self.focus = Focus::Content;
        }
    }
}

fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let effect = update(app, action);
    tui.sync(app);
    effect
}

/// Route one input event. The returned `Effect` is for the event loop to
/// carry out (quit, clipboard writes).
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    if app.search.is_open() {
        return handle_search_event(app, tui, &event);
    }

    match event {
        TuiEvent::InputChar('/') => dispatch(app, tui, Action::OpenSearch),
        TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit),
        TuiEvent::InputChar('t') => dispatch(app, tui, Action::ToggleTheme),
        TuiEvent::InputChar('l') => dispatch(app, tui, Action::CycleLanguage),
        TuiEvent::InputChar('y') => dispatch(app, tui, Action::CopySample),
        TuiEvent::InputChar('[') => dispatch(app, tui, Action::PrevTab),
        TuiEvent::InputChar(']') => dispatch(app, tui, Action::NextTab),
        TuiEvent::InputChar(c @ '1'..='3') => {
            let idx = c as usize - '1' as usize;
            match Tab::ALL.get(idx) {
                Some(tab) => dispatch(app, tui, Action::SelectTab(*tab)),
                None => Effect::None,
            }
        }
        TuiEvent::FocusNext => {
            if app.navigation.active_tab() == Tab::Documentation {
                tui.focus = match tui.focus {
                    Focus::Sidebar => Focus::Content,
                    Focus::Content => Focus::Sidebar,
                };
                debug!("focus -> {:?}", tui.focus);
            }
            Effect::None
        }
        other => match tui.focus {
            Focus::Sidebar => match tui.sidebar.handle_event(&other) {
                Some(SidebarEvent::Toggle(group)) => {
                    dispatch(app, tui, Action::ToggleGroup(group.to_string()))
                }
                Some(SidebarEvent::Select(section)) => {
                    dispatch(app, tui, Action::SelectSection(section.to_string()))
                }
                None => Effect::None,
            },
            Focus::Content => {
                tui.content.handle_event(&other);
                Effect::None
            }
        },
    }
}

fn handle_search_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match tui.search.handle_event(event) {
        Some(SearchEvent::Dismiss) => dispatch(app, tui, Action::CloseSearch),
        Some(SearchEvent::QueryChanged(query)) => dispatch(app, tui, Action::SetQuery(query)),
        Some(SearchEvent::Open(idx)) => {
            let target = app
                .search
                .state()
                .and_then(|s| s.result(idx))
                .map(|entry| entry.target.clone());
            match target {
                Some(target) => dispatch(app, tui, Action::OpenTarget(target)),
                None => {
                    warn!("search result {} vanished before it was opened", idx);
                    Effect::None
                }
            }
        }
        None => Effect::None,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // REPORT_EVENT_TYPES lets `map_key` drop key repeats and releases.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBar,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: &ResolvedConfig, catalog: Arc<Catalog>) -> std::io::Result<()> {
    let mut app = App::from_config(catalog, config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(guard);
    ratatui::restore();
    info!("talkdocs exiting");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }
        // Drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(app, tui, event) {
                Effect::Quit => return Ok(()),
                Effect::CopyToClipboard(text) => {
                    if let Err(e) = clipboard::copy(&text) {
                        warn!("Clipboard write failed: {}", e);
                        app.status_message = format!("Copy failed: {e}");
                    }
                }
                Effect::None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use crate::tui::theme::Palette;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn setup() -> (App, TuiState) {
        let app = test_app();
        let tui = TuiState::new(&app);
        (app, tui)
    }

    fn type_str(app: &mut App, tui: &mut TuiState, s: &str) {
        for c in s.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    fn screen(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_slash_opens_and_escape_closes() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        assert!(app.search.is_open());
        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert!(!app.search.is_open());
    }

    #[test]
    fn test_shortcut_letters_are_query_text_while_open() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        type_str(&mut app, &mut tui, "qt/");
        assert!(app.search.is_open());
        assert!(app.dark_mode);
        assert_eq!(app.search.state().map(|s| s.query()), Some("qt/"));
    }

    #[test]
    fn test_query_does_not_survive_reopen() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        type_str(&mut app, &mut tui, "voice");
        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        assert_eq!(app.search.state().map(|s| s.query()), Some(""));
        assert_eq!(tui.search.query(), "");
    }

    #[test]
    fn test_enter_opens_highlighted_result() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        type_str(&mut app, &mut tui, "ussd");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        assert!(!app.search.is_open());
        assert_eq!(app.navigation.active_tab(), Tab::Documentation);
        assert_eq!(app.navigation.active_section(), "ussd-sessions");
    }

    #[test]
    fn test_down_then_enter_opens_second_result() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        type_str(&mut app, &mut tui, "sms");
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.navigation.active_tab(), Tab::ApiReference);
    }

    #[test]
    fn test_enter_with_no_results_keeps_overlay() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        type_str(&mut app, &mut tui, "zzz");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(app.search.is_open());
    }

    #[test]
    fn test_global_shortcuts() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar(']'));
        assert_eq!(app.navigation.active_tab(), Tab::ApiReference);
        assert_eq!(tui.focus, Focus::Content);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('['));
        assert_eq!(app.navigation.active_tab(), Tab::Documentation);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('3'));
        assert_eq!(app.navigation.active_tab(), Tab::Changelog);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('t'));
        assert!(!app.dark_mode);
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')),
            Effect::Quit
        );
    }

    #[test]
    fn test_y_copies_sample_only_outside_search() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        type_str(&mut app, &mut tui, "send");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.navigation.active_section(), "send-sms");

        match handle_event(&mut app, &mut tui, TuiEvent::InputChar('y')) {
            Effect::CopyToClipboard(text) => assert!(text.contains("africastalking")),
            other => panic!("expected a clipboard effect, got {other:?}"),
        }
        assert_eq!(app.status_message, "Copied JavaScript sample");

        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::InputChar('y')),
            Effect::None
        );
        assert_eq!(app.search.state().map(|s| s.query()), Some("y"));
    }

    #[test]
    fn test_ctrl_c_quits_even_with_overlay_open() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        assert_eq!(
            handle_event(&mut app, &mut tui, TuiEvent::ForceQuit),
            Effect::Quit
        );
    }

    #[test]
    fn test_sidebar_select_and_toggle() {
        let (mut app, mut tui) = setup();
        assert_eq!(tui.focus, Focus::Sidebar);
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.navigation.active_section(), "authentication");

        handle_event(&mut app, &mut tui, TuiEvent::CursorHome);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert!(!app.navigation.is_expanded("getting-started"));
    }

    #[test]
    fn test_sidebar_follows_search_navigation() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        handle_event(&mut app, &mut tui, TuiEvent::Submit); // "Send SMS" is popular #1
        assert_eq!(app.navigation.active_section(), "send-sms");
        let row = tui.sidebar.rows()[tui.sidebar.cursor()];
        assert_eq!(row.title(), "Send SMS");
    }

    #[test]
    fn test_focus_toggle_only_on_documentation() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        assert_eq!(tui.focus, Focus::Content);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('2'));
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        assert_eq!(tui.focus, Focus::Content);
    }

    #[test]
    fn test_draw_documentation_layout() {
        let (app, mut tui) = setup();
        let text = screen(&app, &mut tui, 120, 40);
        assert!(text.contains("Getting Started"));
        assert!(text.contains("Welcome to AfricasTalking"));
        assert!(text.contains("On this page"));
    }

    #[test]
    fn test_narrow_layout_hides_outline() {
        let (app, mut tui) = setup();
        let text = screen(&app, &mut tui, 90, 40);
        assert!(!text.contains("On this page"));
    }

    #[test]
    fn test_outline_follows_heading_jump() {
        let (mut app, mut tui) = setup();
        let palette = Palette::for_mode(app.dark_mode);
        let outline_cell = |terminal: &Terminal<TestBackend>, label: &str| {
            let buffer = terminal.backend().buffer();
            let width = buffer.area.width;
            (0..buffer.area.height).find_map(|y| {
                let row: String = (94..width).map(|x| buffer[(x, y)].symbol()).collect();
                row.find(label).map(|byte| {
                    let x = 94 + row[..byte].chars().count() as u16;
                    buffer[(x, y)].clone()
                })
            })
        };

        let mut terminal = Terminal::new(TestBackend::new(120, 16)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)).unwrap();
        let before = outline_cell(&terminal, "What is AfricasTalking?").unwrap();
        assert_eq!(before.fg, palette.dim);

        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('}'));
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)).unwrap();
        let after = outline_cell(&terminal, "What is AfricasTalking?").unwrap();
        assert_eq!(after.fg, palette.accent);
        assert!(tui.content.offset() > 0);
    }

    #[test]
    fn test_draw_overlay_on_top() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('/'));
        let text = screen(&app, &mut tui, 120, 40);
        assert!(text.contains("Popular"));
        assert!(text.contains("Esc Close"));
    }
}
