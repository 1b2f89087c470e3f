//! # Sidebar Component
//!
//! Collapsible menu tree for the Documentation tab. The rows come from
//! `content::menu::visible_rows`, cached here on every sync so event handling
//! does not need the `App`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::content::menu::{self, MenuRow};
use crate::core::navigation::NavigationState;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// Expand or collapse a group.
    Toggle(&'static str),
    /// Open a section page.
    Select(&'static str),
}

#[derive(Debug, Default)]
pub struct SidebarState {
    rows: Vec<MenuRow>,
    cursor: usize,
    list_state: ListState,
}

impl SidebarState {
    pub fn new(nav: &NavigationState) -> Self {
        let mut state = Self::default();
        state.sync(nav);
        state.focus_section(nav.active_section());
        state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn rows(&self) -> &[MenuRow] {
        &self.rows
    }

    /// Rebuild the cached rows, keeping the cursor on the same row if it
    /// still exists.
    pub fn sync(&mut self, nav: &NavigationState) {
        let current = self.rows.get(self.cursor).map(row_key);
        self.rows = menu::visible_rows(nav);
        if let Some(key) = current
            && let Some(idx) = self.rows.iter().position(|r| row_key(r) == key)
        {
            self.cursor = idx;
        }
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        self.list_state.select(Some(self.cursor));
    }

    /// Put the cursor on a section row, if that row is visible.
    pub fn focus_section(&mut self, section: &str) {
        let found = self.rows.iter().position(|row| match row {
            MenuRow::Item { item, .. } => item.id == section,
            MenuRow::Group { .. } => false,
        });
        if let Some(idx) = found {
            self.cursor = idx;
            self.list_state.select(Some(idx));
        }
    }

    fn move_by(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(self.cursor));
    }

    fn current(&self) -> Option<MenuRow> {
        self.rows.get(self.cursor).copied()
    }
}

/// Rows are identified by (group id, item id) across rebuilds.
fn row_key(row: &MenuRow) -> (&'static str, Option<&'static str>) {
    match row {
        MenuRow::Group { group, .. } => (group.id, None),
        MenuRow::Item { group, item } => (group.id, Some(item.id)),
    }
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.move_by(-1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.move_by(1);
                None
            }
            TuiEvent::CursorHome => {
                self.move_by(isize::MIN);
                None
            }
            TuiEvent::CursorEnd => {
                self.move_by(isize::MAX);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => match self.current()? {
                MenuRow::Group { group, .. } => Some(SidebarEvent::Toggle(group.id)),
                MenuRow::Item { item, .. } => Some(SidebarEvent::Select(item.id)),
            },
            TuiEvent::CursorLeft => match self.current()? {
                MenuRow::Group { group, expanded: true } => Some(SidebarEvent::Toggle(group.id)),
                MenuRow::Item { group, .. } => {
                    // Jump to the parent group row.
                    let idx = self.rows.iter().position(|r| row_key(r) == (group.id, None))?;
                    self.cursor = idx;
                    self.list_state.select(Some(idx));
                    None
                }
                MenuRow::Group { .. } => None,
            },
            TuiEvent::CursorRight => match self.current()? {
                MenuRow::Group { group, expanded: false } => Some(SidebarEvent::Toggle(group.id)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct Sidebar<'a> {
    state: &'a mut SidebarState,
    active_section: &'a str,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        state: &'a mut SidebarState,
        active_section: &'a str,
        focused: bool,
        palette: &'a Palette,
    ) -> Self {
        Self {
            state,
            active_section,
            focused,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focused {
            self.palette.accent
        } else {
            self.palette.border
        };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(border));

        let items: Vec<ListItem> = self
            .state
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let line = match row {
                    MenuRow::Group { group, expanded } => {
                        let arrow = if *expanded { "▾ " } else { "▸ " };
                        Line::from(vec![
                            Span::styled(arrow, Style::default().fg(self.palette.dim)),
                            Span::styled(
                                group.title,
                                Style::default()
                                    .fg(self.palette.fg)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ])
                    }
                    MenuRow::Item { item, .. } => {
                        let style = if item.id == self.active_section {
                            Style::default()
                                .fg(self.palette.accent)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(self.palette.fg)
                        };
                        Line::from(vec![Span::raw("   "), Span::styled(item.title, style)])
                    }
                };
                let item = ListItem::new(line);
                if self.focused && i == self.state.cursor {
                    item.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    item
                }
            })
            .collect();

        frame.render_stateful_widget(List::new(items).block(block), area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn titles(state: &SidebarState) -> Vec<&'static str> {
        state.rows().iter().map(|r| r.title()).collect()
    }

    #[test]
    fn test_new_focuses_active_section() {
        let nav = NavigationState::default();
        let state = SidebarState::new(&nav);
        assert_eq!(state.rows()[state.cursor()].title(), "Introduction");
    }

    #[test]
    fn test_enter_on_group_toggles() {
        let nav = NavigationState::default();
        let mut state = SidebarState::new(&nav);
        state.handle_event(&TuiEvent::CursorHome);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SidebarEvent::Toggle("getting-started"))
        );
    }

    #[test]
    fn test_enter_on_item_selects() {
        let nav = NavigationState::default();
        let mut state = SidebarState::new(&nav);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SidebarEvent::Select("authentication"))
        );
    }

    #[test]
    fn test_left_on_item_jumps_to_group() {
        let nav = NavigationState::default();
        let mut state = SidebarState::new(&nav);
        assert_eq!(state.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(state.rows()[state.cursor()].title(), "Getting Started");
        assert_eq!(
            state.handle_event(&TuiEvent::CursorLeft),
            Some(SidebarEvent::Toggle("getting-started"))
        );
    }

    #[test]
    fn test_sync_keeps_cursor_on_same_row() {
        let mut nav = NavigationState::default();
        let mut state = SidebarState::new(&nav);
        state.focus_section("send-sms");
        nav.toggle_group("getting-started");
        state.sync(&nav);
        assert_eq!(state.rows()[state.cursor()].title(), "Send SMS");
        assert!(!titles(&state).contains(&"Introduction"));
    }

    #[test]
    fn test_cursor_clamped() {
        let nav = NavigationState::default();
        let mut state = SidebarState::new(&nav);
        state.handle_event(&TuiEvent::CursorEnd);
        let last = state.rows().len() - 1;
        assert_eq!(state.cursor(), last);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.cursor(), last);
    }

    #[test]
    fn test_render_shows_groups() {
        let nav = NavigationState::default();
        let mut state = SidebarState::new(&nav);
        let palette = Palette::for_mode(true);
        let mut terminal = Terminal::new(TestBackend::new(28, 20)).unwrap();
        terminal
            .draw(|f| Sidebar::new(&mut state, "introduction", true, &palette).render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Getting Started"));
        assert!(text.contains("Voice API"));
    }
}
