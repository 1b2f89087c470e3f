//! # Search Overlay Component
//!
//! Modal search box drawn over the whole screen. Opened with `/`, closed with
//! Esc or by picking a result.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchOverlayState` lives in `TuiState` and owns the query field and
//!   list cursor
//! - `SearchOverlayView` is created each frame with borrowed state and the
//!   core `SearchState` as props
//!
//! The query itself is owned by the core: edits are emitted as
//! `SearchEvent::QueryChanged` and come back through `update()`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::query_input::{QueryEvent, QueryInput};
use crate::core::search::SearchState;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

#[derive(Debug, Default)]
pub struct SearchOverlayState {
    input: QueryInput,
    selected: usize,
    list_state: ListState,
    /// Result count from the last sync with the core search state.
    result_count: usize,
}

impl SearchOverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Throw away the typed query and cursor; called when the overlay closes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn query(&self) -> &str {
        self.input.text()
    }

    /// Adopt the result count after the core recomputed results. Keeps the
    /// highlight on the first row when the result set changes size.
    pub fn sync(&mut self, result_count: usize) {
        if result_count != self.result_count {
            self.selected = 0;
        }
        self.result_count = result_count;
        self.selected = self.selected.min(result_count.saturating_sub(1));
        self.list_state
            .select((result_count > 0).then_some(self.selected));
    }
}

impl EventHandler for SearchOverlayState {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::Escape => Some(SearchEvent::Dismiss),
            TuiEvent::CursorUp => {
                if self.result_count > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.result_count > 0 {
                    self.selected = (self.selected + 1).min(self.result_count - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => (self.result_count > 0).then_some(SearchEvent::Open(self.selected)),
            other => self
                .input
                .handle_event(other)
                .map(|QueryEvent::Changed(query)| SearchEvent::QueryChanged(query)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Dismiss,
    QueryChanged(String),
    /// Open the result at this index of the current result list.
    Open(usize),
}

/// Transient render wrapper for the search overlay.
pub struct SearchOverlayView<'a> {
    state: &'a mut SearchOverlayState,
    search: &'a SearchState,
    palette: &'a Palette,
}

impl<'a> SearchOverlayView<'a> {
    pub fn new(
        state: &'a mut SearchOverlayState,
        search: &'a SearchState,
        palette: &'a Palette,
    ) -> Self {
        Self {
            state,
            search,
            palette,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent))
            .style(self.palette.base())
            .title(" Search ")
            .title_bottom(Line::from(" ↑↓ Navigate  Enter Open  Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [input_area, rule_area, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        self.state.input.render(frame, input_area, self.palette);
        frame.render_widget(
            Paragraph::new("─".repeat(rule_area.width as usize))
                .style(Style::default().fg(self.palette.border)),
            rule_area,
        );

        if self.search.is_empty() {
            self.render_empty(frame, body);
            return;
        }

        // Whitespace still lists the popular entries, just without the heading.
        let body = if self.search.query().is_empty() {
            let [heading, rest] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(body);
            frame.render_widget(
                Paragraph::new("Popular").style(
                    Style::default()
                        .fg(self.palette.dim)
                        .add_modifier(Modifier::BOLD),
                ),
                heading,
            );
            rest
        } else {
            body
        };

        let width = body.width as usize;
        let items: Vec<ListItem> = self
            .search
            .results()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let selected = i == self.state.selected;
                let title_style = if selected {
                    self.palette.selected()
                } else {
                    Style::default().fg(self.palette.fg).add_modifier(Modifier::BOLD)
                };
                let tag = format!("[{}]", entry.category.label());
                let title_width = width.saturating_sub(tag.width() + 1);
                let title = format!(
                    "{:<w$}",
                    truncate_str(&entry.title, title_width),
                    w = title_width
                );
                let header = Line::from(vec![
                    Span::styled(title, title_style),
                    Span::raw(" "),
                    Span::styled(tag, Style::default().fg(self.palette.accent)),
                ]);
                let description = Line::from(Span::styled(
                    truncate_str(&entry.description, width),
                    Style::default().fg(self.palette.dim),
                ));
                ListItem::new(vec![header, description])
            })
            .collect();

        frame.render_stateful_widget(List::new(items), body, &mut self.state.list_state);
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "No results found",
                Style::default().fg(self.palette.fg).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(Span::styled(
                "Try searching for something else",
                Style::default().fg(self.palette.dim),
            ))
            .centered(),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Truncate to `max_width` display columns, adding "..." if cut.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut SearchOverlayState, search: &SearchState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let palette = Palette::for_mode(true);
        terminal
            .draw(|f| SearchOverlayView::new(state, search, &palette).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_emits_query_changed() {
        let mut state = SearchOverlayState::new();
        let ev = state.handle_event(&TuiEvent::InputChar('s'));
        assert_eq!(ev, Some(SearchEvent::QueryChanged("s".into())));
        assert_eq!(state.query(), "s");
    }

    #[test]
    fn test_escape_dismisses() {
        let mut state = SearchOverlayState::new();
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(SearchEvent::Dismiss));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = SearchOverlayState::new();
        state.sync(2);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected(), 0);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), 1);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(SearchEvent::Open(1)));
    }

    #[test]
    fn test_submit_with_no_results_does_nothing() {
        let mut state = SearchOverlayState::new();
        state.sync(0);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_sync_resets_selection_when_results_change() {
        let mut state = SearchOverlayState::new();
        state.sync(4);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.sync(2);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_render_popular_heading() {
        let search = SearchState::new(test_catalog());
        let mut state = SearchOverlayState::new();
        state.sync(search.len());
        let text = draw(&mut state, &search);
        assert!(text.contains("Popular"));
        assert!(text.contains("Send SMS"));
        assert!(text.contains("[Documentation]"));
    }

    #[test]
    fn test_render_no_results() {
        let mut search = SearchState::new(test_catalog());
        search.set_query("zzz");
        let mut state = SearchOverlayState::new();
        state.sync(search.len());
        let text = draw(&mut state, &search);
        assert!(text.contains("No results found"));
        assert!(text.contains("Try searching for something else"));
        assert!(!text.contains("Popular"));
    }

    #[test]
    fn test_render_filtered_has_no_popular_heading() {
        let mut search = SearchState::new(test_catalog());
        search.set_query("voice");
        let mut state = SearchOverlayState::new();
        state.sync(search.len());
        let text = draw(&mut state, &search);
        assert!(text.contains("Voice API"));
        assert!(!text.contains("Popular"));
    }

    #[test]
    fn test_whitespace_query_lists_entries_without_heading() {
        let mut search = SearchState::new(test_catalog());
        search.set_query("   ");
        let mut state = SearchOverlayState::new();
        state.sync(search.len());
        let text = draw(&mut state, &search);
        assert!(text.contains("Send SMS"));
        assert!(!text.contains("Popular"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Send SMS", 20), "Send SMS");
        assert_eq!(truncate_str("Send SMS Messages", 8), "Send ...");
        assert_eq!(truncate_str("abc", 2), "..");
    }
}
