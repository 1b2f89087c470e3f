//! # ContentView Component
//!
//! Scrollable page body. Renders the page markdown, then (for pages that
//! have them) a language switcher and the code sample for the selected
//! language.
//!
//! The scroll offset lives in `ContentViewState` and resets to the top
//! whenever a different page is shown. Each render also records the wrapped
//! row of every heading so the outline can follow the scroll position and
//! `{` / `}` can jump between headings.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::content::pages::Page;
use crate::content::samples::Language;
use crate::core::navigation::Tab;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::markdown;
use crate::tui::theme::Palette;

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: u16 = 3;

#[derive(Debug, Default)]
pub struct ContentViewState {
    pub scroll_state: ScrollViewState,
    /// Page currently on screen, to detect page changes.
    page_key: Option<(Tab, String)>,
    content_height: u16,
    viewport_height: u16,
    /// Wrapped row of each heading in the last render, in page order.
    heading_rows: Vec<u16>,
}

impl ContentViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record which page is shown; scroll back to the top when it changed.
    pub fn show_page(&mut self, tab: Tab, section: &str) {
        let same = self
            .page_key
            .as_ref()
            .is_some_and(|(t, s)| *t == tab && s == section);
        if !same {
            self.page_key = Some((tab, section.to_string()));
            self.scroll_state.set_offset(Position::ORIGIN);
        }
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    /// Index (into the page's heading list) of the last heading at or
    /// above the top of the viewport.
    pub fn active_heading(&self) -> Option<usize> {
        let y = self.offset();
        self.heading_rows.iter().rposition(|&row| row <= y)
    }

    fn next_heading_row(&self) -> Option<u16> {
        let y = self.offset();
        self.heading_rows.iter().copied().find(|&row| row > y)
    }

    fn prev_heading_row(&self) -> Option<u16> {
        let y = self.offset();
        self.heading_rows.iter().copied().rev().find(|&row| row < y)
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn scroll_to(&mut self, y: u16) {
        let y = y.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }
}

impl EventHandler for ContentViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        let y = self.offset();
        let page = self.viewport_height.saturating_sub(1).max(1);
        match event {
            TuiEvent::CursorUp => self.scroll_to(y.saturating_sub(1)),
            TuiEvent::CursorDown => self.scroll_to(y.saturating_add(1)),
            TuiEvent::ScrollUp => self.scroll_to(y.saturating_sub(WHEEL_STEP)),
            TuiEvent::ScrollDown => self.scroll_to(y.saturating_add(WHEEL_STEP)),
            TuiEvent::PageUp => self.scroll_to(y.saturating_sub(page)),
            TuiEvent::PageDown => self.scroll_to(y.saturating_add(page)),
            TuiEvent::CursorHome => self.scroll_to(0),
            TuiEvent::CursorEnd => self.scroll_to(u16::MAX),
            TuiEvent::InputChar('}') => {
                if let Some(row) = self.next_heading_row() {
                    self.scroll_to(row);
                }
            }
            TuiEvent::InputChar('{') => self.scroll_to(self.prev_heading_row().unwrap_or(0)),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper.
pub struct ContentView<'a> {
    state: &'a mut ContentViewState,
    page: &'a Page,
    language: Language,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> ContentView<'a> {
    pub fn new(
        state: &'a mut ContentViewState,
        page: &'a Page,
        language: Language,
        focused: bool,
        palette: &'a Palette,
    ) -> Self {
        Self {
            state,
            page,
            language,
            focused,
            palette,
        }
    }

    /// Page text plus the line index of each body heading.
    fn build_text(&self) -> (Text<'static>, Vec<usize>) {
        let (mut text, headings) = markdown::render_with_headings(&self.page.body, self.palette);
        if let Some(samples) = self.page.samples {
            text.lines.push(Line::default());
            text.lines.push(language_tabs(self.language, self.palette));
            let code = markdown::render(&samples.to_markdown(self.language), self.palette);
            text.lines.extend(code.lines);
        }
        (text, headings)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner = Block::default().padding(Padding::horizontal(2)).inner(area);
        if inner.width < 2 || inner.height == 0 {
            return;
        }
        // One column for the scrollbar.
        let width = inner.width - 1;
        let (text, headings) = self.build_text();
        self.state.heading_rows = heading_rows(&text, &headings, width);
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(self.palette.fg))
            .wrap(Wrap { trim: false });
        let height = paragraph.line_count(width).min(u16::MAX as usize) as u16;

        self.state.content_height = height;
        self.state.viewport_height = inner.height;
        let y = self.state.offset();
        self.state.scroll_to(y);

        let mut view = ScrollView::new(Size::new(width, height.max(inner.height)))
            .vertical_scrollbar_visibility(if self.focused {
                ScrollbarVisibility::Automatic
            } else {
                ScrollbarVisibility::Never
            })
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        view.render_widget(paragraph, Rect::new(0, 0, width, height));
        frame.render_stateful_widget(view, inner, &mut self.state.scroll_state);
    }
}

/// Wrapped row at which each of `lines` (sorted line indices) starts.
fn heading_rows(text: &Text<'_>, lines: &[usize], width: u16) -> Vec<u16> {
    let mut rows = Vec::with_capacity(lines.len());
    let mut pending = lines.iter().copied().peekable();
    let mut row = 0usize;
    for (i, line) in text.lines.iter().enumerate() {
        while pending.next_if_eq(&i).is_some() {
            rows.push(row.min(u16::MAX as usize) as u16);
        }
        if pending.peek().is_none() {
            break;
        }
        row += Paragraph::new(line.clone())
            .wrap(Wrap { trim: false })
            .line_count(width);
    }
    rows
}

fn language_tabs(active: Language, palette: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled("Sample: ", Style::default().fg(palette.dim))];
    for (i, lang) in Language::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(palette.border)));
        }
        let style = if lang == active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.dim)
        };
        spans.push(Span::styled(lang.label(), style));
    }
    spans.push(Span::styled("   (l to switch, y to copy)", Style::default().fg(palette.dim)));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::pages::page_for;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut ContentViewState, page: &Page, language: Language) -> String {
        let palette = Palette::for_mode(true);
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|f| ContentView::new(state, page, language, true, &palette).render(f, f.area()))
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
    fn test_send_sms_shows_selected_sample() {
        let page = page_for(Tab::Documentation, "send-sms");
        let mut state = ContentViewState::new();
        let text = draw(&mut state, &page, Language::Python);
        assert!(text.contains("import africastalking"));
        assert!(!text.contains("require('africastalking')"));
    }

    #[test]
    fn test_page_without_samples_has_no_switcher() {
        let page = page_for(Tab::Documentation, "introduction");
        let mut state = ContentViewState::new();
        let text = draw(&mut state, &page, Language::JavaScript);
        assert!(text.contains("Welcome to AfricasTalking"));
        assert!(!text.contains("Sample:"));
    }

    #[test]
    fn test_scroll_clamped_to_content() {
        let page = page_for(Tab::Documentation, "introduction");
        let mut state = ContentViewState::new();
        draw(&mut state, &page, Language::JavaScript);
        state.handle_event(&TuiEvent::CursorEnd);
        let bottom = state.offset();
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.offset(), bottom);
        state.handle_event(&TuiEvent::CursorHome);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_heading_jumps_follow_active_heading() {
        let page = page_for(Tab::Documentation, "introduction");
        let mut state = ContentViewState::new();
        let palette = Palette::for_mode(true);
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|f| {
                ContentView::new(&mut state, &page, Language::JavaScript, true, &palette)
                    .render(f, f.area())
            })
            .unwrap();
        assert!(state.heading_rows.len() > 1);
        assert_eq!(state.active_heading(), Some(0));

        state.handle_event(&TuiEvent::InputChar('}'));
        assert_eq!(state.offset(), state.heading_rows[1]);
        assert_eq!(state.active_heading(), Some(1));

        state.handle_event(&TuiEvent::InputChar('{'));
        assert_eq!(state.offset(), 0);
        assert_eq!(state.active_heading(), Some(0));
    }

    #[test]
    fn test_heading_rows_count_wrapped_lines() {
        let text = Text::from(vec![
            Line::from("x".repeat(25)),
            Line::from("short"),
            Line::from("## next"),
        ]);
        assert_eq!(heading_rows(&text, &[0, 2], 10), vec![0, 4]);
    }

    #[test]
    fn test_scroll_resets_on_page_change() {
        let mut state = ContentViewState::new();
        state.show_page(Tab::Documentation, "introduction");
        state.content_height = 100;
        state.viewport_height = 10;
        state.handle_event(&TuiEvent::PageDown);
        assert!(state.offset() > 0);

        state.show_page(Tab::Documentation, "introduction");
        assert!(state.offset() > 0);

        state.show_page(Tab::Documentation, "send-sms");
        assert_eq!(state.offset(), 0);
    }
}
