//! # QueryInput Component
//!
//! Single-line text field at the top of the search overlay.
//!
//! The buffer and cursor are internal state; the overlay reads the buffer
//! back whenever an edit reports `QueryEvent::Changed`. Newlines from pasted
//! text are folded into spaces so the query always fits on one row.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Palette;

const PROMPT: &str = "⌕ ";
const PLACEHOLDER: &str = "Search documentation...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    /// The buffer changed; carries the new query.
    Changed(String),
}

#[derive(Debug, Default)]
pub struct QueryInput {
    buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    cursor: usize,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let prompt = Span::styled(PROMPT, Style::default().fg(palette.accent));
        let prompt_width = PROMPT.width() as u16;
        let field_width = area.width.saturating_sub(prompt_width) as usize;

        let (visible, cursor_col) = self.visible_window(field_width);
        let body = if self.buffer.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(palette.dim))
        } else {
            Span::styled(visible, Style::default().fg(palette.fg))
        };
        frame.render_widget(Paragraph::new(Line::from(vec![prompt, body])), area);

        let x = area.x + prompt_width + cursor_col as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
    }

    /// The slice of the buffer that fits in `width` columns with the cursor
    /// visible, and the cursor's column inside that slice.
    ///
    /// Widths are summed per char on both sides of the cut so the two
    /// always agree (string width of a ZWJ sequence is less than its parts).
    fn visible_window(&self, width: usize) -> (String, usize) {
        let before = &self.buffer[..self.cursor];
        let before_width: usize = before.chars().map(char_width).sum();
        if before_width < width || width == 0 {
            return (self.buffer.clone(), before_width);
        }
        // Drop leading chars until the cursor fits in the last column.
        let mut skipped = 0;
        let mut start = 0;
        for (idx, ch) in before.char_indices() {
            if before_width.saturating_sub(skipped) < width {
                break;
            }
            skipped += char_width(ch);
            start = idx + ch.len_utf8();
        }
        (
            self.buffer[start..].to_string(),
            before_width.saturating_sub(skipped),
        )
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn changed(&self) -> Option<QueryEvent> {
        Some(QueryEvent::Changed(self.buffer.clone()))
    }
}

impl EventHandler for QueryInput {
    type Event = QueryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<QueryEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert(c.encode_utf8(&mut tmp));
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                if flat.is_empty() {
                    return None;
                }
                self.insert(&flat);
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

fn prev_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}
