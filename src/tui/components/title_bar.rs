//! # TitleBar Component
//!
//! Top bar: product name on the left, search hint and theme on the right,
//! and the transient status message in between.
//!
//! Stateless. All fields are props copied from `App` each frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.dark_mode, &app.status_message, palette);
//! title_bar.render(frame, title_area);
//! ```
//!
//! On narrow terminals the right-hand hints are dropped first, then the
//! status message, so the product name stays visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::action::theme_label;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const PRODUCT: &str = " AfricasTalking Docs";

pub struct TitleBar<'a> {
    pub dark_mode: bool,
    pub status_message: &'a str,
    pub palette: Palette,
}

impl<'a> TitleBar<'a> {
    pub fn new(dark_mode: bool, status_message: &'a str, palette: Palette) -> Self {
        Self {
            dark_mode,
            status_message,
            palette,
        }
    }

    fn hints(&self) -> String {
        let icon = if self.dark_mode { "☾" } else { "☀" };
        format!("/ Search   t {} {} ", icon, theme_label(self.dark_mode))
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width as usize;
        let hints = self.hints();
        let brand = Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(PRODUCT, brand)];
        let mut used = PRODUCT.width();

        if !self.status_message.is_empty() && used + 3 + self.status_message.width() <= width {
            spans.push(Span::styled(" · ", Style::default().fg(self.palette.dim)));
            spans.push(Span::styled(
                self.status_message.to_string(),
                Style::default().fg(self.palette.fg),
            ));
            used += 3 + self.status_message.width();
        }

        if used + hints.width() < width {
            let gap = width - used - hints.width();
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(hints, Style::default().fg(self.palette.dim)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(self.palette.base()),
            area,
        );
    }
}
