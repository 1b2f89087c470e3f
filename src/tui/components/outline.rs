//! "On this page" column listing the headings of the current page, with the
//! heading at the top of the content view highlighted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::content::toc::Heading;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct Outline<'a> {
    pub headings: &'a [Heading],
    /// Index into `headings` of the section being read.
    pub active: Option<usize>,
    pub palette: Palette,
}

impl Component for Outline<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(self.palette.border));

        let mut lines = vec![
            Line::from(Span::styled(
                "On this page",
                Style::default().fg(self.palette.fg).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        // The page title (H1) is already on screen; list the rest.
        lines.extend(
            self.headings
                .iter()
                .enumerate()
                .filter(|(_, h)| h.level > 1)
                .map(|(i, h)| {
                    let indent = " ".repeat(usize::from(h.level.saturating_sub(2)) * 2);
                    let style = if self.active == Some(i) {
                        Style::default()
                            .fg(self.palette.accent)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(self.palette.dim)
                    };
                    Line::from(Span::styled(format!(" {indent}{}", h.text), style))
                }),
        );

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
