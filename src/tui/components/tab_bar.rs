//! Top-level tab strip: Documentation, API Reference, Changelog.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::core::navigation::Tab;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct TabBar {
    pub active: Tab,
    pub palette: Palette,
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL.iter().map(|tab| Line::from(format!(" {} ", tab.label())));
        let selected = Tab::ALL.iter().position(|t| *t == self.active);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(self.palette.dim))
            .highlight_style(
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("│")
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(self.palette.border)),
            );
        frame.render_widget(tabs, area);
    }
}
