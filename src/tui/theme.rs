//! Colors for the two modes. `App::dark_mode` is the only switch.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub code_fg: Color,
    pub code_bg: Color,
    /// Key into syntect's default `ThemeSet`.
    pub syntax_theme: &'static str,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                fg: Color::Gray,
                bg: Color::Reset,
                dim: Color::DarkGray,
                accent: Color::Rgb(251, 146, 60),
                border: Color::DarkGray,
                code_fg: Color::White,
                code_bg: Color::DarkGray,
                syntax_theme: "base16-ocean.dark",
            }
        } else {
            Self {
                fg: Color::Black,
                bg: Color::White,
                dim: Color::Gray,
                accent: Color::Rgb(234, 88, 12),
                border: Color::Gray,
                code_fg: Color::Black,
                code_bg: Color::Rgb(226, 232, 240),
                syntax_theme: "base16-ocean.light",
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}
