//! Markdown → ratatui `Text` for doc pages.
//!
//! Walks `pulldown_cmark` events and emits styled `Line`/`Span` values in the
//! active `Palette`. Covers what the doc pages use: headings, emphasis,
//! inline code, fenced samples (highlighted with syntect), lists, callout
//! blockquotes, links and rules.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::theme::Palette;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Render a markdown page body. The result owns its strings.
pub fn render(content: &str, palette: &Palette) -> Text<'static> {
    render_with_headings(content, palette).0
}

/// Like [`render`], also returning the line index of each heading.
///
/// Headings with no text are skipped, so the indices pair up with
/// `content::toc::headings` for the same markdown.
pub fn render_with_headings(content: &str, palette: &Palette) -> (Text<'static>, Vec<usize>) {
    let mut page = PageWriter::new(*palette);
    for event in Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH) {
        page.handle(event);
    }
    (page.text, page.headings)
}

struct PageWriter {
    text: Text<'static>,
    palette: Palette,
    /// Composed inline styles; top of stack applies to text.
    styles: Vec<Style>,
    /// Gutter spans prepended to every new line (callouts, code blocks).
    gutters: Vec<Span<'static>>,
    /// None = bullet list, Some(n) = numbered list at n.
    lists: Vec<Option<u64>>,
    highlighter: Option<HighlightLines<'static>>,
    in_code: bool,
    link: Option<String>,
    pending_gap: bool,
    /// Line of the open heading, and whether it has any text yet.
    heading: Option<(usize, bool)>,
    headings: Vec<usize>,
}

impl PageWriter {
    fn new(palette: Palette) -> Self {
        Self {
            text: Text::default(),
            palette,
            styles: Vec::new(),
            gutters: Vec::new(),
            lists: Vec::new(),
            highlighter: None,
            in_code: false,
            link: None,
            pending_gap: false,
            heading: None,
            headings: Vec::new(),
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.palette.fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn dim(&self) -> Style {
        Style::default().fg(self.palette.dim)
    }

    fn new_line(&mut self, line: Line<'static>) {
        let mut line = line;
        for gutter in self.gutters.iter().rev() {
            line.spans.insert(0, gutter.clone());
        }
        self.text.lines.push(line);
    }

    fn append(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.new_line(Line::from(span)),
        }
    }

    fn gap(&mut self) {
        if self.pending_gap {
            self.new_line(Line::default());
            self.pending_gap = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => {
                self.note_heading_text(&c);
                let style = Style::default()
                    .fg(self.palette.code_fg)
                    .bg(self.palette.code_bg);
                self.append(Span::styled(c.to_string(), style));
            }
            Event::SoftBreak => self.append(Span::raw(" ")),
            Event::HardBreak => self.new_line(Line::default()),
            Event::Rule => {
                self.gap();
                let rule = Span::styled("─".repeat(40), self.dim());
                self.new_line(Line::from(rule));
                self.pending_gap = true;
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.gap();
                self.new_line(Line::default());
            }
            Tag::Heading { level, .. } => {
                self.gap();
                self.new_line(Line::default());
                self.heading = Some((self.text.lines.len() - 1, false));
                let style = heading_style(&self.palette, level);
                self.push_style(style);
            }
            Tag::BlockQuote(_) => {
                self.gap();
                let bar = Span::styled("▌ ", Style::default().fg(self.palette.accent));
                self.gutters.push(bar);
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(kind) => self.start_code(kind),
            Tag::List(first) => {
                if self.lists.is_empty() {
                    self.gap();
                }
                self.lists.push(first);
            }
            Tag::Item => {
                self.new_line(Line::default());
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                let style = self.dim();
                self.append(Span::styled(marker, style));
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link = Some(dest_url.to_string());
                self.push_style(link_style(&self.palette));
            }
            _ => {}
        }
    }

    fn start_code(&mut self, kind: CodeBlockKind<'_>) {
        if !self.text.lines.is_empty() {
            self.new_line(Line::default());
        }
        let lang = match &kind {
            CodeBlockKind::Fenced(lang) => lang.to_string(),
            CodeBlockKind::Indented => String::new(),
        };
        let border = self.dim();
        let mut top = vec![Span::styled("┌─", border)];
        if !lang.is_empty() {
            top.push(Span::styled(
                format!(" {lang} "),
                border.add_modifier(Modifier::BOLD),
            ));
        }
        self.new_line(Line::from(top));
        self.gutters.push(Span::styled("│ ", border));

        let theme = THEME_SET.themes.get(self.palette.syntax_theme);
        let syntax = SYNTAX_SET.find_syntax_by_token(&lang);
        if let (Some(theme), Some(syntax)) = (theme, syntax) {
            self.highlighter = Some(HighlightLines::new(syntax, theme));
        }
        self.in_code = true;
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.pending_gap = true,
            TagEnd::Heading(_) => {
                if let Some((line, true)) = self.heading.take() {
                    self.headings.push(line);
                }
                self.pop_style();
                self.pending_gap = true;
            }
            TagEnd::BlockQuote(_) => {
                self.gutters.pop();
                self.pop_style();
                self.pending_gap = true;
            }
            TagEnd::CodeBlock => {
                self.highlighter = None;
                self.in_code = false;
                self.gutters.pop();
                let border = self.dim();
                self.new_line(Line::from(Span::styled("└─", border)));
                self.pending_gap = true;
            }
            TagEnd::List(_) => {
                self.lists.pop();
                self.pending_gap = true;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link.take() {
                    let style = self.dim();
                    self.append(Span::styled(format!(" <{url}>"), style));
                }
            }
            _ => {}
        }
    }

    fn note_heading_text(&mut self, text: &str) {
        if let Some((_, seen)) = self.heading.as_mut()
            && !text.trim().is_empty()
        {
            *seen = true;
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        self.note_heading_text(&cow);
        // ratatui renders \t as zero-width
        let text = cow.replace('\t', "    ");

        if !self.in_code {
            let style = self.style();
            self.append(Span::styled(text, style));
            return;
        }

        match self.highlighter.take() {
            Some(mut hl) => {
                for line in LinesWithEndings::from(&text) {
                    let spans = highlight(&mut hl, line, &self.palette);
                    self.new_line(Line::from(spans));
                }
                self.highlighter = Some(hl);
            }
            None => {
                let style = Style::default().fg(self.palette.code_fg);
                for line in text.lines() {
                    self.new_line(Line::from(Span::styled(line.to_owned(), style)));
                }
            }
        }
    }
}

fn highlight(hl: &mut HighlightLines<'static>, line: &str, palette: &Palette) -> Vec<Span<'static>> {
    match hl.highlight_line(line, &SYNTAX_SET) {
        Ok(ranges) => ranges
            .into_iter()
            .filter_map(|(style, fragment)| {
                let content = fragment.trim_end_matches('\n');
                if content.is_empty() {
                    return None;
                }
                let fg = Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);
                Some(Span::styled(content.to_owned(), Style::default().fg(fg)))
            })
            .collect(),
        Err(e) => {
            log::debug!("highlight failed: {}", e);
            vec![Span::styled(
                line.trim_end_matches('\n').to_owned(),
                Style::default().fg(palette.code_fg),
            )]
        }
    }
}

fn heading_style(palette: &Palette, level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    }
}

fn link_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::UNDERLINED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_heading_uses_accent() {
        let palette = Palette::for_mode(true);
        let text = render("## Session Flow", &palette);
        let span = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "Session Flow")
            .unwrap();
        assert_eq!(span.style.fg, Some(palette.accent));
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_plain_text_follows_mode() {
        let dark = render("hello", &Palette::for_mode(true));
        let light = render("hello", &Palette::for_mode(false));
        assert_eq!(dark.lines[0].spans[0].style.fg, Some(Palette::for_mode(true).fg));
        assert_eq!(light.lines[0].spans[0].style.fg, Some(Palette::for_mode(false).fg));
    }

    #[test]
    fn test_inline_code_styled() {
        let palette = Palette::for_mode(true);
        let text = render("Send the `apiKey` header", &palette);
        let code = text.lines[0].spans.iter().find(|s| s.content == "apiKey").unwrap();
        assert_eq!(code.style.bg, Some(palette.code_bg));
    }

    #[test]
    fn test_code_block_frame_and_language() {
        let text = render("```bash\ncurl -X POST\n```", &Palette::for_mode(true));
        let lines = plain(&text);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[0].contains("bash"));
        assert!(lines[1].starts_with("│ "));
        assert!(lines[1].contains("curl -X POST"));
        assert!(lines.last().unwrap().starts_with('└'));
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let text = render("```nosuchlang\n\tindented\n```", &Palette::for_mode(false));
        let lines = plain(&text);
        assert!(lines.iter().any(|l| l.contains("    indented")));
        assert!(!lines.iter().any(|l| l.contains('\t')));
    }

    #[test]
    fn test_ordered_list_numbers() {
        let text = render("1. dial\n2. respond\n", &Palette::for_mode(true));
        let lines = plain(&text);
        assert!(lines.iter().any(|l| l.starts_with("1. dial")));
        assert!(lines.iter().any(|l| l.starts_with("2. respond")));
    }

    #[test]
    fn test_heading_lines_match_outline() {
        let md = "# Title\n\nintro\n\n## First\n\ntext\n\n##\n\n### Deep `code`\n";
        let (text, lines) = render_with_headings(md, &Palette::for_mode(true));
        let rendered = plain(&text);
        let found: Vec<&str> = lines.iter().map(|&i| rendered[i].as_str()).collect();
        assert_eq!(found, vec!["Title", "First", "Deep code"]);
        assert_eq!(lines.len(), crate::content::toc::headings(md).len());
    }

    #[test]
    fn test_callout_has_gutter() {
        let text = render("> **Pro Tip:** use country codes", &Palette::for_mode(true));
        let lines = plain(&text);
        assert!(lines.iter().any(|l| l.starts_with("▌ ") && l.contains("Pro Tip:")));
    }
}
