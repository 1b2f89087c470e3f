use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::content::pages::{self, Page};
use crate::content::toc;
use crate::core::navigation::Tab;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    ContentView, Outline, SearchOverlayView, Sidebar, TabBar, TitleBar,
};
use crate::tui::theme::Palette;
use crate::tui::{Focus, TuiState};

const SIDEBAR_WIDTH: u16 = 28;
const OUTLINE_WIDTH: u16 = 26;
/// Below this width the outline column is hidden.
const OUTLINE_MIN_TOTAL: u16 = 100;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let palette = Palette::for_mode(app.dark_mode);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [title_area, tabs_area, body_area, footer_area] =
        Layout::vertical([Length(1), Length(2), Min(0), Length(1)]).areas(area);

    TitleBar::new(app.dark_mode, &app.status_message, palette).render(frame, title_area);
    TabBar {
        active: app.navigation.active_tab(),
        palette,
    }
    .render(frame, tabs_area);

    let tab = app.navigation.active_tab();
    let page = pages::page_for(tab, app.navigation.active_section());
    tui.content.show_page(tab, app.navigation.active_section());

    if tab == Tab::Documentation {
        draw_documentation(frame, body_area, app, tui, &page, &palette);
    } else {
        let focused = !app.search.is_open();
        ContentView::new(&mut tui.content, &page, app.language, focused, &palette)
            .render(frame, body_area);
    }

    draw_footer(frame, footer_area, tui.focus, &palette);

    if let Some(search) = app.search.state() {
        SearchOverlayView::new(&mut tui.search, search, &palette).render(frame, area);
    }
}

fn draw_documentation(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    page: &Page,
    palette: &Palette,
) {
    use Constraint::{Length, Min};

    let show_outline = area.width >= OUTLINE_MIN_TOTAL;
    let [sidebar_area, content_area, outline_area] = if show_outline {
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0), Length(OUTLINE_WIDTH)]).areas(area)
    } else {
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0), Length(0)]).areas(area)
    };

    let overlay_open = app.search.is_open();
    Sidebar::new(
        &mut tui.sidebar,
        app.navigation.active_section(),
        !overlay_open && tui.focus == Focus::Sidebar,
        palette,
    )
    .render(frame, sidebar_area);

    ContentView::new(
        &mut tui.content,
        page,
        app.language,
        !overlay_open && tui.focus == Focus::Content,
        palette,
    )
    .render(frame, content_area);

    if show_outline {
        let headings = toc::headings(&page.body);
        Outline {
            headings: &headings,
            active: tui.content.active_heading(),
            palette: *palette,
        }
        .render(frame, outline_area);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, focus: Focus, palette: &Palette) {
    let key = Style::default().fg(palette.accent);
    let text = Style::default().fg(palette.dim);
    let focus_hint = match focus {
        Focus::Sidebar => "Enter open  ←→ collapse/expand",
        Focus::Content => "↑↓ PgUp PgDn scroll  { } headings",
    };
    let line = Line::from(vec![
        Span::styled(" / ", key),
        Span::styled("search  ", text),
        Span::styled("[ ] ", key),
        Span::styled("tabs  ", text),
        Span::styled("Tab ", key),
        Span::styled("focus  ", text),
        Span::styled("l ", key),
        Span::styled("language  ", text),
        Span::styled("y ", key),
        Span::styled("copy  ", text),
        Span::styled("q ", key),
        Span::styled("quit   ", text),
        Span::styled(focus_hint, text),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
