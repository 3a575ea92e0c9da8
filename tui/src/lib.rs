//! TUI rendering for folio using ratatui.
//!
//! The page is one tall strip of section lines; [`draw`] rebuilds the
//! strip every frame, reports the measured section heights back to the
//! engine (which drives visibility and reveals from them), and renders
//! the strip through a scrolled [`Paragraph`] under a fixed nav bar and
//! above a status bar.

mod effects;
mod format;
mod input;
mod sections;
mod theme;

pub use effects::{bar_fill, reveal_lines};
pub use format::wrap_plain;
pub use input::handle_events;
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
};

use folio_engine::{App, InputMode};
use folio_types::ui::SectionId;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with the page background.
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::vertical([
        Constraint::Length(2), // Nav bar
        Constraint::Min(1),    // Page
        Constraint::Length(1), // Status bar
    ])
    .split(frame.area());
    let (nav_area, page_area, status_area) = (chunks[0], chunks[1], chunks[2]);

    let width = page_area.width;
    let section_lines: [Vec<Line<'static>>; SectionId::COUNT] = [
        sections::hero::lines(app, width, &palette, &glyphs),
        sections::about::lines(app, width, &palette, &glyphs),
        sections::projects::lines(app, width, &palette, &glyphs),
        sections::skills::lines(app, width, &palette, &glyphs),
        sections::contact::lines(app, width, &palette, &glyphs),
    ];

    let mut heights = [0u16; SectionId::COUNT];
    for (index, lines) in section_lines.iter().enumerate() {
        heights[index] = lines.len() as u16;
    }
    app.update_layout(heights, page_area.height);

    let mut strip: Vec<Line<'static>> = Vec::new();
    for lines in section_lines {
        strip.extend(lines);
    }
    let strip_height = strip.len();

    let offset = app.scroll().offset();
    let page = Paragraph::new(Text::from(strip)).scroll((offset, 0));
    frame.render_widget(page, page_area);

    draw_nav_bar(frame, app, nav_area, &palette, &glyphs);
    draw_status_bar(frame, app, status_area, &palette);
    draw_scrollbar(frame, page_area, strip_height, offset);
}

fn draw_nav_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let active = app.active_section();
    let compact = app.nav_compact();

    let initials: String = app
        .content()
        .profile
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(
            format!(" {initials} "),
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for section in SectionId::ALL {
        let label = format!("{} {}", section.number(), section.title());
        if section == active {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(palette.text_secondary)));
        }
        spans.push(Span::raw("  "));
    }

    // The rule under the bar picks up the accent once the page scrolls.
    let rule_color = if compact {
        palette.accent_dim
    } else {
        palette.bg_highlight
    };
    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            glyphs.rule.repeat(usize::from(area.width)),
            Style::default().fg(rule_color),
        )),
    ];
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = match app.input_mode() {
        InputMode::Page => {
            " q quit · j/k scroll · 1-5 jump · tab next · f filter · t tab · c contact"
        }
        InputMode::Form => " esc done · tab next field · enter send (message: newline) · ctrl+c quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(palette.text_muted),
        ))),
        area,
    );

    let active = app.active_section();
    let position = format!("{} · {} ", active.number(), active.title());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            position,
            Style::default().fg(palette.text_secondary),
        )))
        .alignment(Alignment::Right),
        area,
    );
}

fn draw_scrollbar(frame: &mut Frame, area: Rect, content_height: usize, offset: u16) {
    let mut state = ScrollbarState::new(content_height.saturating_sub(usize::from(area.height)))
        .position(usize::from(offset));
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area,
        &mut state,
    );
}
