//! Section renderers.
//!
//! Each section builds its lines for the page strip; the child blocks are
//! numbered in the order the engine's `child_count` expects, and every
//! block goes through [`reveal_lines`] so hidden content keeps its height
//! while revealing.
//!
//! [`reveal_lines`]: crate::effects::reveal_lines

pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod hero;
pub(crate) mod projects;
pub(crate) mod skills;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_types::ui::SectionId;

use crate::theme::{Glyphs, Palette};

/// Left page margin.
pub(crate) const PAD: &str = "  ";

/// Columns available for text inside the margins.
pub(crate) fn text_width(width: u16) -> u16 {
    width.saturating_sub(4).max(20)
}

pub(crate) fn blank() -> Line<'static> {
    Line::default()
}

/// A padded line from styled spans.
pub(crate) fn padded(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(Span::raw(PAD));
    all.extend(spans);
    Line::from(all)
}

/// A padded line holding a single styled string.
pub(crate) fn padded_str(text: impl Into<String>, style: Style) -> Line<'static> {
    padded(vec![Span::styled(text.into(), style)])
}

/// The numbered section header: `02. About ────────────`.
pub(crate) fn section_header(
    section: SectionId,
    heading: &str,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let label = format!("{}. {heading} ", section.number());
    let rule_width = usize::from(text_width(width)).saturating_sub(label.width());
    vec![
        padded(vec![
            Span::styled(
                format!("{}. ", section.number()),
                Style::default().fg(palette.accent),
            ),
            Span::styled(format!("{heading} "), palette.heading()),
            Span::styled(glyphs.rule.repeat(rule_width), Style::default().fg(palette.bg_highlight)),
        ]),
        blank(),
    ]
}
