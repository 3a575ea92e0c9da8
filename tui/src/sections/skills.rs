//! Skills display: one block per category, each skill as an animated
//! level bar.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_engine::App;
use folio_types::ui::SectionId;

use super::{blank, padded, padded_str, section_header};
use crate::effects::{bar_fill, reveal_lines};
use crate::theme::{Glyphs, Palette};

const BAR_WIDTH: u16 = 24;

/// Parse a `#rrggbb` accent into a terminal color, if present and valid.
fn skill_color(raw: Option<&str>, palette: &Palette) -> ratatui::style::Color {
    raw.and_then(parse_hex).unwrap_or(palette.accent)
}

fn parse_hex(raw: &str) -> Option<ratatui::style::Color> {
    let hex = raw.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(ratatui::style::Color::Rgb(r, g, b))
}

pub(crate) fn lines(
    app: &App,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let reveal = app.reveal(SectionId::Skills);
    let mut out = Vec::new();

    // 0: header
    out.extend(reveal_lines(
        section_header(SectionId::Skills, "Skills", width, palette, glyphs),
        reveal.progress(0),
        palette,
    ));

    // 1..: one block per category. Bars scale with the block's own
    // reveal progress, so they fill as the block enters.
    for (index, category) in app.content().skill_categories.iter().enumerate() {
        let progress = reveal.progress(1 + index);
        let name_width = category
            .skills
            .iter()
            .map(|skill| skill.name.width())
            .max()
            .unwrap_or(0)
            + 2;

        let mut block: Vec<Line<'static>> = vec![padded_str(
            category.title.clone(),
            palette.heading(),
        )];

        for skill in &category.skills {
            let filled = bar_fill(skill.level, BAR_WIDTH, progress);
            let empty = BAR_WIDTH - filled;
            let color = skill_color(skill.color.as_deref(), palette);
            block.push(padded(vec![
                Span::styled(
                    format!("{:<name_width$}", skill.name),
                    palette.primary(),
                ),
                Span::styled(
                    glyphs.bar_full.repeat(usize::from(filled)),
                    ratatui::style::Style::default().fg(color),
                ),
                Span::styled(
                    glyphs.bar_empty.repeat(usize::from(empty)),
                    palette.muted(),
                ),
                Span::styled(format!("  {:>3}%", skill.level), palette.secondary()),
            ]));
        }
        block.push(blank());

        out.extend(reveal_lines(block, progress, palette));
    }

    out.push(blank());
    out
}
