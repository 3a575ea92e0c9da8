//! Reveal and animation effects applied at render time.
//!
//! Sections keep a stable height while revealing, so entering content
//! fades (dim steps) and slides in from the left rather than moving
//! vertically; hidden content renders as blank lines of the same count.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_types::ui::ease_out_cubic;

use crate::theme::Palette;

/// Columns of slide-in indent at the start of an enter transition.
const SLIDE_COLUMNS: f32 = 6.0;

/// Apply a reveal `progress` in `[0, 1]` to a block of lines.
#[must_use]
pub fn reveal_lines(lines: Vec<Line<'static>>, progress: f32, palette: &Palette) -> Vec<Line<'static>> {
    if progress <= 0.0 {
        return lines.iter().map(|_| Line::default()).collect();
    }
    if progress >= 1.0 {
        return lines;
    }

    let eased = ease_out_cubic(progress);
    let indent = ((1.0 - eased) * SLIDE_COLUMNS).round() as usize;
    let style = if progress < 0.5 {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    lines
        .into_iter()
        .map(|line| {
            let mut spans = Vec::with_capacity(line.spans.len() + 1);
            if indent > 0 {
                spans.push(Span::raw(" ".repeat(indent)));
            }
            // Mid-transition the block renders washed out: every span
            // collapses onto the fade style until the enter completes.
            spans.extend(
                line.spans
                    .into_iter()
                    .map(|span| Span::styled(span.content, style)),
            );
            Line::from(spans)
        })
        .collect()
}

/// Filled columns of a skill bar: the configured level scaled by both the
/// bar width and the reveal progress, so bars grow as the section enters.
#[must_use]
pub fn bar_fill(level: u8, bar_width: u16, progress: f32) -> u16 {
    let level = f32::from(level.min(100)) / 100.0;
    let eased = ease_out_cubic(progress.clamp(0.0, 1.0));
    (f32::from(bar_width) * level * eased).round() as u16
}
