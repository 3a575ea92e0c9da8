//! Hero banner: greeting, name, the typewriter role line, tagline,
//! social links and the scroll hint.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_engine::App;
use folio_types::ui::SectionId;

use super::{blank, padded, padded_str, text_width};
use crate::effects::reveal_lines;
use crate::format::wrap_plain;
use crate::theme::{Glyphs, Palette};

pub(crate) fn lines(
    app: &App,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let reveal = app.reveal(SectionId::Hero);
    let profile = &app.content().profile;
    let wrap_to = text_width(width);
    let mut out = vec![blank()];

    // 0: greeting
    let greeting = vec![padded(vec![
        Span::raw(format!("{} ", glyphs.wave)),
        Span::styled(profile.greeting.clone(), palette.accent()),
    ])];
    out.extend(reveal_lines(greeting, reveal.progress(0), palette));
    out.push(blank());

    // 1: name
    let name = vec![padded_str(
        profile.name.clone(),
        palette.heading().add_modifier(Modifier::UNDERLINED),
    )];
    out.extend(reveal_lines(name, reveal.progress(1), palette));
    out.push(blank());

    // 2: typewriter role line
    let cursor = if app.cursor_visible() {
        glyphs.cursor
    } else {
        " "
    };
    let role = vec![padded(vec![
        Span::styled(format!("{} ", glyphs.bullet), palette.accent()),
        Span::styled(app.typed_text().to_owned(), palette.primary()),
        Span::styled(cursor.to_owned(), palette.accent()),
    ])];
    out.extend(reveal_lines(role, reveal.progress(2), palette));
    out.push(blank());

    // 3: tagline
    let tagline: Vec<Line<'static>> = wrap_plain(&profile.tagline, wrap_to)
        .into_iter()
        .map(|line| padded_str(line, palette.secondary()))
        .collect();
    out.extend(reveal_lines(tagline, reveal.progress(3), palette));
    out.push(blank());

    // 4: social links
    let socials: Vec<Line<'static>> = profile
        .socials
        .iter()
        .map(|social| {
            padded(vec![
                Span::styled(format!("{} ", glyphs.bullet), palette.accent()),
                Span::styled(
                    format!("{:<10}", social.label),
                    palette.primary(),
                ),
                Span::styled(social.url.clone(), palette.muted()),
            ])
        })
        .collect();
    out.extend(reveal_lines(socials, reveal.progress(4), palette));
    out.push(blank());

    // 5: scroll hint
    let hint = vec![padded(vec![Span::styled(
        format!("{} scroll for more", glyphs.scroll_hint),
        Style::default().fg(palette.text_muted),
    )])];
    out.extend(reveal_lines(hint, reveal.progress(5), palette));
    out.push(blank());

    out
}
