//! About section: tabbed bio panes, technology list, stats.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use folio_engine::App;
use folio_types::ui::SectionId;

use super::{blank, padded, padded_str, section_header, text_width};
use crate::effects::reveal_lines;
use crate::format::wrap_plain;
use crate::theme::{Glyphs, Palette};

pub(crate) fn lines(
    app: &App,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let reveal = app.reveal(SectionId::About);
    let about = &app.content().about;
    let wrap_to = text_width(width);
    let mut out = Vec::new();

    // 0: header
    out.extend(reveal_lines(
        section_header(SectionId::About, "About Me", width, palette, glyphs),
        reveal.progress(0),
        palette,
    ));

    // 1: tab bar
    let mut tab_spans: Vec<Span<'static>> = Vec::new();
    for (index, tab) in about.tabs.iter().enumerate() {
        if index > 0 {
            tab_spans.push(Span::raw("   "));
        }
        if index == app.about_tab() {
            tab_spans.push(Span::styled(
                format!("[ {} ]", tab.title),
                palette.accent().add_modifier(Modifier::BOLD),
            ));
        } else {
            tab_spans.push(Span::styled(tab.title.clone(), palette.muted()));
        }
    }
    out.extend(reveal_lines(
        vec![padded(tab_spans)],
        reveal.progress(1),
        palette,
    ));
    out.push(blank());

    // 2: active tab body
    let mut body: Vec<Line<'static>> = Vec::new();
    if let Some(tab) = about.tabs.get(app.about_tab()) {
        for (index, paragraph) in tab.paragraphs.iter().enumerate() {
            if index > 0 {
                body.push(blank());
            }
            body.extend(
                wrap_plain(paragraph, wrap_to)
                    .into_iter()
                    .map(|line| padded_str(line, palette.secondary())),
            );
        }
    }
    out.extend(reveal_lines(body, reveal.progress(2), palette));
    out.push(blank());

    // 3: technologies
    let mut tech: Vec<Line<'static>> = vec![padded_str(
        "Technologies I work with:",
        palette.primary(),
    )];
    let listed = about
        .technologies
        .iter()
        .map(|name| format!("{} {name}", glyphs.bullet))
        .collect::<Vec<_>>()
        .join("   ");
    tech.extend(
        wrap_plain(&listed, wrap_to)
            .into_iter()
            .map(|line| padded_str(line, palette.accent())),
    );
    out.extend(reveal_lines(tech, reveal.progress(3), palette));
    out.push(blank());

    // 4: stats
    let stats: Vec<Line<'static>> = about
        .stats
        .iter()
        .map(|stat| {
            padded(vec![
                Span::styled(
                    format!("{:>4} ", stat.value),
                    palette.accent().add_modifier(Modifier::BOLD),
                ),
                Span::styled(stat.label.clone(), Style::default().fg(palette.text_secondary)),
            ])
        })
        .collect();
    out.extend(reveal_lines(stats, reveal.progress(4), palette));
    out.push(blank());

    out
}
