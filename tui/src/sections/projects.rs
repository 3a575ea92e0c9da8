//! Project gallery: filter bar plus one card per project.
//!
//! Cards keep their reveal child index from the unfiltered project list,
//! so toggling the filter does not reshuffle reveal state.

use ratatui::text::{Line, Span};

use folio_engine::App;
use folio_types::content::ProjectFilter;
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
    let reveal = app.reveal(SectionId::Projects);
    let wrap_to = text_width(width);
    let mut out = Vec::new();

    // 0: header
    out.extend(reveal_lines(
        section_header(SectionId::Projects, "Things I've Built", width, palette, glyphs),
        reveal.progress(0),
        palette,
    ));

    // 1: filter bar
    let mut filter_spans: Vec<Span<'static>> =
        vec![Span::styled("filter: ".to_owned(), palette.muted())];
    let mut option = ProjectFilter::All;
    for position in 0..3 {
        if position > 0 {
            filter_spans.push(Span::raw("  "));
        }
        if option == app.filter() {
            filter_spans.push(Span::styled(format!("[ {} ]", option.label()), palette.accent()));
        } else {
            filter_spans.push(Span::styled(option.label().to_owned(), palette.secondary()));
        }
        option = option.next();
    }
    filter_spans.push(Span::styled("   (f to cycle)".to_owned(), palette.muted()));
    out.extend(reveal_lines(
        vec![padded(filter_spans)],
        reveal.progress(1),
        palette,
    ));
    out.push(blank());

    // 2..: one card per project, skipping filtered-out entries entirely.
    for (index, project) in app.content().projects.iter().enumerate() {
        if !app.filter().matches(project) {
            continue;
        }

        let mut card: Vec<Line<'static>> = Vec::new();

        let mut title = vec![
            Span::styled(format!("{} ", glyphs.bullet), palette.accent()),
            Span::styled(project.title.clone(), palette.heading()),
        ];
        if project.featured {
            title.push(Span::styled(format!(" {}", glyphs.star), palette.accent()));
        }
        card.push(padded(title));

        let mut meta = project.category.label().to_owned();
        for tech in &project.tech {
            meta.push_str(" · ");
            meta.push_str(tech);
        }
        card.push(padded_str(format!("  {meta}"), palette.muted()));

        card.extend(
            wrap_plain(&project.description, wrap_to.saturating_sub(2))
                .into_iter()
                .map(|line| padded_str(format!("  {line}"), palette.secondary())),
        );

        card.push(padded_str(
            format!("  repo: {}", project.repo_url),
            palette.muted(),
        ));
        if let Some(live) = &project.live_url {
            card.push(padded_str(format!("  live: {live}"), palette.muted()));
        }
        card.push(blank());

        out.extend(reveal_lines(card, reveal.progress(2 + index), palette));
    }

    out.push(blank());
    out
}
