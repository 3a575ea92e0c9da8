//! Contact section: the message form, direct channels and page footer.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use folio_engine::{App, InputMode};
use folio_types::ui::{ContactField, SectionId, SubmitStatus};

use super::{blank, padded, padded_str, section_header, text_width};
use crate::effects::reveal_lines;
use crate::format::wrap_plain;
use crate::theme::{Glyphs, Palette, spinner_frame};

pub(crate) fn lines(
    app: &App,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let reveal = app.reveal(SectionId::Contact);
    let contact = &app.content().contact;
    let wrap_to = text_width(width);
    let mut out = Vec::new();

    // 0: header
    out.extend(reveal_lines(
        section_header(SectionId::Contact, "Let's Connect", width, palette, glyphs),
        reveal.progress(0),
        palette,
    ));

    // 1: subtitle
    let subtitle: Vec<Line<'static>> = wrap_plain(&contact.subtitle, wrap_to)
        .into_iter()
        .map(|line| padded_str(line, palette.secondary()))
        .collect();
    out.extend(reveal_lines(subtitle, reveal.progress(1), palette));
    out.push(blank());

    // 2: the form
    out.extend(reveal_lines(
        form_lines(app, wrap_to, palette, glyphs),
        reveal.progress(2),
        palette,
    ));
    out.push(blank());

    // 3: direct channels
    let mut channels: Vec<Line<'static>> =
        vec![padded_str("Get In Touch", palette.heading())];
    for channel in &contact.channels {
        let mut spans = vec![
            Span::styled(format!("{} ", glyphs.bullet), palette.accent()),
            Span::styled(format!("{:<10}", channel.label), palette.primary()),
            Span::styled(channel.value.clone(), palette.secondary()),
        ];
        if let Some(url) = &channel.url {
            spans.push(Span::styled(format!("  ({url})"), palette.muted()));
        }
        channels.push(padded(spans));
    }
    if let Some(availability) = &contact.availability {
        channels.push(blank());
        channels.push(padded(vec![
            Span::styled(format!("{} ", glyphs.dot), palette.accent()),
            Span::styled(availability.clone(), palette.accent()),
        ]));
    }
    out.extend(reveal_lines(channels, reveal.progress(3), palette));
    out.push(blank());

    // 4: footer
    let mut footer: Vec<Line<'static>> = vec![padded_str(
        glyphs.rule.repeat(usize::from(wrap_to)),
        palette.muted(),
    )];
    if let Some(text) = &contact.footer {
        footer.push(padded_str(text.clone(), palette.muted()));
    }
    out.extend(reveal_lines(footer, reveal.progress(4), palette));
    out.push(blank());

    out
}

fn form_lines(
    app: &App,
    wrap_to: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let form = app.form();
    let editing = app.input_mode() == InputMode::Form;
    let mut lines: Vec<Line<'static>> = vec![padded_str("Send Me a Message", palette.heading())];

    if !editing {
        lines.push(padded_str(
            "press c to start typing a message",
            palette.muted(),
        ));
    }
    lines.push(blank());

    for field in ContactField::ALL {
        let focused = editing && form.focus() == field;
        let label_style = if focused {
            palette.accent().add_modifier(Modifier::BOLD)
        } else {
            palette.secondary()
        };
        lines.push(padded_str(field.label(), label_style));

        let value = form.value(field);
        if value.is_empty() {
            let mut spans = vec![
                Span::styled("> ".to_owned(), label_style),
                Span::styled(field.placeholder().to_owned(), palette.muted()),
            ];
            if focused {
                spans.insert(1, Span::styled(glyphs.cursor.to_owned(), palette.accent()));
            }
            lines.push(padded(spans));
        } else {
            // The message field is multiline; everything else is one line.
            let wrapped = wrap_plain(value, wrap_to.saturating_sub(2));
            let last = wrapped.len().saturating_sub(1);
            for (index, text) in wrapped.into_iter().enumerate() {
                let mut spans = vec![
                    Span::styled(
                        if index == 0 { "> " } else { "  " }.to_owned(),
                        label_style,
                    ),
                    Span::styled(text, palette.primary()),
                ];
                if focused && index == last {
                    spans.push(Span::styled(glyphs.cursor.to_owned(), palette.accent()));
                }
                lines.push(padded(spans));
            }
        }
    }
    lines.push(blank());

    match form.status() {
        SubmitStatus::Idle => {}
        SubmitStatus::Sending => {
            lines.push(padded(vec![
                Span::styled(
                    format!(
                        "{} ",
                        spinner_frame(
                            std::time::UNIX_EPOCH
                                .elapsed()
                                .map(|elapsed| elapsed.as_millis())
                                .unwrap_or_default(),
                            app.ui_options().ascii_only
                        )
                    ),
                    palette.accent(),
                ),
                Span::styled("Sending...".to_owned(), palette.secondary()),
            ]));
        }
        SubmitStatus::Sent(message) => {
            lines.push(padded_str(message.clone(), palette.primary().fg(palette.success)));
        }
        SubmitStatus::Failed(message) => {
            lines.push(padded_str(message.clone(), palette.primary().fg(palette.error)));
        }
    }

    let send_style = if form.is_complete() && !form.status().is_sending() {
        palette.accent().add_modifier(Modifier::REVERSED)
    } else {
        palette.muted()
    };
    lines.push(padded_str("[ Send Message ]", send_style));

    lines
}
