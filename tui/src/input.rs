//! Keyboard handling.
//!
//! Drains the crossterm event queue without blocking (the frame loop
//! polls every tick). Two key maps: page browsing and contact-form
//! editing.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use folio_engine::{App, InputMode};
use folio_types::ui::{ContactField, SectionId};

/// Drain pending input events. Quit requests land on the app state.
pub fn handle_events(app: &mut App) -> Result<()> {
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => match app.input_mode() {
                InputMode::Page => handle_page_key(app, key),
                InputMode::Form => handle_form_key(app, key),
            },
            _ => {}
        }
    }
    Ok(())
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),

        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_section(SectionId::Hero),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_section(SectionId::Contact),

        KeyCode::Tab => app.next_section(),
        KeyCode::BackTab => app.previous_section(),
        KeyCode::Char(digit @ '1'..='5') => {
            if let Some(section) = SectionId::from_digit(digit) {
                app.jump_to_section(section);
            }
        }

        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('t') => app.next_about_tab(),

        KeyCode::Char('c') => app.enter_form(),
        KeyCode::Enter if app.active_section() == SectionId::Contact => app.enter_form(),

        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.request_quit(),
            // Ctrl+Enter sends from anywhere, including the message body.
            KeyCode::Enter => app.submit_contact(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.leave_form(),
        KeyCode::Tab | KeyCode::Down => app.form_mut().focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form_mut().focus_previous(),
        KeyCode::Backspace => app.form_mut().backspace(),
        KeyCode::Enter => {
            // Enter inside the message body inserts a newline; from any
            // other field it sends.
            if app.form().focus() == ContactField::Message {
                app.form_mut().insert_newline();
            } else {
                app.submit_contact();
            }
        }
        KeyCode::Char(c) => app.form_mut().insert_char(c),
        _ => {}
    }
}
