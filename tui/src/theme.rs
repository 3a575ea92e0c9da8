//! Color palette and glyphs for the folio TUI.
//!
//! The palette mirrors the classic dark-navy/teal portfolio scheme, with
//! an optional high-contrast override; glyphs degrade to plain ASCII when
//! requested.

use ratatui::style::{Color, Modifier, Style};

use folio_types::ui::UiOptions;

mod colors {
    use super::Color;

    // === Backgrounds (navy) ===
    pub const BG_DARK: Color = Color::Rgb(10, 25, 47);
    pub const BG_PANEL: Color = Color::Rgb(17, 34, 64);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(35, 53, 84);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(204, 214, 246);
    pub const TEXT_SECONDARY: Color = Color::Rgb(136, 146, 176);
    pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 120);

    // === Accent (teal) ===
    pub const ACCENT: Color = Color::Rgb(100, 255, 218);
    pub const ACCENT_DIM: Color = Color::Rgb(60, 155, 135);

    // === Semantic ===
    pub const SUCCESS: Color = Color::Rgb(152, 195, 121);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const WARNING: Color = Color::Rgb(229, 192, 123);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_dim: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            accent: Color::Cyan,
            accent_dim: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
        };
    }
    Palette {
        bg_dark: colors::BG_DARK,
        bg_panel: colors::BG_PANEL,
        bg_highlight: colors::BG_HIGHLIGHT,
        text_primary: colors::TEXT_PRIMARY,
        text_secondary: colors::TEXT_SECONDARY,
        text_muted: colors::TEXT_MUTED,
        accent: colors::ACCENT,
        accent_dim: colors::ACCENT_DIM,
        success: colors::SUCCESS,
        error: colors::ERROR,
        warning: colors::WARNING,
    }
}

impl Palette {
    #[must_use]
    pub fn primary(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    #[must_use]
    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    #[must_use]
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    #[must_use]
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }
}

/// Display glyphs with ASCII fallbacks.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub wave: &'static str,
    pub cursor: &'static str,
    pub bullet: &'static str,
    pub bar_full: &'static str,
    pub bar_empty: &'static str,
    pub scroll_hint: &'static str,
    pub star: &'static str,
    pub dot: &'static str,
    pub rule: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            wave: "o/",
            cursor: "|",
            bullet: "-",
            bar_full: "#",
            bar_empty: "-",
            scroll_hint: "v",
            star: "*",
            dot: "*",
            rule: "-",
        }
    } else {
        Glyphs {
            wave: "👋",
            cursor: "▍",
            bullet: "▸",
            bar_full: "█",
            bar_empty: "░",
            scroll_hint: "▼",
            star: "★",
            dot: "●",
            rule: "─",
        }
    }
}

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
const SPINNER_FRAMES_ASCII: [&str; 4] = ["|", "/", "-", "\\"];

/// Frame for the "Sending..." spinner, indexed by elapsed milliseconds.
#[must_use]
pub fn spinner_frame(elapsed_ms: u128, ascii_only: bool) -> &'static str {
    if ascii_only {
        SPINNER_FRAMES_ASCII[(elapsed_ms / 120) as usize % SPINNER_FRAMES_ASCII.len()]
    } else {
        SPINNER_FRAMES[(elapsed_ms / 80) as usize % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::{glyphs, palette, spinner_frame};
    use folio_types::ui::UiOptions;

    #[test]
    fn ascii_glyphs_are_ascii() {
        let glyphs = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        for glyph in [
            glyphs.wave,
            glyphs.cursor,
            glyphs.bullet,
            glyphs.bar_full,
            glyphs.bar_empty,
            glyphs.scroll_hint,
            glyphs.star,
            glyphs.dot,
            glyphs.rule,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?} is not ASCII");
        }
    }

    #[test]
    fn high_contrast_flips_background() {
        let normal = palette(UiOptions::default());
        let high = palette(UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        });
        assert_ne!(normal.bg_dark, high.bg_dark);
    }

    #[test]
    fn spinner_cycles() {
        assert_ne!(spinner_frame(0, false), spinner_frame(80, false));
        assert_eq!(spinner_frame(0, true), spinner_frame(480, true));
    }
}
