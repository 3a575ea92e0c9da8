//! Typewriter phrase rotation for the hero role line.
//!
//! A single-owner state machine that cycles through a fixed list of
//! phrases, typing and deleting one grapheme per tick. Each [`advance`]
//! call applies exactly one tick and returns the delay the driving timer
//! must wait before the next one; the caller owns scheduling (see the
//! engine's typewriter loop).
//!
//! The pause is asymmetric on purpose: a fully typed phrase holds for the
//! pause delay before deletion begins, but a fully deleted phrase starts
//! typing the next one immediately at the keystroke delay.
//!
//! [`advance`]: Typewriter::advance

use std::time::Duration;

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

use crate::NonEmptyString;

#[derive(Debug, Error)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
    #[error("typewriter delays must be non-zero")]
    ZeroDelay,
}

/// Tick delays for the typing loop.
///
/// Zero delays are rejected at construction: a zero tick would spin the
/// timer loop without ever yielding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    type_delay: Duration,
    delete_delay: Duration,
    pause: Duration,
}

impl TypewriterTiming {
    pub const DEFAULT_TYPE_DELAY: Duration = Duration::from_millis(150);
    pub const DEFAULT_DELETE_DELAY: Duration = Duration::from_millis(50);
    pub const DEFAULT_PAUSE: Duration = Duration::from_millis(2000);

    pub fn new(
        type_delay: Duration,
        delete_delay: Duration,
        pause: Duration,
    ) -> Result<Self, TypewriterError> {
        if type_delay.is_zero() || delete_delay.is_zero() || pause.is_zero() {
            return Err(TypewriterError::ZeroDelay);
        }
        Ok(Self {
            type_delay,
            delete_delay,
            pause,
        })
    }

    #[must_use]
    pub fn type_delay(&self) -> Duration {
        self.type_delay
    }

    #[must_use]
    pub fn delete_delay(&self) -> Duration {
        self.delete_delay
    }

    #[must_use]
    pub fn pause(&self) -> Duration {
        self.pause
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: Self::DEFAULT_TYPE_DELAY,
            delete_delay: Self::DEFAULT_DELETE_DELAY,
            pause: Self::DEFAULT_PAUSE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingMode {
    Typing,
    Pausing,
    Deleting,
}

/// The typewriter state machine.
///
/// Invariants held across every tick:
/// - `current` indexes a valid phrase (the cycle never terminates),
/// - the displayed text is a prefix of the active phrase,
/// - exactly one grapheme is added or removed per tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<NonEmptyString>,
    current: usize,
    displayed: String,
    mode: TypingMode,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Build a typewriter over `phrases`, starting empty in typing mode.
    ///
    /// Rejects an empty phrase list: with no active phrase the tick
    /// contract is undefined.
    pub fn new(
        phrases: Vec<NonEmptyString>,
        timing: TypewriterTiming,
    ) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            current: 0,
            displayed: String::new(),
            mode: TypingMode::Typing,
            timing,
        })
    }

    #[must_use]
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    #[must_use]
    pub fn mode(&self) -> TypingMode {
        self.mode
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The phrase currently being typed or deleted.
    #[must_use]
    pub fn active_phrase(&self) -> &str {
        self.phrases[self.current].as_str()
    }

    #[must_use]
    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    /// Apply one tick and return the delay before the next.
    ///
    /// - `Typing`: append the next grapheme of the active phrase. When the
    ///   text reaches the full phrase, hold in `Pausing` for the pause
    ///   delay; otherwise keep typing at the keystroke delay.
    /// - `Pausing`: no text change; move to `Deleting` at the deletion
    ///   delay. This step fires even for a single-grapheme phrase.
    /// - `Deleting`: drop the last grapheme. When the text empties, wrap
    ///   to the next phrase and start typing at the keystroke delay (no
    ///   pause on the empty boundary); otherwise keep deleting.
    pub fn advance(&mut self) -> Duration {
        match self.mode {
            TypingMode::Typing => {
                let phrase = self.phrases[self.current].as_str();
                if let Some(grapheme) = phrase[self.displayed.len()..].graphemes(true).next() {
                    self.displayed.push_str(grapheme);
                }
                if self.displayed.len() == phrase.len() {
                    self.mode = TypingMode::Pausing;
                    self.timing.pause
                } else {
                    self.timing.type_delay
                }
            }
            TypingMode::Pausing => {
                self.mode = TypingMode::Deleting;
                self.timing.delete_delay
            }
            TypingMode::Deleting => {
                if let Some((idx, _)) = self.displayed.grapheme_indices(true).next_back() {
                    self.displayed.truncate(idx);
                }
                if self.displayed.is_empty() {
                    self.mode = TypingMode::Typing;
                    self.current = (self.current + 1) % self.phrases.len();
                    self.timing.type_delay
                } else {
                    self.timing.delete_delay
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Typewriter, TypewriterError, TypewriterTiming, TypingMode};
    use crate::NonEmptyString;
    use std::time::Duration;

    fn phrases(raw: &[&str]) -> Vec<NonEmptyString> {
        raw.iter()
            .map(|p| NonEmptyString::new(*p).unwrap())
            .collect()
    }

    fn typewriter(raw: &[&str]) -> Typewriter {
        Typewriter::new(phrases(raw), TypewriterTiming::default()).unwrap()
    }

    #[test]
    fn rejects_empty_phrase_list() {
        let result = Typewriter::new(Vec::new(), TypewriterTiming::default());
        assert!(matches!(result, Err(TypewriterError::NoPhrases)));
    }

    #[test]
    fn rejects_zero_delays() {
        let result = TypewriterTiming::new(
            Duration::ZERO,
            Duration::from_millis(50),
            Duration::from_millis(2000),
        );
        assert!(matches!(result, Err(TypewriterError::ZeroDelay)));
    }

    #[test]
    fn full_cycle_schedule_for_two_letter_phrase() {
        let timing = TypewriterTiming::default();
        let mut tw = typewriter(&["Go", "Rust"]);

        // Type "G".
        assert_eq!(tw.advance(), timing.type_delay());
        assert_eq!(tw.displayed(), "G");
        assert_eq!(tw.mode(), TypingMode::Typing);

        // Type "o" - full phrase, pause before deleting.
        assert_eq!(tw.advance(), timing.pause());
        assert_eq!(tw.displayed(), "Go");
        assert_eq!(tw.mode(), TypingMode::Pausing);

        // Pause step: no text change.
        assert_eq!(tw.advance(), timing.delete_delay());
        assert_eq!(tw.displayed(), "Go");
        assert_eq!(tw.mode(), TypingMode::Deleting);

        // Delete "o".
        assert_eq!(tw.advance(), timing.delete_delay());
        assert_eq!(tw.displayed(), "G");
        assert_eq!(tw.mode(), TypingMode::Deleting);

        // Delete "G" - empty, advance to next phrase, no pause.
        assert_eq!(tw.advance(), timing.type_delay());
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.mode(), TypingMode::Typing);
        assert_eq!(tw.current_index(), 1);
    }

    #[test]
    fn index_wraps_after_last_phrase() {
        let mut tw = typewriter(&["A", "B"]);

        // One full cycle of "A": type, pause, delete.
        tw.advance();
        tw.advance();
        tw.advance();
        assert_eq!(tw.current_index(), 1);
        assert_eq!(tw.displayed(), "");

        // One full cycle of "B" wraps back to 0.
        tw.advance();
        tw.advance();
        tw.advance();
        assert_eq!(tw.current_index(), 0);
    }

    #[test]
    fn single_grapheme_phrase_still_pauses() {
        let timing = TypewriterTiming::default();
        let mut tw = typewriter(&["A"]);

        // The only grapheme completes the phrase: full pause applies.
        assert_eq!(tw.advance(), timing.pause());
        assert_eq!(tw.mode(), TypingMode::Pausing);
    }

    #[test]
    fn displayed_is_always_a_prefix_and_index_in_bounds() {
        let mut tw = typewriter(&["Full Stack Developer", "Déjà vu", "問題解決"]);

        for _ in 0..1000 {
            tw.advance();
            assert!(tw.current_index() < 3);
            let phrase = tw.active_phrase();
            assert!(
                phrase.starts_with(tw.displayed()),
                "{:?} is not a prefix of {:?}",
                tw.displayed(),
                phrase
            );
            assert!(tw.displayed().len() <= phrase.len());
        }
    }

    #[test]
    fn ticks_change_at_most_one_grapheme() {
        use unicode_segmentation::UnicodeSegmentation;

        let mut tw = typewriter(&["naïve", "ok"]);
        let mut prev = tw.displayed().graphemes(true).count();

        for _ in 0..200 {
            tw.advance();
            let now = tw.displayed().graphemes(true).count();
            assert!(
                prev.abs_diff(now) <= 1,
                "tick changed more than one grapheme: {prev} -> {now}"
            );
            prev = now;
        }
    }
}
