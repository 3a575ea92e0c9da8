//! Viewport reveal orchestration for section content.
//!
//! Each revealable element owns a small state machine:
//!
//! ```text
//! Hidden -> Entering -> Visible
//!   ^                      |
//!   +---- Exiting <--------+   (only when trigger_once is false)
//! ```
//!
//! `Entering` and `Exiting` run on fixed-duration timers and are not
//! interruptible: an opposite-direction decision arriving mid-transition
//! is queued and applied when the running transition completes. Within a
//! group, the k-th child starts entering `k * stagger` after its own
//! `Enter` decision fires, so siblings animate in sequence.

use std::time::Duration;

use thiserror::Error;

use super::animation::EffectTimer;

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("visibility threshold must be within 0.0..=1.0 (got {0})")]
    ThresholdOutOfRange(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Entering,
    Visible,
    Exiting,
}

/// Outcome of one visibility notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDecision {
    Enter,
    Exit,
    Ignore,
}

/// Group-wide reveal parameters, from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSettings {
    pub stagger: Duration,
    /// Fraction of the element's area that must be inside the viewport
    /// before it counts as entered.
    pub threshold: f32,
    /// Once entered, never re-hide.
    pub trigger_once: bool,
    /// Duration of the Entering/Exiting transition.
    pub transition: Duration,
}

impl RevealSettings {
    pub fn validated(self) -> Result<Self, RevealError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(RevealError::ThresholdOutOfRange(self.threshold));
        }
        Ok(self)
    }
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(200),
            threshold: 0.1,
            trigger_once: true,
            transition: Duration::from_millis(400),
        }
    }
}

#[derive(Debug, Clone)]
struct RevealChild {
    phase: RevealPhase,
    has_entered: bool,
    /// Remaining stagger delay before a granted Enter starts animating.
    start_delay: Duration,
    timer: EffectTimer,
    /// Opposite-direction decision waiting for the running transition.
    queued: Option<RevealDecision>,
}

impl RevealChild {
    fn new() -> Self {
        Self {
            phase: RevealPhase::Hidden,
            has_entered: false,
            start_delay: Duration::ZERO,
            timer: EffectTimer::new(Duration::ZERO),
            queued: None,
        }
    }
}

/// Reveal state for one group of sibling elements.
#[derive(Debug, Clone)]
pub struct RevealGroup {
    children: Vec<RevealChild>,
    settings: RevealSettings,
}

impl RevealGroup {
    /// Build a group of `len` hidden children.
    pub fn new(len: usize, settings: RevealSettings) -> Result<Self, RevealError> {
        let settings = settings.validated()?;
        Ok(Self {
            children: vec![RevealChild::new(); len],
            settings,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> RevealSettings {
        self.settings
    }

    #[must_use]
    pub fn phase(&self, index: usize) -> RevealPhase {
        self.children[index].phase
    }

    /// Reveal progress of one child in `[0, 1]`: 0 while hidden or still
    /// waiting out its stagger delay, 1 once fully visible, reversed
    /// while exiting.
    #[must_use]
    pub fn progress(&self, index: usize) -> f32 {
        let child = &self.children[index];
        match child.phase {
            RevealPhase::Hidden => 0.0,
            RevealPhase::Visible => 1.0,
            RevealPhase::Entering => {
                if child.start_delay.is_zero() {
                    child.timer.progress()
                } else {
                    0.0
                }
            }
            RevealPhase::Exiting => 1.0 - child.timer.progress(),
        }
    }

    /// True while any child is mid-transition (the render loop keeps
    /// redrawing until this settles).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.children.iter().any(|child| {
            matches!(child.phase, RevealPhase::Entering | RevealPhase::Exiting)
                || child.queued.is_some()
        })
    }

    /// Apply one visibility notification for the `index`-th child.
    ///
    /// The same notification is fanned out to every child of a group when
    /// its section scrolls in or out; idempotent notifications (already
    /// in or heading to the requested state) return `Ignore`.
    pub fn on_visibility_change(
        &mut self,
        index: usize,
        is_intersecting: bool,
        ratio: f32,
    ) -> RevealDecision {
        let stagger = self.settings.stagger;
        let threshold = self.settings.threshold;
        let trigger_once = self.settings.trigger_once;
        let transition = self.settings.transition;
        let child = &mut self.children[index];

        if is_intersecting && ratio >= threshold {
            match child.phase {
                RevealPhase::Hidden => {
                    child.phase = RevealPhase::Entering;
                    child.has_entered = true;
                    child.start_delay = stagger.saturating_mul(index as u32);
                    child.timer = EffectTimer::new(transition);
                    child.queued = None;
                    RevealDecision::Enter
                }
                RevealPhase::Exiting => {
                    // Non-interruptible: finish exiting, then re-enter.
                    child.queued = Some(RevealDecision::Enter);
                    RevealDecision::Enter
                }
                RevealPhase::Entering | RevealPhase::Visible => RevealDecision::Ignore,
            }
        } else if !is_intersecting {
            if trigger_once && child.has_entered {
                return RevealDecision::Ignore;
            }
            match child.phase {
                RevealPhase::Visible => {
                    child.phase = RevealPhase::Exiting;
                    child.timer = EffectTimer::new(transition);
                    child.queued = None;
                    RevealDecision::Exit
                }
                RevealPhase::Entering => {
                    child.queued = Some(RevealDecision::Exit);
                    RevealDecision::Exit
                }
                RevealPhase::Hidden | RevealPhase::Exiting => RevealDecision::Ignore,
            }
        } else {
            // Intersecting but below the threshold: no decision either way.
            RevealDecision::Ignore
        }
    }

    /// Advance all timers by the frame delta, completing transitions and
    /// starting queued reversals.
    pub fn advance(&mut self, delta: Duration) {
        let transition = self.settings.transition;
        for child in &mut self.children {
            match child.phase {
                RevealPhase::Entering => {
                    let mut remaining = delta;
                    if !child.start_delay.is_zero() {
                        if remaining < child.start_delay {
                            child.start_delay -= remaining;
                            continue;
                        }
                        remaining -= child.start_delay;
                        child.start_delay = Duration::ZERO;
                    }
                    child.timer.advance(remaining);
                    if child.timer.is_finished() {
                        child.phase = RevealPhase::Visible;
                        if child.queued.take() == Some(RevealDecision::Exit) {
                            child.phase = RevealPhase::Exiting;
                            child.timer = EffectTimer::new(transition);
                        }
                    }
                }
                RevealPhase::Exiting => {
                    child.timer.advance(delta);
                    if child.timer.is_finished() {
                        child.phase = RevealPhase::Hidden;
                        if child.queued.take() == Some(RevealDecision::Enter) {
                            // The stagger delay elapsed during the exit.
                            child.phase = RevealPhase::Entering;
                            child.start_delay = Duration::ZERO;
                            child.timer = EffectTimer::new(transition);
                        }
                    }
                }
                RevealPhase::Hidden | RevealPhase::Visible => {}
            }
        }
    }

    /// Jump every child straight to `Visible` (reduced motion).
    pub fn show_all(&mut self) {
        for child in &mut self.children {
            child.phase = RevealPhase::Visible;
            child.has_entered = true;
            child.start_delay = Duration::ZERO;
            child.queued = None;
        }
    }
}
