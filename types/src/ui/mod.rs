//! UI state types for the page.
//!
//! Pure data types with no IO, no async, no ratatui dependency. Owned by
//! the engine, read by the rendering layer.

mod animation;
mod form;
mod reveal;
mod scroll;
mod typewriter;
mod view_state;

pub use animation::{AnimPhase, EffectTimer, ease_out_cubic, normalized_progress};
pub use form::{ContactField, ContactForm, SubmitStatus};
pub use reveal::{RevealDecision, RevealError, RevealGroup, RevealPhase, RevealSettings};
pub use scroll::ScrollState;
pub use typewriter::{Typewriter, TypewriterError, TypewriterTiming, TypingMode};
pub use view_state::{SectionId, UiOptions};
