//! Application engine for folio - state machine and orchestration.
//!
//! This crate owns all mutable page state without any TUI dependency:
//!
//! - [`App`] - scroll, reveals, filters, the contact form, submit
//!   lifecycle; mutated only from the frame loop.
//! - [`spawn_typewriter`] - the cancellable timer loop driving the hero
//!   role line (one pending sleep at a time, watch-published text).
//! - [`SectionStrip`] - viewport intersection over the page strip, the
//!   terminal analogue of a visibility observer.

mod app;
mod typewriter_loop;
mod visibility;

pub use app::{
    App, EngineError, FAILURE_MESSAGE, INCOMPLETE_MESSAGE, InputMode, SUCCESS_MESSAGE, child_count,
};
pub use typewriter_loop::{TypewriterHandle, spawn_typewriter};
pub use visibility::{SectionStrip, Visibility};

// Re-export the layers below so the render layer and binary can depend on
// this crate alone for shared types.
pub use folio_config::{AppConfig, ConfigError, FolioConfig};
pub use folio_types::content;
pub use folio_types::ui;
pub use folio_types::{EmptyStringError, NonEmptyString, truncate_with_ellipsis};
