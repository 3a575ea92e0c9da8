//! Integration test suite modules.

mod config;
mod contact;
mod reveal;
mod typewriter;
