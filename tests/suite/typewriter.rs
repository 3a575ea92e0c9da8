//! Typewriter contract tests: the tick schedule, the cycle invariants,
//! and the cancellable loop around the state machine.

use std::time::Duration;

use folio_engine::spawn_typewriter;
use folio_types::ui::{TypewriterTiming, TypingMode};

use crate::common::typewriter;

#[test]
fn unbounded_ticks_hold_the_prefix_invariant() {
    let mut tw = typewriter(&["Full Stack Developer", "MERN Stack Developer", "Problem Solver"]);

    for _ in 0..10_000 {
        tw.advance();
        assert!(tw.current_index() < 3);
        assert!(tw.active_phrase().starts_with(tw.displayed()));
        assert!(tw.displayed().len() <= tw.active_phrase().len());
    }
}

#[test]
fn go_phrase_follows_the_specified_schedule() {
    let timing = TypewriterTiming::default();
    let mut tw = typewriter(&["Go", "Rust"]);

    let expected = [
        ("G", TypingMode::Typing, timing.type_delay()),
        ("Go", TypingMode::Pausing, timing.pause()),
        ("Go", TypingMode::Deleting, timing.delete_delay()),
        ("G", TypingMode::Deleting, timing.delete_delay()),
        ("", TypingMode::Typing, timing.type_delay()),
    ];

    for (text, mode, delay) in expected {
        assert_eq!(tw.advance(), delay);
        assert_eq!(tw.displayed(), text);
        assert_eq!(tw.mode(), mode);
    }
    assert_eq!(tw.current_index(), 1);
}

#[test]
fn two_phrase_cycle_wraps_the_index() {
    let mut tw = typewriter(&["A", "B"]);

    // "A": type (pause delay), pause step, delete-to-empty.
    for _ in 0..3 {
        tw.advance();
    }
    assert_eq!(tw.current_index(), 1);

    for _ in 0..3 {
        tw.advance();
    }
    assert_eq!(tw.current_index(), 0);
}

#[tokio::test(start_paused = true)]
async fn loop_publishes_each_tick_and_stops_cleanly() {
    let (handle, rx) = spawn_typewriter(typewriter(&["Hi"]));

    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(*rx.borrow(), "H");

    tokio::time::sleep(Duration::from_millis(155)).await;
    assert_eq!(*rx.borrow(), "Hi");

    handle.stop();
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(*rx.borrow(), "Hi", "no tick may fire after stop()");
}
