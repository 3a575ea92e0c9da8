//! Reveal orchestration contract tests: trigger-once, stagger timing,
//! idempotence, and the non-interruptible transitions.

use std::time::Duration;

use folio_types::ui::{RevealDecision, RevealGroup, RevealPhase, RevealSettings};

fn settings(trigger_once: bool) -> RevealSettings {
    RevealSettings {
        stagger: Duration::from_millis(200),
        threshold: 0.2,
        trigger_once,
        transition: Duration::from_millis(100),
    }
}

#[test]
fn trigger_once_element_never_rehides() {
    let mut group = RevealGroup::new(1, settings(true)).unwrap();

    assert_eq!(group.on_visibility_change(0, true, 0.5), RevealDecision::Enter);
    group.advance(Duration::from_millis(100));
    assert_eq!(group.phase(0), RevealPhase::Visible);

    // Scrolled out again: ignored, still visible.
    assert_eq!(group.on_visibility_change(0, false, 0.0), RevealDecision::Ignore);
    assert_eq!(group.phase(0), RevealPhase::Visible);

    // And back in: nothing to do either.
    assert_eq!(group.on_visibility_change(0, true, 0.5), RevealDecision::Ignore);
}

#[test]
fn three_children_stagger_at_200ms_intervals() {
    // All three report intersecting at t=0; reveal starts must land at
    // t = 0, 200 and 400.
    let mut group = RevealGroup::new(3, settings(true)).unwrap();
    for child in 0..3 {
        assert_eq!(group.on_visibility_change(child, true, 1.0), RevealDecision::Enter);
    }

    let started = |group: &RevealGroup, child: usize| group.progress(child) > 0.0;

    group.advance(Duration::from_millis(10)); // t = 10
    assert!(started(&group, 0));
    assert!(!started(&group, 1));
    assert!(!started(&group, 2));

    group.advance(Duration::from_millis(200)); // t = 210
    assert!(started(&group, 1));
    assert!(!started(&group, 2));

    group.advance(Duration::from_millis(200)); // t = 410
    assert!(started(&group, 2));
}

#[test]
fn duplicate_notifications_are_idempotent() {
    let mut group = RevealGroup::new(1, settings(false)).unwrap();

    assert_eq!(group.on_visibility_change(0, true, 1.0), RevealDecision::Enter);
    group.advance(Duration::from_millis(100));
    assert_eq!(group.phase(0), RevealPhase::Visible);

    // The same notification again: no duplicate transition.
    assert_eq!(group.on_visibility_change(0, true, 1.0), RevealDecision::Ignore);
    assert_eq!(group.phase(0), RevealPhase::Visible);
}

#[test]
fn exit_and_reenter_when_trigger_once_is_off() {
    let mut group = RevealGroup::new(1, settings(false)).unwrap();

    group.on_visibility_change(0, true, 1.0);
    group.advance(Duration::from_millis(100));
    assert_eq!(group.on_visibility_change(0, false, 0.0), RevealDecision::Exit);
    group.advance(Duration::from_millis(100));
    assert_eq!(group.phase(0), RevealPhase::Hidden);

    // Scrolls back in: a fresh enter.
    assert_eq!(group.on_visibility_change(0, true, 1.0), RevealDecision::Enter);
}

#[test]
fn reversal_mid_transition_waits_for_completion() {
    let mut group = RevealGroup::new(1, settings(false)).unwrap();

    group.on_visibility_change(0, true, 1.0);
    group.advance(Duration::from_millis(40));
    assert_eq!(group.phase(0), RevealPhase::Entering);

    group.on_visibility_change(0, false, 0.0);
    // Still entering: the transition is not interruptible.
    assert_eq!(group.phase(0), RevealPhase::Entering);

    group.advance(Duration::from_millis(60));
    assert_eq!(group.phase(0), RevealPhase::Exiting);
    group.advance(Duration::from_millis(100));
    assert_eq!(group.phase(0), RevealPhase::Hidden);
}

#[test]
fn below_threshold_intersection_is_not_an_enter() {
    let mut group = RevealGroup::new(1, settings(true)).unwrap();
    assert_eq!(group.on_visibility_change(0, true, 0.19), RevealDecision::Ignore);
    assert_eq!(group.phase(0), RevealPhase::Hidden);
    assert_eq!(group.on_visibility_change(0, true, 0.21), RevealDecision::Enter);
}
