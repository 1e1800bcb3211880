// Host-side tests for the swipe state machine: the 40px commit threshold,
// snap-back, cancellation, and the last-pointer-down-wins rule.

use site_core::{SwipeCommit, SwipeTracker};

#[test]
fn short_drag_snaps_back_without_commit() {
    // 39px is under the threshold; release must not navigate
    let mut t = SwipeTracker::default();
    t.begin(100.0);
    assert_eq!(t.drag(139.0), Some(39.0));
    assert_eq!(t.release(), None);
    assert!(!t.is_active());
}

#[test]
fn threshold_is_strictly_greater_than_40() {
    let mut t = SwipeTracker::default();
    t.begin(0.0);
    t.drag(-40.0);
    assert_eq!(t.release(), None);
}

#[test]
fn leftward_drag_past_threshold_commits_next_once() {
    let mut t = SwipeTracker::default();
    t.begin(200.0);
    t.drag(159.0); // -41px
    assert_eq!(t.release(), Some(SwipeCommit::Next));
    // The gesture is consumed; a stray second release does nothing
    assert_eq!(t.release(), None);
}

#[test]
fn rightward_drag_past_threshold_commits_prev() {
    let mut t = SwipeTracker::default();
    t.begin(50.0);
    t.drag(120.0);
    assert_eq!(t.release(), Some(SwipeCommit::Prev));
}

#[test]
fn cancel_discards_even_a_long_drag() {
    let mut t = SwipeTracker::default();
    t.begin(0.0);
    t.drag(-300.0);
    t.cancel();
    assert!(!t.is_active());
    assert_eq!(t.release(), None);
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut t = SwipeTracker::default();
    assert_eq!(t.drag(500.0), None);
    assert_eq!(t.release(), None);
}

#[test]
fn second_pointer_down_restarts_the_gesture() {
    // Last pointer-down wins: the delta is measured from the newest start
    let mut t = SwipeTracker::default();
    t.begin(100.0);
    t.drag(300.0);
    t.begin(400.0);
    assert_eq!(t.delta_x(), 0.0);
    assert_eq!(t.drag(390.0), Some(-10.0));
    assert_eq!(t.release(), None);
}
