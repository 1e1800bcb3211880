// Host-side tests for the carousel positioner: offset math, saturating
// navigation, middle-centering, and style parsing.

use site_core::{
    compute_offset, drag_offset, middle_index, parse_gap_px, CarouselState, TrackGeometry,
};

fn geom(slide_width: f32, gap: f32, slide_count: usize, container_width: f32) -> TrackGeometry {
    TrackGeometry {
        slide_width,
        gap,
        slide_count,
        container_width,
    }
}

#[test]
fn worked_scenario_from_layout() {
    // 5 slides of 200px, gap 18, container 600, index 2:
    // clamp(2*218 - (600-218)/2, 0, max) = clamp(436 - 191, ...) = 245
    let g = geom(200.0, 18.0, 5, 600.0);
    assert_eq!(compute_offset(2, &g), 245.0);
}

#[test]
fn offset_is_idempotent_and_in_range() {
    let g = geom(200.0, 18.0, 5, 600.0);
    for index in 0..5 {
        let a = compute_offset(index, &g);
        let b = compute_offset(index, &g);
        assert_eq!(a, b);
        assert!(a >= 0.0 && a <= g.max_translate());
    }
}

#[test]
fn early_slides_clamp_to_zero() {
    // Centering slide 0 would need a negative translation; clamp wins
    let g = geom(200.0, 18.0, 5, 600.0);
    assert_eq!(compute_offset(0, &g), 0.0);
}

#[test]
fn late_slides_clamp_to_max_translate() {
    let g = geom(200.0, 18.0, 5, 600.0);
    // max = 5*218 - 600 = 490; centering slide 4 would ask for more
    assert_eq!(g.max_translate(), 490.0);
    assert_eq!(compute_offset(4, &g), 490.0);
}

#[test]
fn short_track_never_translates() {
    // Track narrower than the container: max_translate floors at 0
    let g = geom(100.0, 10.0, 2, 900.0);
    assert_eq!(g.max_translate(), 0.0);
    for index in 0..2 {
        assert_eq!(compute_offset(index, &g), 0.0);
    }
}

#[test]
fn middle_index_floors() {
    assert_eq!(middle_index(5), 2);
    assert_eq!(middle_index(4), 2);
    assert_eq!(middle_index(1), 0);
    assert_eq!(middle_index(0), 0);
}

#[test]
fn navigation_saturates_at_both_ends() {
    let mut state = CarouselState::default();
    state.prev(5);
    assert_eq!(state.index, 0); // no-op at the start
    for _ in 0..10 {
        state.next(5);
    }
    assert_eq!(state.index, 4); // pinned at the last slide
    state.next(5);
    assert_eq!(state.index, 4);
}

#[test]
fn navigation_on_empty_track_is_inert() {
    let mut state = CarouselState::default();
    state.next(0);
    state.prev(0);
    assert_eq!(state.index, 0);
}

#[test]
fn clamp_to_pulls_index_down_after_shrink() {
    let mut state = CarouselState { index: 4 };
    state.clamp_to(3);
    assert_eq!(state.index, 2);
    state.clamp_to(0);
    assert_eq!(state.index, 0);
}

#[test]
fn drag_offset_follows_pointer_unclamped() {
    // index 2, outer 218: resting at -436, a +500 drag overshoots the start
    assert_eq!(drag_offset(2, 218.0, 0.0), -436.0);
    assert_eq!(drag_offset(2, 218.0, 500.0), 64.0);
    assert_eq!(drag_offset(0, 218.0, -30.0), -30.0);
}

#[test]
fn gap_parsing_handles_computed_style_values() {
    assert_eq!(parse_gap_px("18px"), 18.0);
    assert_eq!(parse_gap_px("7.5px"), 7.5);
    assert_eq!(parse_gap_px(" 24px "), 24.0);
    // "normal" and empty fall back to the default
    assert_eq!(parse_gap_px("normal"), 18.0);
    assert_eq!(parse_gap_px(""), 18.0);
}
