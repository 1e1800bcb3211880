// Host-side tests for scroll-derived state: progress percentage, the reveal
// predicate, and active-section lookup.

use site_core::{active_section, intersects_viewport, progress_percent, SectionSpan};

#[test]
fn progress_reaches_100_at_document_bottom() {
    // Page of 2000px, viewport 1000px, scrolled to the end
    assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), 100.0);
}

#[test]
fn progress_starts_at_zero() {
    assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
}

#[test]
fn progress_guards_divisor_when_page_fits_viewport() {
    // doc == viewport would divide by zero; the range is pinned to 1
    assert_eq!(progress_percent(0.0, 1000.0, 1000.0), 0.0);
    assert_eq!(progress_percent(0.0, 800.0, 1000.0), 0.0);
}

#[test]
fn reveal_predicate_matches_viewport_overlap() {
    let vh = 900.0;
    assert!(intersects_viewport(100.0, 400.0, vh)); // fully inside
    assert!(intersects_viewport(-50.0, 10.0, vh)); // straddles the top
    assert!(intersects_viewport(890.0, 1200.0, vh)); // straddles the bottom
    assert!(!intersects_viewport(900.0, 1300.0, vh)); // below the fold
    assert!(!intersects_viewport(-500.0, -10.0, vh)); // scrolled past
}

#[test]
fn active_section_uses_viewport_midpoint() {
    let sections = [
        SectionSpan { top: 0.0, height: 600.0 },
        SectionSpan { top: 600.0, height: 800.0 },
        SectionSpan { top: 1400.0, height: 600.0 },
    ];
    // viewport 1000px -> midpoint = scroll + 500
    assert_eq!(active_section(0.0, 1000.0, &sections), Some(0));
    assert_eq!(active_section(200.0, 1000.0, &sections), Some(1));
    assert_eq!(active_section(1200.0, 1000.0, &sections), Some(2));
}

#[test]
fn section_bounds_are_half_open() {
    let sections = [
        SectionSpan { top: 0.0, height: 500.0 },
        SectionSpan { top: 500.0, height: 500.0 },
    ];
    // midpoint exactly on the seam belongs to the lower section
    assert_eq!(active_section(0.0, 1000.0, &sections), Some(1));
}

#[test]
fn no_match_leaves_highlight_untouched() {
    // A gap between sections yields None; the caller keeps the old state
    let sections = [SectionSpan { top: 2000.0, height: 500.0 }];
    assert_eq!(active_section(0.0, 1000.0, &sections), None);
    assert_eq!(active_section(0.0, 1000.0, &[]), None);
}
