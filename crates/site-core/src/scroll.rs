/// Vertical extent of one page section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f32,
    pub height: f32,
}

/// Scroll progress as a percentage of the scrollable range. The divisor is
/// guarded to 1 when the document is no taller than the viewport.
pub fn progress_percent(scroll_top: f32, doc_height: f32, viewport_height: f32) -> f32 {
    let range = doc_height - viewport_height;
    let range = if range > 0.0 { range } else { 1.0 };
    scroll_top / range * 100.0
}

/// Reveal predicate: true once any part of `[top, bottom]` overlaps the
/// viewport's vertical span. The one-way latch lives with the caller.
#[inline]
pub fn intersects_viewport(top: f32, bottom: f32, viewport_height: f32) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Section under the viewport's vertical midpoint, if any. `None` means the
/// caller keeps whatever highlight it already had.
pub fn active_section(
    scroll_top: f32,
    viewport_height: f32,
    sections: &[SectionSpan],
) -> Option<usize> {
    let midpoint = scroll_top + viewport_height / 2.0;
    sections
        .iter()
        .position(|s| midpoint >= s.top && midpoint < s.top + s.height)
}
