use crate::constants::DEFAULT_TRACK_GAP;

/// Measured geometry of a horizontal track: every slide is the same width,
/// separated by `gap`, inside a container of `container_width`. All logical px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pub slide_width: f32,
    pub gap: f32,
    pub slide_count: usize,
    pub container_width: f32,
}

impl TrackGeometry {
    /// Horizontal footprint of one slide including its trailing gap.
    #[inline]
    pub fn slide_outer(&self) -> f32 {
        self.slide_width + self.gap
    }

    /// Largest useful translation; past this the track's tail would detach
    /// from the container's right edge.
    #[inline]
    pub fn max_translate(&self) -> f32 {
        (self.slide_outer() * self.slide_count as f32 - self.container_width).max(0.0)
    }
}

/// Translation (positive px, applied as `translateX(-offset)`) that centers
/// slide `index` in the container, clamped to `[0, max_translate]`.
pub fn compute_offset(index: usize, geom: &TrackGeometry) -> f32 {
    let outer = geom.slide_outer();
    let target = index as f32 * outer - (geom.container_width - outer) / 2.0;
    target.clamp(0.0, geom.max_translate())
}

/// Index targeted by the center-middle mode (the "experience" track).
#[inline]
pub fn middle_index(slide_count: usize) -> usize {
    slide_count / 2
}

/// Unclamped transform used while a drag is live, so the track follows the
/// pointer 1:1 and may overshoot the ends.
#[inline]
pub fn drag_offset(index: usize, slide_outer: f32, delta_x: f32) -> f32 {
    -(index as f32) * slide_outer + delta_x
}

/// Parse a computed-style length such as `"18px"`, falling back to the
/// default track gap when the value is missing or malformed.
pub fn parse_gap_px(raw: &str) -> f32 {
    raw.trim()
        .trim_end_matches("px")
        .parse::<f32>()
        .unwrap_or(DEFAULT_TRACK_GAP)
}

/// User-driven position of the primary track. Indices saturate at the ends;
/// they never wrap.
#[derive(Clone, Copy, Debug, Default)]
pub struct CarouselState {
    pub index: usize,
}

impl CarouselState {
    /// Step toward the last slide; a no-op when already there (or empty).
    pub fn next(&mut self, slide_count: usize) {
        if slide_count == 0 {
            return;
        }
        self.index = (self.index + 1).min(slide_count - 1);
    }

    /// Step toward the first slide; a no-op at index 0.
    pub fn prev(&mut self, _slide_count: usize) {
        self.index = self.index.saturating_sub(1);
    }

    /// Pull the index back in range after the slide set shrank.
    pub fn clamp_to(&mut self, slide_count: usize) {
        if slide_count == 0 {
            self.index = 0;
        } else if self.index > slide_count - 1 {
            self.index = slide_count - 1;
        }
    }
}
