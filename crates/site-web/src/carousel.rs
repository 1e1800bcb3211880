use crate::dom;
use site_core::{
    compute_offset, middle_index, parse_gap_px, CarouselState, TrackGeometry, NARROW_LAYOUT_MAX,
};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM-facing side of one carousel track. Measurement is re-done on demand
/// so dynamic slide content and resizes are always reflected.
pub struct TrackDom {
    track: web::HtmlElement,
    container: Option<web::Element>,
    slides: Vec<web::Element>,
    pub state: CarouselState,
}

impl TrackDom {
    pub fn attach(document: &web::Document, selector: &str) -> Option<Self> {
        let track: web::HtmlElement = document
            .query_selector(selector)
            .ok()??
            .dyn_into()
            .ok()?;
        let mut t = Self {
            container: track.parent_element(),
            track,
            slides: Vec::new(),
            state: CarouselState::default(),
        };
        t.refresh_slides();
        Some(t)
    }

    /// Re-read the live child list and pull the index back in range.
    pub fn refresh_slides(&mut self) {
        self.slides.clear();
        let children = self.track.children();
        for i in 0..children.length() {
            if let Some(el) = children.item(i) {
                self.slides.push(el);
            }
        }
        self.state.clamp_to(self.slides.len());
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn gap(&self) -> f32 {
        let raw = dom::computed_style_value(&self.track, "gap")
            .or_else(|| dom::computed_style_value(&self.track, "grid-gap"))
            .unwrap_or_default();
        parse_gap_px(&raw)
    }

    fn geometry(&self) -> Option<TrackGeometry> {
        let first = self.slides.first()?;
        let slide_width = first.get_bounding_client_rect().width() as f32;
        let container_width = self
            .container
            .as_ref()
            .map(|c| c.client_width() as f32)
            .unwrap_or_else(dom::viewport_width);
        Some(TrackGeometry {
            slide_width,
            gap: self.gap(),
            slide_count: self.slides.len(),
            container_width,
        })
    }

    /// Slide footprint (width + gap) used by the free-drag transform.
    pub fn slide_outer(&self) -> Option<f32> {
        self.geometry().map(|g| g.slide_outer())
    }

    /// Position the track on the current index, or clear the transform below
    /// the narrow-layout breakpoint (styling takes over there).
    pub fn apply_index(&self) {
        self.apply(self.state.index);
    }

    /// Center-middle mode for the experience track: ignores navigation and
    /// always targets the middle slide.
    pub fn apply_centered(&self) {
        self.apply(middle_index(self.slides.len()));
    }

    fn apply(&self, index: usize) {
        if self.slides.is_empty() {
            return;
        }
        if dom::viewport_width() <= NARROW_LAYOUT_MAX {
            self.clear_transform();
            return;
        }
        let Some(geom) = self.geometry() else {
            return;
        };
        let offset = compute_offset(index, &geom);
        self.set_transform_px(-offset);
    }

    /// Raw transform used mid-drag; unclamped on purpose.
    pub fn set_drag_transform(&self, offset_px: f32) {
        self.set_transform_px(offset_px);
    }

    fn set_transform_px(&self, x_px: f32) {
        let _ = self
            .track
            .style()
            .set_property("transform", &format!("translateX({x_px}px)"));
    }

    fn clear_transform(&self) {
        let _ = self.track.style().remove_property("transform");
    }

    /// Suspend the CSS transition so a drag follows the pointer 1:1.
    pub fn suspend_transition(&self) {
        let _ = self.track.style().set_property("transition", "none");
    }

    pub fn restore_transition(&self) {
        let _ = self.track.style().remove_property("transition");
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.track
    }
}
