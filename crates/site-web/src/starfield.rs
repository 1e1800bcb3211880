use crate::constants::STARFIELD_CANVAS_ID;
use crate::dom;
use site_core::{DrawCircle, StarField};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The starfield canvas: a 2D surface whose backing store tracks
/// viewport-size × devicePixelRatio while draw coordinates stay logical.
pub struct CanvasField {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: StarField,
    batch: Vec<DrawCircle>,
}

impl CanvasField {
    /// `None` when the canvas (or its 2D context) is missing; the component
    /// simply stays off in that case.
    pub fn attach(document: &web::Document) -> Option<Self> {
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(STARFIELD_CANVAS_ID)?
            .dyn_into()
            .ok()?;
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()??
            .dyn_into()
            .ok()?;
        let (width, height) = dom::viewport_size();
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let surface = Self {
            canvas,
            ctx,
            field: StarField::new(width, height, seed),
            batch: Vec::new(),
        };
        surface.sync_surface();
        log::info!("[starfield] attached with {} stars", surface.field.len());
        Some(surface)
    }

    /// Match the backing store to the viewport at the device pixel ratio and
    /// scale the context so star coordinates remain logical pixels.
    fn sync_surface(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let dpr = window.device_pixel_ratio();
        let (width, height) = dom::viewport_size();
        self.canvas.set_width((width as f64 * dpr).round() as u32);
        self.canvas.set_height((height as f64 * dpr).round() as u32);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    /// Rebuild the particle set for the current viewport (debounced resize).
    pub fn reinit(&mut self) {
        let (width, height) = dom::viewport_size();
        self.field.resize(width, height);
        self.sync_surface();
        log::debug!("[starfield] reinit -> {} stars", self.field.len());
    }

    /// One animation frame: skip (but keep the loop alive) once the canvas
    /// has left the document.
    pub fn frame(&mut self) {
        if !self.canvas.is_connected() {
            return;
        }
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.field.advance(&mut self.batch);
        for circle in &self.batch {
            self.ctx
                .set_fill_style_str(&format!("rgba(200,200,200,{})", circle.alpha));
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                circle.x as f64,
                circle.y as f64,
                circle.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }
    }
}
