use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Logical (CSS-pixel) viewport size.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

#[inline]
pub fn viewport_width() -> f32 {
    viewport_size().0
}

pub fn scroll_top() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

pub fn document_height() -> f32 {
    window_document()
        .and_then(|d| d.body())
        .map(|b| b.scroll_height() as f32)
        .unwrap_or(0.0)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        attach_click(&el, move || handler());
    }
}

#[inline]
pub fn add_selector_click_listener(
    document: &web::Document,
    selector: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        attach_click(&el, move || handler());
    }
}

fn attach_click(el: &web::Element, handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// All elements matching `selector`, skipping non-element nodes.
pub fn select_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Computed value of a style property, or `None` when it is empty/unreadable.
pub fn computed_style_value(el: &web::Element, property: &str) -> Option<String> {
    let style = web::window()?.get_computed_style(el).ok()??;
    let value = style.get_property_value(property).ok()?;
    (!value.is_empty()).then_some(value)
}
