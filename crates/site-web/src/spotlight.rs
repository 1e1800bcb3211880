use crate::constants::SPOTLIGHT_ID;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cursor spotlight: follows the mouse on pointer devices, removed outright
/// on touch devices where it would just sit in a corner.
pub fn wire(document: &web::Document) {
    let Some(spotlight) = document.get_element_by_id(SPOTLIGHT_ID) else {
        return;
    };
    let is_touch = web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false);
    if is_touch {
        spotlight.remove();
        return;
    }
    let Some(spotlight) = spotlight.dyn_into::<web::HtmlElement>().ok() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let style = spotlight.style();
        let _ = style.set_property("top", &format!("{}px", ev.client_y()));
        let _ = style.set_property("left", &format!("{}px", ev.client_x()));
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
