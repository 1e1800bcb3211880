use crate::constants::{
    NAV_ACTIVE_CLASS, NAV_LINKS_SELECTOR, PROGRESS_BAR_SELECTOR, REVEAL_CLASS, REVEAL_SELECTOR,
    SECTION_SELECTOR,
};
use crate::dom;
use site_core::{active_section, intersects_viewport, progress_percent, SectionSpan};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll-derived effects: reveal-on-scroll, the progress bar, and the
/// active-section nav highlight. Each is wired independently and evaluated
/// once up front so the initial viewport is correct before any scrolling.
pub fn wire(document: &web::Document) {
    wire_reveal(document);
    wire_progress(document);
    wire_nav_highlight(document);
}

fn on_scroll(handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let _ =
            window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn wire_reveal(document: &web::Document) {
    let elements = dom::select_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let reveal = move || {
        let (_, viewport_height) = dom::viewport_size();
        for el in &elements {
            let rect = el.get_bounding_client_rect();
            if intersects_viewport(rect.top() as f32, rect.bottom() as f32, viewport_height) {
                // One-way latch: the class is only ever added
                let _ = el.class_list().add_1(REVEAL_CLASS);
            }
        }
    };
    reveal();
    on_scroll(reveal);
}

fn wire_progress(document: &web::Document) {
    let Ok(Some(bar)) = document.query_selector(PROGRESS_BAR_SELECTOR) else {
        return;
    };
    let Ok(bar) = bar.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let update = move || {
        let (_, viewport_height) = dom::viewport_size();
        let percent = progress_percent(dom::scroll_top(), dom::document_height(), viewport_height);
        let _ = bar.style().set_property("width", &format!("{percent}%"));
    };
    update();
    on_scroll(update);
}

fn wire_nav_highlight(document: &web::Document) {
    let sections = dom::select_all(document, SECTION_SELECTOR);
    let links = dom::select_all(document, NAV_LINKS_SELECTOR);
    if sections.is_empty() || links.is_empty() {
        return;
    }
    let update = move || {
        let (_, viewport_height) = dom::viewport_size();
        let spans: Vec<SectionSpan> = sections
            .iter()
            .map(|s| {
                let (top, height) = s
                    .dyn_ref::<web::HtmlElement>()
                    .map(|h| (h.offset_top() as f32, h.offset_height() as f32))
                    .unwrap_or((0.0, 0.0));
                SectionSpan { top, height }
            })
            .collect();
        // No match keeps the previous highlight in place
        let Some(hit) = active_section(dom::scroll_top(), viewport_height, &spans) else {
            return;
        };
        let Some(id) = sections[hit].get_attribute("id") else {
            return;
        };
        let anchor = format!("#{id}");
        for link in &links {
            let is_hit = link
                .get_attribute("href")
                .is_some_and(|href| href == anchor);
            if is_hit {
                let _ = link.class_list().add_1(NAV_ACTIVE_CLASS);
            } else {
                let _ = link.class_list().remove_1(NAV_ACTIVE_CLASS);
            }
        }
    };
    update();
    on_scroll(update);
}
