use crate::constants::{COPIED_LABEL, COPY_FIELDS, COPY_PROMPT_LABEL};
use crate::timer;
use site_core::COPY_LABEL_RESET_MS;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Click-to-copy contact fields (Discord handle, email address).
///
/// The clipboard write is best-effort: the promise is dropped and the label
/// optimistically reads "Copied!" either way, reverting after 1.5s.
pub fn wire(document: &web::Document) {
    for (box_id, value_id, label_id) in COPY_FIELDS {
        wire_field(document, box_id, value_id, label_id);
    }
}

fn wire_field(document: &web::Document, box_id: &str, value_id: &str, label_id: &str) {
    let (Some(container), Some(value_el), Some(label_el)) = (
        document.get_element_by_id(box_id),
        document.get_element_by_id(value_id),
        document.get_element_by_id(label_id),
    ) else {
        return;
    };

    let copy = move |value_el: &web::Element, label_el: &web::Element| {
        let text = value_el.text_content().unwrap_or_default().trim().to_owned();
        if let Some(w) = web::window() {
            // Failures are swallowed; there is no user-visible error path
            let _ = w.navigator().clipboard().write_text(&text);
        }
        label_el.set_text_content(Some(COPIED_LABEL));
        let label_reset = label_el.clone();
        timer::set_timeout_once(COPY_LABEL_RESET_MS, move || {
            label_reset.set_text_content(Some(COPY_PROMPT_LABEL));
        });
    };

    {
        let value_el = value_el.clone();
        let label_el = label_el.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            copy(&value_el, &label_el);
        }) as Box<dyn FnMut()>);
        let _ =
            container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Keyboard activation for the focusable container
    {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    copy(&value_el, &label_el);
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            container.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
