use crate::constants::{HAMBURGER_ID, NAV_MENU_ID, NAV_MENU_LINKS_SELECTOR};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_open(menu: &web::Element, hamburger: &web::Element, open: bool) {
    let (menu_list, burger_list) = (menu.class_list(), hamburger.class_list());
    if open {
        let _ = menu_list.add_1("open");
        let _ = burger_list.add_1("open");
    } else {
        let _ = menu_list.remove_1("open");
        let _ = burger_list.remove_1("open");
    }
    let _ = hamburger.set_attribute("aria-expanded", if open { "true" } else { "false" });
    let _ = menu.set_attribute("aria-hidden", if open { "false" } else { "true" });
}

/// Collapsible mobile menu: the hamburger toggles it, any nav-link click or
/// a click outside both elements closes it.
pub fn wire(document: &web::Document) {
    let (Some(hamburger), Some(menu)) = (
        document.get_element_by_id(HAMBURGER_ID),
        document.get_element_by_id(NAV_MENU_ID),
    ) else {
        return;
    };

    {
        let menu = menu.clone();
        let hamburger_toggle = hamburger.clone();
        dom::add_click_listener(document, HAMBURGER_ID, move || {
            let open = menu.class_list().contains("open");
            set_open(&menu, &hamburger_toggle, !open);
        });
    }

    for link in dom::select_all(document, NAV_MENU_LINKS_SELECTOR) {
        let menu = menu.clone();
        let hamburger = hamburger.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            set_open(&menu, &hamburger, false);
        }) as Box<dyn FnMut()>);
        let _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Outside click closes an open menu
    {
        let menu = menu.clone();
        let hamburger = hamburger.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if !menu.class_list().contains("open") {
                return;
            }
            let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
            let inside = menu.contains(target.as_ref()) || hamburger.contains(target.as_ref());
            if !inside {
                set_open(&menu, &hamburger, false);
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
