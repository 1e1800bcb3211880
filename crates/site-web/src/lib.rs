#![cfg(target_arch = "wasm32")]
//! WASM entry point for the portfolio site's interaction layer.
//!
//! Every widget checks for its own DOM targets and quietly stays off when
//! they are missing, so a page that only carries the canvas (or only the
//! contact form) still works.

use site_core::SwipeTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod carousel;
mod clipboard;
mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod menu;
mod scrollfx;
mod spotlight;
mod starfield;
mod timer;

use carousel::TrackDom;
use constants::{
    EXPERIENCE_TRACK_SELECTOR, NEXT_BUTTON_SELECTOR, PREV_BUTTON_SELECTOR, PRIMARY_TRACK_SELECTOR,
};
use starfield::CanvasField;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Animated starfield background
    let surface = CanvasField::attach(&document).map(|s| Rc::new(RefCell::new(s)));
    if let Some(surface) = &surface {
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            surface: surface.clone(),
        }));
        frame::start_loop(frame_ctx);
    }

    // Primary (index-driven) carousel with buttons, arrows, and swipe
    let primary =
        TrackDom::attach(&document, PRIMARY_TRACK_SELECTOR).map(|t| Rc::new(RefCell::new(t)));
    if let Some(primary) = &primary {
        primary.borrow().apply_index();

        let next = primary.clone();
        dom::add_selector_click_listener(&document, NEXT_BUTTON_SELECTOR, move || {
            let mut t = next.borrow_mut();
            let count = t.slide_count();
            if count == 0 {
                return;
            }
            t.state.next(count);
            t.apply_index();
        });
        let prev = primary.clone();
        dom::add_selector_click_listener(&document, PREV_BUTTON_SELECTOR, move || {
            let mut t = prev.borrow_mut();
            let count = t.slide_count();
            if count == 0 {
                return;
            }
            t.state.prev(count);
            t.apply_index();
        });

        events::wire_keyboard_nav(primary.clone());
        events::wire_swipe(
            primary.clone(),
            Rc::new(RefCell::new(SwipeTracker::default())),
        );
    }

    // Experience carousel: no controls, always centered on the middle slide
    let experience =
        TrackDom::attach(&document, EXPERIENCE_TRACK_SELECTOR).map(|t| Rc::new(RefCell::new(t)));
    if let Some(experience) = &experience {
        experience.borrow().apply_centered();
    }

    events::wire_load(primary.clone(), experience.clone());
    events::wire_resize(surface, primary, experience);

    menu::wire(&document);
    spotlight::wire(&document);
    clipboard::wire(&document);
    scrollfx::wire(&document);
    contact::wire(&document);

    Ok(())
}
