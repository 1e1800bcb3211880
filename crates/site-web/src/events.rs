use crate::carousel::TrackDom;
use crate::dom;
use crate::starfield::CanvasField;
use crate::timer::DebounceTimer;
use site_core::{drag_offset, SwipeCommit, SwipeTracker, NARROW_LAYOUT_MAX, RESIZE_DEBOUNCE_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global arrow-key navigation for the primary track (not scoped to focus).
pub fn wire_keyboard_nav(track: Rc<RefCell<TrackDom>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let mut t = track.borrow_mut();
                let count = t.slide_count();
                if count == 0 {
                    return;
                }
                match ev.key().as_str() {
                    "ArrowRight" => {
                        t.state.next(count);
                        t.apply_index();
                    }
                    "ArrowLeft" => {
                        t.state.prev(count);
                        t.apply_index();
                    }
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Pointer swipe on the primary track: down on the track itself, move/up/
/// cancel at window level so a drag that leaves the element still finishes.
pub fn wire_swipe(track: Rc<RefCell<TrackDom>>, tracker: Rc<RefCell<SwipeTracker>>) {
    let target = track.borrow().element().clone();

    // pointerdown
    {
        let track = track.clone();
        let tracker = tracker.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                if dom::viewport_width() <= NARROW_LAYOUT_MAX {
                    return;
                }
                tracker.borrow_mut().begin(ev.client_x() as f32);
                track.borrow().suspend_transition();
            }) as Box<dyn FnMut(_)>);
        let _ =
            target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let track = track.clone();
        let tracker = tracker.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let Some(delta) = tracker.borrow_mut().drag(ev.client_x() as f32) else {
                    return;
                };
                let t = track.borrow();
                if let Some(outer) = t.slide_outer() {
                    t.set_drag_transform(drag_offset(t.state.index, outer, delta));
                }
            }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup
    {
        let track = track.clone();
        let tracker = tracker.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::PointerEvent| {
            let commit = {
                let mut g = tracker.borrow_mut();
                if !g.is_active() {
                    return;
                }
                g.release()
            };
            let mut t = track.borrow_mut();
            t.restore_transition();
            let count = t.slide_count();
            match commit {
                Some(SwipeCommit::Next) => t.state.next(count),
                Some(SwipeCommit::Prev) => t.state.prev(count),
                None => {}
            }
            // Clamped reposition; snaps back after an overshoot
            t.apply_index();
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointercancel: like pointerup but never commits
    {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::PointerEvent| {
            tracker.borrow_mut().cancel();
            let t = track.borrow();
            t.restore_transition();
            t.apply_index();
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window.add_event_listener_with_callback(
                "pointercancel",
                closure.as_ref().unchecked_ref(),
            );
        }
        closure.forget();
    }
}

/// Debounced resize: a burst of resize events collapses into one starfield
/// reinit plus a re-measure of both tracks, 180ms after the last event.
pub fn wire_resize(
    surface: Option<Rc<RefCell<CanvasField>>>,
    primary: Option<Rc<RefCell<TrackDom>>>,
    experience: Option<Rc<RefCell<TrackDom>>>,
) {
    let Some(window) = web::window() else {
        return;
    };
    let debounce = DebounceTimer::new(RESIZE_DEBOUNCE_MS);
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let surface = surface.clone();
        let primary = primary.clone();
        let experience = experience.clone();
        debounce.schedule(move || {
            if let Some(s) = surface {
                s.borrow_mut().reinit();
            }
            if let Some(p) = primary {
                let mut p = p.borrow_mut();
                p.refresh_slides();
                p.apply_index();
            }
            if let Some(e) = experience {
                let mut e = e.borrow_mut();
                e.refresh_slides();
                e.apply_centered();
            }
        });
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Re-measure once the page has fully loaded; slide widths settle only after
/// styling and images arrive.
pub fn wire_load(primary: Option<Rc<RefCell<TrackDom>>>, experience: Option<Rc<RefCell<TrackDom>>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Some(p) = &primary {
            let mut p = p.borrow_mut();
            p.refresh_slides();
            p.apply_index();
        }
        if let Some(e) = &experience {
            let mut e = e.borrow_mut();
            e.refresh_slides();
            e.apply_centered();
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}
