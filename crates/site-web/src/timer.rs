//! Cancellable timers over the host's `setTimeout`/`clearTimeout`.
//!
//! The resize path needs an explicit schedule/cancel pair (a burst of events
//! must collapse to one reinitialization); the status and copy labels only
//! need fire-once.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Quiet-period timer: `schedule` replaces any pending run, so only the last
/// call in a burst fires, `delay_ms` after it.
pub struct DebounceTimer {
    delay_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
}

impl DebounceTimer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn schedule(&self, work: impl FnOnce() + 'static) {
        self.cancel();
        let Some(window) = web::window() else {
            return;
        };
        let pending = self.pending.clone();
        let cb = Closure::once_into_js(move || {
            pending.set(None);
            work();
        });
        if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            self.delay_ms,
        ) {
            self.pending.set(Some(handle));
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}

/// Fire `work` once after `delay_ms`, with no handle kept.
pub fn set_timeout_once(delay_ms: i32, work: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(work);
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
    }
}
