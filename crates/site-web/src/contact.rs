use crate::constants::{CONTACT_ENDPOINT, CONTACT_FORM_ID, CONTACT_STATUS_ID, CONTACT_SUBMIT_ID};
use crate::timer;
use site_core::{
    build_request, reply_status, ContactReply, ContactRequest, SubmitStatus, CONTACT_TIMEOUT_MS,
    MSG_SENDING, STATUS_CLEAR_MS,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn set_status(status_el: &Option<web::HtmlElement>, text: &str, class: &str) {
    let Some(el) = status_el else {
        return;
    };
    el.set_text_content(Some(text));
    let list = el.class_list();
    let _ = list.remove_2("success", "error");
    if !class.is_empty() {
        let _ = list.add_1(class);
    }
}

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn set_busy(button: &Option<web::HtmlButtonElement>, busy: bool) {
    let Some(btn) = button else {
        return;
    };
    btn.set_disabled(busy);
    if busy {
        let _ = btn.set_attribute("aria-busy", "true");
    } else {
        let _ = btn.remove_attribute("aria-busy");
    }
}

/// Contact form: client-side validation, a single in-flight POST guarded by
/// disabling the submit control, and status text for every outcome.
pub fn wire(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let status_el: Option<web::HtmlElement> = document
        .get_element_by_id(CONTACT_STATUS_ID)
        .and_then(|el| el.dyn_into().ok());
    let submit_btn: Option<web::HtmlButtonElement> = document
        .get_element_by_id(CONTACT_SUBMIT_ID)
        .and_then(|el| el.dyn_into().ok());
    let endpoint = form
        .get_attribute("action")
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| CONTACT_ENDPOINT.to_owned());

    {
        let document = document.clone();
        let form = form.clone();
        let status_el = status_el.clone();
        let submit_btn = submit_btn.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();

            let name = field_value(&document, "name");
            let email = field_value(&document, "email");
            let message = field_value(&document, "message");
            let request = match build_request(&name, &email, &message) {
                Ok(r) => r,
                Err(e) => {
                    set_status(&status_el, &e.to_string(), "error");
                    return;
                }
            };

            set_busy(&submit_btn, true);
            set_status(&status_el, MSG_SENDING, "");

            let endpoint = endpoint.clone();
            let form = form.clone();
            let status_el = status_el.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                let status = send(&endpoint, &request).await;
                set_status(&status_el, status.text(), status.css_class());
                if status.is_success() {
                    form.reset();
                    let status_clear = status_el.clone();
                    timer::set_timeout_once(STATUS_CLEAR_MS, move || {
                        if let Some(el) = &status_clear {
                            if el.class_list().contains("success") {
                                el.set_text_content(Some(""));
                                let _ = el.class_list().remove_1("success");
                            }
                        }
                    });
                }
                set_busy(&submit_btn, false);
            });
        }) as Box<dyn FnMut(_)>);
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Enter/Space on the submit control forwards to a click
    if let Some(btn) = submit_btn {
        let target = btn.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    ev.prevent_default();
                    target.click();
                }
            }) as Box<dyn FnMut(_)>);
        let _ = btn.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// POST the request and fold every outcome into a `SubmitStatus`. A hung
/// connection is cut by an abort timer rather than waiting on the host's
/// default.
async fn send(endpoint: &str, request: &ContactRequest) -> SubmitStatus {
    let Some(window) = web::window() else {
        return SubmitStatus::ConnectionFailed;
    };
    let body = match serde_json::to_string(request) {
        Ok(b) => b,
        Err(e) => {
            log::error!("[contact] serialize failed: {e}");
            return SubmitStatus::ConnectionFailed;
        }
    };

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    if let Ok(headers) = web::Headers::new() {
        let _ = headers.set("Content-Type", "application/json");
        init.set_headers(headers.as_ref());
    }
    if let Ok(controller) = web::AbortController::new() {
        init.set_signal(Some(&controller.signal()));
        timer::set_timeout_once(CONTACT_TIMEOUT_MS, move || controller.abort());
    }

    let response = match JsFuture::from(window.fetch_with_str_and_init(endpoint, &init)).await {
        Ok(v) => match v.dyn_into::<web::Response>() {
            Ok(r) => r,
            Err(_) => return SubmitStatus::ConnectionFailed,
        },
        Err(e) => {
            // Network unreachable or the abort timer fired
            log::error!("[contact] send error: {e:?}");
            return SubmitStatus::ConnectionFailed;
        }
    };

    let http_ok = response.ok();
    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
        Err(_) => None,
    };
    let reply = text.and_then(|t| match serde_json::from_str::<ContactReply>(&t) {
        Ok(r) => Some(r),
        Err(e) => {
            log::warn!("[contact] unparseable reply: {e}");
            None
        }
    });
    if !http_ok {
        log::warn!("[contact] endpoint answered {}", response.status());
    }
    reply_status(http_ok, reply)
}
