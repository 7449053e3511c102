//! Event wiring: the trigger's `click` and the document's `DOMContentLoaded`.
//!
//! Handler failures are logged and thrown back to the page as JS `Error`s,
//! so they surface the same way an uncaught exception in a page script would.

use std::rc::Rc;

use theme::{ThemeConfig, ThemeError, on_load, on_toggle};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;
use web_sys::{EventTarget, Window};

use crate::dom::{DocumentRoot, LocalStorage, js_error_text};

#[cfg(test)]
#[path = "bind_test.rs"]
mod bind_test;

/// Log `err` and convert it into a thrown JS `Error`.
pub(crate) fn to_js(err: ThemeError) -> JsValue {
    log::error!("{err}");
    js_sys::Error::new(&err.to_string()).into()
}

/// Whether `DOMContentLoaded` is still pending for this `readyState`.
pub(crate) fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

type Listener = Closure<dyn FnMut() -> Result<(), JsValue>>;

/// Register `listener` for `event` on `target`, logging a rejected
/// registration before handing it back to the page.
fn attach_listener(target: &EventTarget, event: &str, listener: &Listener) -> Result<(), JsValue> {
    target
        .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        .inspect_err(|err| log::error!("failed to attach {event} listener: {}", js_error_text(err)))
}

fn toggle(window: &Window, config: &ThemeConfig) -> Result<(), ThemeError> {
    let document = window.document().ok_or(ThemeError::MissingRoot)?;
    let mut root = DocumentRoot::from_document(&document)?;
    let mut store = LocalStorage::from_window(window)?;
    on_toggle(&mut root, &mut store, config)?;
    Ok(())
}

fn load(window: &Window, config: &ThemeConfig) -> Result<(), ThemeError> {
    let document = window.document().ok_or(ThemeError::MissingRoot)?;
    let mut root = DocumentRoot::from_document(&document)?;
    let store = LocalStorage::from_window(window)?;
    on_load(&mut root, &store, config)?;
    Ok(())
}

/// Attach the click handler to the trigger element and schedule the load
/// handler.
///
/// The load handler runs on `DOMContentLoaded` if the document is still
/// loading, otherwise immediately. Listeners live for the rest of the page.
///
/// # Errors
///
/// Throws when the document or trigger element is missing, when a listener
/// cannot be attached, or when an immediate load fails.
pub fn install(window: &Window, config: ThemeConfig) -> Result<(), JsValue> {
    let document = window.document().ok_or(ThemeError::MissingRoot).map_err(to_js)?;
    let trigger = document
        .get_element_by_id(&config.trigger_id)
        .ok_or_else(|| ThemeError::MissingTrigger(config.trigger_id.clone()))
        .map_err(to_js)?;
    let config = Rc::new(config);

    let click_window = window.clone();
    let click_config = Rc::clone(&config);
    let on_click = Listener::new(move || {
        toggle(&click_window, &click_config).map_err(to_js)
    });
    attach_listener(&trigger, "click", &on_click)?;
    on_click.forget();

    if is_loading(&document.ready_state()) {
        let ready_window = window.clone();
        let ready_config = Rc::clone(&config);
        let on_ready = Listener::new(move || {
            load(&ready_window, &ready_config).map_err(to_js)
        });
        attach_listener(&document, "DOMContentLoaded", &on_ready)?;
        on_ready.forget();
    } else {
        load(window, &config).map_err(to_js)?;
    }

    log::debug!("theme toggle bound to #{}", config.trigger_id);
    Ok(())
}
