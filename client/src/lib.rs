//! # client
//!
//! WASM binding for the dark/light theme toggle.
//!
//! On module start this crate installs the panic hook and console logger,
//! reads an optional `data-theme-config` JSON attribute from `<html>`, then
//! binds the `theme` crate's handlers to the page: clicks on the trigger
//! element (`#theme-toggle` by default) flip the theme, and the stored
//! preference is re-applied once the document is ready.
//!
//! The page supplies the trigger element and the CSS for the `dark` and
//! `light` classes; nothing here renders markup.

pub mod bind;
pub mod dom;

use theme::ThemeConfig;
use wasm_bindgen::prelude::*;

/// Root-element attribute carrying optional [`ThemeConfig`] JSON.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

/// WASM entry point.
///
/// # Errors
///
/// Throws when there is no `window`, when the config attribute is invalid,
/// or when [`bind::install`] fails.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger already initialized");
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
    let raw = window
        .document()
        .and_then(|doc| doc.document_element())
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let config = ThemeConfig::from_attribute(raw.as_deref()).map_err(bind::to_js)?;

    bind::install(&window, config)
}
