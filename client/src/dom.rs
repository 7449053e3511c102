//! `web-sys` implementations of the theme seams.
//!
//! [`LocalStorage`] backs [`PreferenceStore`] with `window.localStorage`;
//! [`DocumentRoot`] backs [`RootNode`] with `document.documentElement`.
//! Adapters are cheap handles and are rebuilt per event.

use theme::{PreferenceStore, RootNode, StoreError, ThemeError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Storage, Window};

/// Best-effort human-readable text for a thrown JS value.
pub(crate) fn js_error_text(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Origin-scoped `localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open `window.localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when storage is disabled (the
    /// getter throws) or missing.
    pub fn from_window(window: &Window) -> Result<Self, StoreError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable("localStorage is not available".to_owned())),
            Err(err) => Err(StoreError::Unavailable(js_error_text(&err))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_owned(),
            reason: js_error_text(&err),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_owned(),
            reason: js_error_text(&err),
        })
    }
}

/// The `<html>` element's class list.
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingRoot`] for a document without a root
    /// element.
    pub fn from_document(document: &Document) -> Result<Self, ThemeError> {
        let element = document.document_element().ok_or(ThemeError::MissingRoot)?;
        Ok(Self { element })
    }
}

impl RootNode for DocumentRoot {
    fn has_tag(&self, tag: &str) -> bool {
        self.element.class_list().contains(tag)
    }

    fn add_tag(&mut self, tag: &str) {
        if let Err(err) = self.element.class_list().add_1(tag) {
            log::warn!("classList.add({tag}) rejected: {}", js_error_text(&err));
        }
    }

    fn remove_tag(&mut self, tag: &str) {
        if let Err(err) = self.element.class_list().remove_1(tag) {
            log::warn!("classList.remove({tag}) rejected: {}", js_error_text(&err));
        }
    }

    fn replace_tags(&mut self, class_name: &str) {
        self.element.set_class_name(class_name);
    }
}
