//! Dark/light theme preference with persistence across page loads.
//!
//! This crate owns the browser-independent half of the theme toggle: the
//! two-valued [`ThemePreference`], the [`RootNode`] and [`PreferenceStore`]
//! seams standing in for `<html>` and `localStorage`, and the two handlers the
//! page wires to events. The `client` crate supplies `web-sys` implementations
//! of both seams; everything here runs natively so it can be tested without a
//! browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`preference`] | [`ThemePreference`] and its string form |
//! | [`tags`] | [`TagSet`], an ordered class list |
//! | [`root`] | [`RootNode`] seam over the root element's classes |
//! | [`store`] | [`PreferenceStore`] seam and [`MemoryStore`] |
//! | [`handlers`] | [`on_toggle`] and [`on_load`] |
//! | [`config`] | [`ThemeConfig`] (storage key, trigger id) |
//! | [`error`] | [`ThemeError`] |

pub mod config;
pub mod error;
pub mod handlers;
pub mod preference;
pub mod root;
pub mod store;
pub mod tags;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use handlers::{on_load, on_toggle};
pub use preference::ThemePreference;
pub use root::RootNode;
pub use store::{MemoryStore, PreferenceStore, StoreError};
pub use tags::TagSet;
