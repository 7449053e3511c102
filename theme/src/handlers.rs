//! Click and page-load handlers.
//!
//! Both take the shared page state (root node, store) as injected references.
//! Each runs to completion on the UI thread; the page guarantees the load
//! handler fires before any click.

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::preference::ThemePreference;
use crate::root::RootNode;
use crate::store::PreferenceStore;

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

/// Flip the theme on `root` and persist the new value.
///
/// The current theme is dark iff the root carries the `dark` tag. The new
/// theme's tag is added and the old one removed; other tags are untouched.
/// The tag change happens before the write and is kept if the write fails.
///
/// # Errors
///
/// Returns [`ThemeError::Store`] if the store rejects the write.
pub fn on_toggle<R, S>(
    root: &mut R,
    store: &mut S,
    config: &ThemeConfig,
) -> Result<ThemePreference, ThemeError>
where
    R: RootNode + ?Sized,
    S: PreferenceStore + ?Sized,
{
    let is_dark = root.has_tag(ThemePreference::Dark.as_str());
    let next = if is_dark {
        ThemePreference::Light
    } else {
        ThemePreference::Dark
    };

    root.add_tag(next.as_str());
    root.remove_tag(next.inverse().as_str());

    store.set(&config.storage_key, next.as_str())?;
    log::debug!("theme toggled to {next}");
    Ok(next)
}

/// Re-apply a persisted theme to `root`.
///
/// A non-empty stored value replaces the root's whole class list, including
/// classes that have nothing to do with theming. With nothing stored the root
/// keeps its authored classes. Returns the applied value.
///
/// # Errors
///
/// Returns [`ThemeError::Store`] if the store rejects the read.
pub fn on_load<R, S>(
    root: &mut R,
    store: &S,
    config: &ThemeConfig,
) -> Result<Option<String>, ThemeError>
where
    R: RootNode + ?Sized,
    S: PreferenceStore + ?Sized,
{
    let Some(saved) = store.get(&config.storage_key)? else {
        log::debug!("no stored theme under `{}`", config.storage_key);
        return Ok(None);
    };
    if saved.is_empty() {
        log::debug!("empty stored theme under `{}`", config.storage_key);
        return Ok(None);
    }

    if ThemePreference::parse(&saved).is_none() {
        log::warn!("applying unrecognized stored theme `{saved}`");
    }
    root.replace_tags(&saved);
    log::debug!("theme restored to {saved}");
    Ok(Some(saved))
}
