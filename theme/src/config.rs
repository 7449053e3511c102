//! Page-level configuration: where the preference lives and what to click.
//!
//! The browser binding reads it as JSON from the root element's
//! `data-theme-config` attribute; a missing attribute means defaults.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme";
/// Trigger element id used when none is configured.
pub const DEFAULT_TRIGGER_ID: &str = "theme-toggle";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the preference is persisted under.
    pub storage_key: String,
    /// `id` of the element whose clicks flip the theme.
    pub trigger_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            trigger_id: DEFAULT_TRIGGER_ID.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse config JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed JSON and
    /// [`ThemeError::InvalidConfig`] for empty fields.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional attribute value; absent or blank means defaults.
    ///
    /// # Errors
    ///
    /// Same as [`ThemeConfig::from_json`].
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, ThemeError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }

    fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.is_empty() {
            return Err(ThemeError::InvalidConfig("storage_key must not be empty"));
        }
        if self.trigger_id.is_empty() {
            return Err(ThemeError::InvalidConfig("trigger_id must not be empty"));
        }
        Ok(())
    }
}
