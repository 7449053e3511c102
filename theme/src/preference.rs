//! The two-valued theme preference.

use std::fmt;

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// One of the two mutually exclusive presentation modes.
///
/// "No preference recorded" is not a variant; callers model it as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    /// Tag and stored value for this preference.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Parse an exact stored value. Anything other than `"dark"` or
    /// `"light"` is not a preference.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
