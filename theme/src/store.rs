//! Seam over the persistent string store (`localStorage` in the browser).
//!
//! DESIGN
//! ======
//! The store is injected into both handlers instead of being reached through
//! a global, so tests can drive them against [`MemoryStore`].

use std::collections::HashMap;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Error returned by a [`PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Storage is disabled or missing in this environment.
    #[error("preference storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// Quota exceeded, read-only storage, and similar write rejections.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String-keyed durable key/value store scoped to the page's origin.
pub trait PreferenceStore {
    /// Read `key`, returning `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when the backend rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`PreferenceStore`] for tests and native hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
    unreadable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like storage that is full or
    /// disabled for writing.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// A store that rejects every read, like storage blocked by the
    /// browser's privacy settings.
    #[must_use]
    pub fn unreadable() -> Self {
        Self {
            unreadable: true,
            ..Self::default()
        }
    }

    /// Seed `key` with `value`, bypassing the read-only flag.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.unreadable {
            return Err(StoreError::Read {
                key: key.to_owned(),
                reason: "store is unreadable".to_owned(),
            });
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write {
                key: key.to_owned(),
                reason: "store is read-only".to_owned(),
            });
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
