//! Ordered class list, the in-memory form of an element's `className`.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

/// Class names in first-seen order, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated class string.
    #[must_use]
    pub fn from_class_name(class_name: &str) -> Self {
        let mut set = Self::new();
        for tag in class_name.split_ascii_whitespace() {
            set.add(tag);
        }
        set
    }

    /// Render back to a single-space-separated class string.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.tags.join(" ")
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add `tag` at the end unless it is already present.
    pub fn add(&mut self, tag: &str) {
        if !self.contains(tag) {
            self.tags.push(tag.to_owned());
        }
    }

    pub fn remove(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
