//! Seam over the root presentation node's class list.

use crate::tags::TagSet;

/// Tag access on the page's root element (`<html>`).
///
/// Writes are infallible at this interface. Browser implementations that can
/// reject a mutation log it instead of reporting it.
pub trait RootNode {
    fn has_tag(&self, tag: &str) -> bool;

    fn add_tag(&mut self, tag: &str);

    fn remove_tag(&mut self, tag: &str);

    /// Overwrite every tag on the node with the classes in `class_name`.
    fn replace_tags(&mut self, class_name: &str);
}

impl RootNode for TagSet {
    fn has_tag(&self, tag: &str) -> bool {
        self.contains(tag)
    }

    fn add_tag(&mut self, tag: &str) {
        self.add(tag);
    }

    fn remove_tag(&mut self, tag: &str) {
        self.remove(tag);
    }

    fn replace_tags(&mut self, class_name: &str) {
        *self = TagSet::from_class_name(class_name);
    }
}
