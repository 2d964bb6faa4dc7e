//! Namespace tracker
//!
//! Maps each namespace prefix seen during one extraction to the index of its
//! group, so a prefix declared on several Description elements still yields
//! a single group.

use crate::core::group::{GroupContainer, GroupIndex};
use std::collections::HashMap;

/// Prefix to group index mapping for a single extraction
#[derive(Debug, Clone, Default)]
pub struct NamespaceTracker {
    groups: HashMap<String, GroupIndex>,
}

impl NamespaceTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the group index for `prefix`, creating the group on first sight
    pub fn ensure_group(&mut self, prefix: &str, container: &mut GroupContainer) -> GroupIndex {
        if let Some(index) = self.groups.get(prefix) {
            return *index;
        }

        let index = container.add_group(prefix);
        log::debug!("new group #{} for prefix '{}'", index.get(), prefix);
        self.groups.insert(prefix.to_string(), index);
        index
    }

    /// Look up the group index of an already registered prefix
    pub fn lookup(&self, prefix: &str) -> Option<GroupIndex> {
        self.groups.get(prefix).copied()
    }

    /// Forget every mapping (called at the start of each extraction)
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Number of registered prefixes
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no prefix is registered
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_group_is_idempotent() {
        let mut container = GroupContainer::new();
        let mut tracker = NamespaceTracker::new();

        let first = tracker.ensure_group("xmp", &mut container);
        let second = tracker.ensure_group("xmp", &mut container);

        assert_eq!(first, second);
        assert_eq!(container.len(), 1);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_lookup() {
        let mut container = GroupContainer::new();
        let mut tracker = NamespaceTracker::new();
        tracker.ensure_group("dc", &mut container);
        let pdf = tracker.ensure_group("pdf", &mut container);

        assert_eq!(tracker.lookup("pdf"), Some(pdf));
        assert_eq!(tracker.lookup("exif"), None);
    }

    #[test]
    fn test_clear() {
        let mut container = GroupContainer::new();
        let mut tracker = NamespaceTracker::new();
        tracker.ensure_group("dc", &mut container);

        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.lookup("dc"), None);
    }
}
