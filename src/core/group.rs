//! Group container
//!
//! The result of one extraction: an ordered list of schema groups, each with
//! an ordered list of (tag, value) entries. Groups live in a flat arena and
//! are addressed by the [`GroupIndex`] returned when they were created.

use crate::core::schema;
use std::fmt;

/// Stable index of a group inside a [`GroupContainer`]
///
/// Indices are only minted by [`GroupContainer::add_group`], in creation
/// order, and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupIndex(usize);

impl GroupIndex {
    /// Position of the group in creation order
    pub fn get(self) -> usize {
        self.0
    }
}

/// A single metadata (tag, value) pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataEntry {
    /// Property name without its namespace prefix
    pub tag: String,
    /// Trimmed property value
    pub value: String,
}

impl MetadataEntry {
    /// Create a new entry
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for MetadataEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.tag, self.value)
    }
}

/// Metadata collected for one schema
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    prefix: String,
    name: String,
    entries: Vec<MetadataEntry>,
    unflattened: Vec<String>,
}

impl Group {
    fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            name: schema::display_name(prefix).to_string(),
            entries: Vec::new(),
            unflattened: Vec::new(),
        }
    }

    /// Namespace prefix this group was created for
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Display name (registry name, or the prefix when unknown)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in document order; repeated tags are all kept
    pub fn entries(&self) -> &[MetadataEntry] {
        &self.entries
    }

    /// First value recorded for a tag
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.value.as_str())
    }

    /// Tags whose content was nested (Bag/Seq/Alt or structures) and was
    /// skipped instead of flattened into a value
    pub fn unflattened(&self) -> &[String] {
        &self.unflattened
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the group holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered collection of metadata groups produced by one extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupContainer {
    groups: Vec<Group>,
}

impl GroupContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new group for `prefix` and return its index
    ///
    /// No duplicate detection happens here; see
    /// [`NamespaceTracker::ensure_group`](crate::core::tracker::NamespaceTracker::ensure_group).
    pub fn add_group(&mut self, prefix: &str) -> GroupIndex {
        let index = GroupIndex(self.groups.len());
        self.groups.push(Group::new(prefix));
        index
    }

    /// Append a (tag, value) entry to the group at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` was not obtained from this container.
    pub fn add_metadata(
        &mut self,
        index: GroupIndex,
        tag: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.groups[index.0]
            .entries
            .push(MetadataEntry::new(tag, value));
    }

    /// Record that `tag` had nested content that was not flattened
    ///
    /// # Panics
    ///
    /// Panics if `index` was not obtained from this container.
    pub fn mark_unflattened(&mut self, index: GroupIndex, tag: impl Into<String>) {
        self.groups[index.0].unflattened.push(tag.into());
    }

    /// Get a group by index
    pub fn group(&self, index: GroupIndex) -> Option<&Group> {
        self.groups.get(index.0)
    }

    /// Find a group by namespace prefix
    pub fn find(&self, prefix: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.prefix == prefix)
    }

    /// Find a group by display name
    pub fn find_by_name(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// All groups in creation order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Iterate over groups in creation order
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no group was created
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a GroupContainer {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for GroupContainer {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl fmt::Display for GroupContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "[{}]", group.name)?;
            for entry in &group.entries {
                writeln!(f, "  {}", entry)?;
            }
        }
        Ok(())
    }
}
