//! XMP extraction core
//!
//! This module contains the schema registry, the group container, the
//! namespace tracker and the streaming walker that ties them together.

pub mod error;
pub mod group;
pub mod options;
pub mod schema;
pub mod tracker;
pub mod walker;

pub use error::{XmpError, XmpResult};
pub use group::{Group, GroupContainer, GroupIndex, MetadataEntry};
pub use options::ExtractOptions;
pub use schema::{display_name, is_known, known_schemas, ns};
pub use tracker::NamespaceTracker;
pub use walker::XmpExtractor;
