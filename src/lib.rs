//! # xmpgroups
//!
//! Streaming extraction of XMP metadata into schema groups.
//!
//! An XMP packet is walked once; every namespace declared on an
//! `rdf:Description` element becomes a group (labelled "Dublin Core",
//! "XMP Basic", ... for well-known prefixes), and the attributes and child
//! properties of the Description are collected into those groups as flat
//! tag/value pairs.
//!
//! ```rust
//! let xmp = br#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
//!   <rdf:Description xmlns:xmp="http://ns.adobe.com/xap/1.0/" xmp:CreatorTool="Writer"/>
//! </rdf:RDF>"#;
//!
//! let groups = xmpgroups::extract_groups(xmp)?;
//! for group in &groups {
//!     println!("{}", group.name());
//!     for entry in group.entries() {
//!         println!("  {} = {}", entry.tag, entry.value);
//!     }
//! }
//! # Ok::<(), xmpgroups::XmpError>(())
//! ```
//!
//! ## Features
//!
//! - `pdf` (default): read the XMP metadata stream out of PDF documents
//! - `serde`: `Serialize`/`Deserialize` for the result types

pub mod core;
#[cfg(feature = "pdf")]
pub mod files;

pub use crate::core::{
    ExtractOptions, Group, GroupContainer, GroupIndex, MetadataEntry, NamespaceTracker, XmpError,
    XmpExtractor, XmpResult,
};
#[cfg(feature = "pdf")]
pub use crate::files::pdf::{extract_pdf, extract_pdf_file};

/// Extract schema groups from an XMP packet with default options
pub fn extract_groups(xmp: &[u8]) -> XmpResult<GroupContainer> {
    XmpExtractor::new().extract_bytes(xmp)
}

/// Serialize extraction results as pretty-printed JSON
#[cfg(feature = "serde")]
pub fn to_json(groups: &GroupContainer) -> XmpResult<String> {
    serde_json::to_string_pretty(groups)
        .map_err(|e| XmpError::Serialization(e.to_string()))
}
