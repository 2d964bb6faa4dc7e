//! Host file support
//!
//! Locating the XMP packet inside a container format happens before the
//! walker runs. Only PDF is supported: the packet is the document
//! catalog's `/Metadata` stream.

pub mod pdf;

pub use pdf::{extract_pdf, extract_pdf_file, is_pdf, read_metadata_stream};
