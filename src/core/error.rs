//! Error types for XMP extraction
//!
//! Two failure classes reach the caller: the byte source could not be read,
//! or the XMP packet is not well-formed XML. Everything else (unknown
//! prefixes, empty properties, nested arrays) is tolerated by the walker.

use std::io;
use thiserror::Error;

/// Error types for XMP extraction
#[derive(Debug, Error)]
pub enum XmpError {
    /// The byte source (or its host container) could not be read
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The XMP packet could not be processed (XML syntax failure)
    #[error("Metadata processing failed: {0}")]
    Processing(String),

    /// Extraction results could not be serialized
    #[cfg(feature = "serde")]
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for XMP extraction
pub type XmpResult<T> = Result<T, XmpError>;

impl XmpError {
    /// Returns true for XML processing failures
    pub fn is_processing(&self) -> bool {
        matches!(self, XmpError::Processing(_))
    }
}

impl From<quick_xml::Error> for XmpError {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            // The reader shares its I/O error behind an Arc.
            quick_xml::Error::Io(shared) => XmpError::Io(
                std::sync::Arc::try_unwrap(shared)
                    .unwrap_or_else(|shared| io::Error::new(shared.kind(), shared.to_string())),
            ),
            other => XmpError::Processing(other.to_string()),
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for XmpError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        XmpError::Processing(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = XmpError::Processing("unexpected end".to_string());
        assert!(err
            .to_string()
            .contains("Metadata processing failed: unexpected end"));
        assert!(err.is_processing());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let xmp_err: XmpError = io_err.into();
        assert!(matches!(xmp_err, XmpError::Io(_)));
        assert!(!xmp_err.is_processing());
    }

    #[test]
    fn test_reader_io_error_stays_io() {
        let shared = std::sync::Arc::new(io::Error::new(io::ErrorKind::UnexpectedEof, "cut"));
        let xmp_err: XmpError = quick_xml::Error::Io(shared).into();
        match xmp_err {
            XmpError::Io(err) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected IO error, got {other:?}"),
        }
    }
}
