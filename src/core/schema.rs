//! Schema registry
//!
//! Maps well-known XMP namespace prefixes to the human-readable names used
//! as group labels. The table is immutable, so it can be read from any
//! number of concurrent extractions without locking.

/// Well-known XMP namespace prefixes and URIs
pub mod ns {
    /// Dublin Core namespace
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    /// XMP Basic namespace
    pub const XMP: &str = "http://ns.adobe.com/xap/1.0/";
    /// XMP Rights namespace
    pub const XMP_RIGHTS: &str = "http://ns.adobe.com/xap/1.0/rights/";
    /// XMP Media Management namespace
    pub const XMP_MM: &str = "http://ns.adobe.com/xap/1.0/mm/";
    /// XMP Basic Job Ticket namespace
    pub const XMP_BJ: &str = "http://ns.adobe.com/xap/1.0/bj/";
    /// XMP PagedText namespace
    pub const XMP_PAGED: &str = "http://ns.adobe.com/xap/1.0/t/pg/";
    /// XMP Dynamic Media namespace
    pub const XMP_DM: &str = "http://ns.adobe.com/xmp/1.0/DynamicMedia/";
    /// PDF namespace
    pub const PDF: &str = "http://ns.adobe.com/pdf/1.3/";
    /// Photoshop namespace
    pub const PHOTOSHOP: &str = "http://ns.adobe.com/photoshop/1.0/";
    /// Camera Raw namespace
    pub const CAMERA_RAW: &str = "http://ns.adobe.com/camera-raw-settings/1.0/";
    /// TIFF namespace
    pub const TIFF: &str = "http://ns.adobe.com/tiff/1.0/";
    /// EXIF namespace
    pub const EXIF: &str = "http://ns.adobe.com/exif/1.0/";
    /// EXIF Aux namespace
    pub const EXIF_AUX: &str = "http://ns.adobe.com/exif/1.0/aux/";
    /// RDF namespace
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// Dublin Core prefix
    pub const DC_PREFIX: &str = "dc";
    /// XMP Basic prefix
    pub const XMP_PREFIX: &str = "xmp";
    /// XMP Rights prefix
    pub const XMP_RIGHTS_PREFIX: &str = "xmpRights";
    /// XMP Media Management prefix
    pub const XMP_MM_PREFIX: &str = "xmpMM";
    /// XMP Basic Job Ticket prefix
    pub const XMP_BJ_PREFIX: &str = "xmpBJ";
    /// XMP PagedText prefix
    pub const XMP_PAGED_PREFIX: &str = "xmpTPg";
    /// XMP Dynamic Media prefix
    pub const XMP_DM_PREFIX: &str = "xmpDM";
    /// PDF prefix
    pub const PDF_PREFIX: &str = "pdf";
    /// Photoshop prefix
    pub const PHOTOSHOP_PREFIX: &str = "photoshop";
    /// Camera Raw prefix
    pub const CAMERA_RAW_PREFIX: &str = "crs";
    /// TIFF prefix
    pub const TIFF_PREFIX: &str = "tiff";
    /// EXIF prefix
    pub const EXIF_PREFIX: &str = "exif";
    /// EXIF Aux prefix
    pub const EXIF_AUX_PREFIX: &str = "aux";
    /// RDF prefix
    pub const RDF_PREFIX: &str = "rdf";
}

/// Known schemas as (prefix, display name) pairs
const KNOWN_SCHEMAS: &[(&str, &str)] = &[
    (ns::DC_PREFIX, "Dublin Core"),
    (ns::XMP_PREFIX, "XMP Basic"),
    (ns::XMP_RIGHTS_PREFIX, "XMP Rights Management"),
    (ns::XMP_MM_PREFIX, "XMP Media Management"),
    (ns::XMP_BJ_PREFIX, "XMP Basic Job Ticket"),
    (ns::XMP_PAGED_PREFIX, "XMP Paged-Text"),
    (ns::XMP_DM_PREFIX, "XMP Dynamic Media"),
    (ns::PDF_PREFIX, "Adobe PDF"),
    (ns::PHOTOSHOP_PREFIX, "Adobe Photoshop"),
    (ns::CAMERA_RAW_PREFIX, "Camera Raw"),
    (ns::TIFF_PREFIX, "EXIF TIFF Properties"),
    (ns::EXIF_PREFIX, "EXIF Properties"),
    (ns::EXIF_AUX_PREFIX, "EXIF Additional Properties"),
];

/// Get the display name for a namespace prefix
///
/// Unknown prefixes are returned unchanged so that every group still gets a
/// label, just a less friendly one.
///
/// # Example
///
/// ```rust
/// use xmpgroups::core::schema::display_name;
///
/// assert_eq!(display_name("dc"), "Dublin Core");
/// assert_eq!(display_name("acme"), "acme");
/// ```
pub fn display_name(prefix: &str) -> &str {
    KNOWN_SCHEMAS
        .iter()
        .find(|(known, _)| *known == prefix)
        .map(|(_, name)| *name)
        .unwrap_or(prefix)
}

/// Check if a prefix has a registered display name
pub fn is_known(prefix: &str) -> bool {
    KNOWN_SCHEMAS.iter().any(|(known, _)| *known == prefix)
}

/// All known schemas as (prefix, display name) pairs
pub fn known_schemas() -> &'static [(&'static str, &'static str)] {
    KNOWN_SCHEMAS
}
