//! Extraction options

/// Options for XMP extraction.
///
/// Use the builder pattern to configure options.
///
/// # Example
///
/// ```rust
/// use xmpgroups::{ExtractOptions, XmpExtractor};
///
/// let mut extractor =
///     XmpExtractor::with_options(ExtractOptions::default().inherit_namespaces());
/// let groups = extractor.extract_str(
///     r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
///                 xmlns:xmp="http://ns.adobe.com/xap/1.0/">
///          <rdf:Description xmp:CreatorTool="MyApp"/>
///        </rdf:RDF>"#,
/// )?;
/// assert_eq!(groups.find("xmp").and_then(|g| g.get("CreatorTool")), Some("MyApp"));
/// # Ok::<(), xmpgroups::XmpError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ExtractOptions {
    /// Also create groups for prefixes declared on ancestors of a
    /// Description element (e.g. on `rdf:RDF`). Off by default: only the
    /// declarations made on the Description itself create groups.
    pub inherit_namespaces: bool,
    /// Reject end tags whose name does not match the open element (default: on)
    pub check_end_names: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            inherit_namespaces: false,
            check_end_names: true,
        }
    }
}

impl ExtractOptions {
    /// Register groups for namespaces inherited from ancestor elements.
    pub fn inherit_namespaces(mut self) -> Self {
        self.inherit_namespaces = true;
        self
    }

    /// Accept mismatched end tag names.
    ///
    /// Unbalanced documents are still rejected at end of input.
    pub fn lenient_end_names(mut self) -> Self {
        self.check_end_names = false;
        self
    }
}
