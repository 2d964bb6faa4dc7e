//! XMP stream walker
//!
//! Single pass over the XML event stream of an XMP packet. Every
//! `Description` element contributes its namespace declarations as groups,
//! its attributes as metadata, and its child elements as properties.
//!
//! The walker is an explicit state machine:
//!
//! ```text
//! ScanningForDescription --Description--> InDescriptionAttributes
//! InDescriptionAttributes ---------------> InDescriptionBody (or back to scanning if empty)
//! InDescriptionBody ------child start----> InProperty
//! InDescriptionBody ------end tag--------> ScanningForDescription
//! InProperty -------------matching end---> InDescriptionBody
//! ```
//!
//! Nested elements inside a property (`rdf:Bag`, `rdf:Seq`, `rdf:Alt`,
//! structures) are walked past but not flattened into the property value.

use crate::core::error::{XmpError, XmpResult};
use crate::core::group::GroupContainer;
use crate::core::options::ExtractOptions;
use crate::core::tracker::NamespaceTracker;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Extracts schema groups from XMP packets
///
/// The extractor keeps a reusable [`NamespaceTracker`], which is reset for
/// every call. It therefore needs `&mut self` and must not be shared between
/// simultaneous extractions; constructing one per thread is cheap.
///
/// # Example
///
/// ```rust
/// use xmpgroups::XmpExtractor;
///
/// let xmp = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
///   <rdf:Description xmlns:dc="http://purl.org/dc/elements/1.1/" dc:creator="Jane Doe">
///     <dc:title>Report</dc:title>
///   </rdf:Description>
/// </rdf:RDF>"#;
///
/// let groups = XmpExtractor::new().extract_str(xmp)?;
/// let dc = groups.find_by_name("Dublin Core").unwrap();
/// assert_eq!(dc.get("creator"), Some("Jane Doe"));
/// assert_eq!(dc.get("title"), Some("Report"));
/// # Ok::<(), xmpgroups::XmpError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct XmpExtractor {
    tracker: NamespaceTracker,
    options: ExtractOptions,
}

impl XmpExtractor {
    /// Create an extractor with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with the given options
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            tracker: NamespaceTracker::new(),
            options,
        }
    }

    /// Options used by this extractor
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract schema groups from a stream containing an XMP packet
    ///
    /// On failure no partial result is returned: I/O errors while reading
    /// the source surface as [`XmpError::Io`], malformed XML as
    /// [`XmpError::Processing`].
    pub fn extract<R: BufRead>(&mut self, source: R) -> XmpResult<GroupContainer> {
        self.tracker.clear();

        let mut reader = Reader::from_reader(source);
        reader.config_mut().check_end_names = self.options.check_end_names;

        let walker = Walker {
            reader,
            buf: Vec::new(),
            tracker: &mut self.tracker,
            groups: GroupContainer::new(),
            options: self.options,
            scopes: Vec::new(),
        };
        let result = walker.run();

        self.tracker.clear();
        result
    }

    /// Extract schema groups from an in-memory XMP packet
    pub fn extract_bytes(&mut self, bytes: &[u8]) -> XmpResult<GroupContainer> {
        self.extract(bytes)
    }

    /// Extract schema groups from an XMP packet string
    pub fn extract_str(&mut self, xmp: &str) -> XmpResult<GroupContainer> {
        self.extract_bytes(xmp.as_bytes())
    }
}

enum State {
    ScanningForDescription,
    InDescriptionAttributes {
        element: BytesStart<'static>,
        has_body: bool,
    },
    InDescriptionBody,
    InProperty(Property),
}

/// A property element being consumed
struct Property {
    schema: Option<String>,
    tag: String,
    /// Depth of nested elements below the property element
    depth: usize,
    nested: bool,
    value: String,
    run: String,
}

impl Property {
    fn open(element: &BytesStart<'_>) -> XmpResult<Self> {
        let name = element.name();
        let (schema, tag) = split_qname(decode_utf8(name.as_ref())?);
        Ok(Self {
            schema: schema.map(str::to_string),
            tag: tag.to_string(),
            depth: 0,
            nested: false,
            value: String::new(),
            run: String::new(),
        })
    }

    fn push_text(&mut self, text: &str) {
        if self.depth == 0 {
            self.run.push_str(text);
        }
    }

    fn end_run(&mut self) {
        self.value.push_str(self.run.trim());
        self.run.clear();
    }
}

struct Walker<'t, R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    tracker: &'t mut NamespaceTracker,
    groups: GroupContainer,
    options: ExtractOptions,
    /// Prefixes declared by each open element outside Description bodies
    scopes: Vec<Vec<String>>,
}

impl<R: BufRead> Walker<'_, R> {
    fn run(mut self) -> XmpResult<GroupContainer> {
        let mut state = State::ScanningForDescription;
        loop {
            state = match state {
                State::ScanningForDescription => match self.scan()? {
                    Some(next) => next,
                    None => break,
                },
                State::InDescriptionAttributes { element, has_body } => {
                    self.read_description_attributes(&element, has_body)?;
                    if has_body {
                        State::InDescriptionBody
                    } else {
                        State::ScanningForDescription
                    }
                }
                State::InDescriptionBody => self.read_description_body()?,
                State::InProperty(property) => self.read_property(property)?,
            };
        }
        Ok(self.groups)
    }

    /// Advance to the next Description element; `None` at end of document
    fn scan(&mut self) -> XmpResult<Option<State>> {
        self.buf.clear();
        match self.reader.read_event_into(&mut self.buf)? {
            Event::Start(e) if is_description(&e) => {
                return Ok(Some(State::InDescriptionAttributes {
                    element: e.into_owned(),
                    has_body: true,
                }));
            }
            Event::Empty(e) if is_description(&e) => {
                return Ok(Some(State::InDescriptionAttributes {
                    element: e.into_owned(),
                    has_body: false,
                }));
            }
            // Other top-level structures are only tracked for their namespaces.
            Event::Start(e) => self.scopes.push(declared_prefixes(&e)?),
            Event::End(_) => {
                self.scopes.pop();
            }
            Event::Eof => {
                if !self.scopes.is_empty() {
                    return Err(unexpected_eof("an open element"));
                }
                return Ok(None);
            }
            _ => {}
        }
        Ok(Some(State::ScanningForDescription))
    }

    fn read_description_attributes(
        &mut self,
        element: &BytesStart<'_>,
        has_body: bool,
    ) -> XmpResult<()> {
        let declared = declared_prefixes(element)?;
        log::trace!(
            "Description element declaring {} namespace(s)",
            declared.len()
        );

        if self.options.inherit_namespaces {
            for prefix in self.scopes.iter().flatten() {
                self.tracker.ensure_group(prefix, &mut self.groups);
            }
        }
        for prefix in &declared {
            self.tracker.ensure_group(prefix, &mut self.groups);
        }

        for attr in element.attributes() {
            let attr = attr?;
            let key = decode_utf8(attr.key.as_ref())?;
            if is_namespace_declaration(key) {
                continue;
            }
            let (Some(prefix), tag) = split_qname(key) else {
                continue;
            };
            let Some(index) = self.tracker.lookup(prefix) else {
                log::debug!("dropping attribute '{}': no group for its prefix", key);
                continue;
            };

            let value = attr.unescape_value()?.into_owned();
            self.groups.add_metadata(index, tag, value);
        }

        if has_body {
            self.scopes.push(declared);
        }
        Ok(())
    }

    fn read_description_body(&mut self) -> XmpResult<State> {
        self.buf.clear();
        match self.reader.read_event_into(&mut self.buf)? {
            Event::Start(e) => return Ok(State::InProperty(Property::open(&e)?)),
            Event::Empty(e) => record(self.tracker, &mut self.groups, Property::open(&e)?),
            Event::End(_) => {
                self.scopes.pop();
                return Ok(State::ScanningForDescription);
            }
            Event::Eof => return Err(unexpected_eof("a Description element")),
            _ => {}
        }
        Ok(State::InDescriptionBody)
    }

    fn read_property(&mut self, mut property: Property) -> XmpResult<State> {
        self.buf.clear();
        match self.reader.read_event_into(&mut self.buf)? {
            Event::Text(e) => property.push_text(decode_utf8(&e)?),
            Event::CData(e) => property.push_text(decode_utf8(&e)?),
            Event::GeneralRef(e) => property.push_text(&resolve_reference(&e)?),
            Event::Start(_) => {
                property.end_run();
                property.depth += 1;
                property.nested = true;
            }
            Event::Empty(_) => {
                property.end_run();
                property.nested = true;
            }
            Event::End(_) => {
                property.end_run();
                if property.depth == 0 {
                    record(self.tracker, &mut self.groups, property);
                    return Ok(State::InDescriptionBody);
                }
                property.depth -= 1;
            }
            Event::Eof => return Err(unexpected_eof("a property element")),
            // Comments and processing instructions do not split a text run.
            _ => {}
        }
        Ok(State::InProperty(property))
    }
}

/// Attach a finished property to its group, or drop it
fn record(tracker: &NamespaceTracker, groups: &mut GroupContainer, property: Property) {
    let Some(index) = property
        .schema
        .as_deref()
        .and_then(|schema| tracker.lookup(schema))
    else {
        log::debug!(
            "dropping property '{}': no group for prefix {:?}",
            property.tag,
            property.schema
        );
        return;
    };

    if property.nested && property.value.is_empty() {
        log::debug!("property '{}' has nested content, left unflattened", property.tag);
        groups.mark_unflattened(index, property.tag);
    } else {
        groups.add_metadata(index, property.tag, property.value);
    }
}

fn is_description(element: &BytesStart<'_>) -> bool {
    element
        .local_name()
        .as_ref()
        .eq_ignore_ascii_case(b"Description")
}

fn is_namespace_declaration(key: &str) -> bool {
    key == "xmlns" || key.starts_with("xmlns:")
}

/// Prefixes of the `xmlns:prefix="uri"` declarations made on an element
fn declared_prefixes(element: &BytesStart<'_>) -> XmpResult<Vec<String>> {
    let mut prefixes = Vec::new();
    for attr in element.attributes() {
        let attr = attr?;
        let key = decode_utf8(attr.key.as_ref())?;
        // Default namespace declarations have no prefix to group by.
        if let Some(prefix) = key.strip_prefix("xmlns:") {
            if !prefix.is_empty() {
                prefixes.push(prefix.to_string());
            }
        }
    }
    Ok(prefixes)
}

/// Split `prefix:local` into its parts
fn split_qname(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}

/// Resolve a character or predefined entity reference
///
/// XMP packets carry no DTD, so any other entity is undefined.
fn resolve_reference(reference: &BytesRef<'_>) -> XmpResult<String> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = decode_utf8(reference)?;
    resolve_predefined_entity(name)
        .map(str::to_string)
        .ok_or_else(|| XmpError::Processing(format!("undefined entity reference '&{};'", name)))
}

/// Decode raw packet bytes, rejecting invalid UTF-8
fn decode_utf8(bytes: &[u8]) -> XmpResult<&str> {
    std::str::from_utf8(bytes)
        .map_err(|e| XmpError::Processing(format!("invalid UTF-8 in XMP: {}", e)))
}

fn unexpected_eof(inside: &str) -> XmpError {
    XmpError::Processing(format!("unexpected end of document inside {}", inside))
}
