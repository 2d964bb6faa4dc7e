//! PDF metadata stream acquisition
//!
//! PDF XMP Storage:
//! - XMP is stored in a Metadata stream object in the document catalog
//! - The XMP packet is embedded with standard markers:
//!   `<?xpacket begin="..." id="W5M0MpCehiHzreSzNTczkc9d"?>` ... `<?xpacket end="w"?>`
//!
//! Reference: Adobe XMP Specification Part 3 - Storage in Files

use crate::core::error::{XmpError, XmpResult};
use crate::core::group::GroupContainer;
use crate::core::walker::XmpExtractor;
use lopdf::{Document, Object};
use std::io::{Read, Seek};
use std::path::Path;

/// PDF file signature
const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// Check the PDF signature without consuming the reader
pub fn is_pdf<R: Read + Seek>(reader: &mut R) -> XmpResult<bool> {
    let mut header = [0u8; 5];
    if reader.read_exact(&mut header).is_err() {
        reader.rewind()?;
        return Ok(false);
    }
    reader.rewind()?;
    Ok(header == PDF_SIGNATURE)
}

/// Read the raw XMP packet from a PDF document
///
/// # Returns
///
/// * `Ok(Some(bytes))` with the (decompressed when possible) Metadata stream
/// * `Ok(None)` if the catalog has no Metadata stream
/// * `Err(XmpError::Io)` if the document cannot be loaded
pub fn read_metadata_stream<R: Read>(reader: R) -> XmpResult<Option<Vec<u8>>> {
    let doc = Document::load_from(reader).map_err(|e| load_error("Failed to load PDF", e))?;

    let catalog = doc
        .catalog()
        .map_err(|e| load_error("Failed to get PDF catalog", e))?;

    let metadata_ref = match catalog.get(b"Metadata") {
        Ok(obj) => match obj.as_reference() {
            Ok(r) => r,
            Err(_) => return Ok(None),
        },
        Err(_) => return Ok(None),
    };

    let metadata_obj = doc
        .get_object(metadata_ref)
        .map_err(|e| load_error("Failed to get metadata object", e))?;

    match metadata_obj {
        // XMP streams are usually stored uncompressed
        Object::Stream(stream) => Ok(Some(
            stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone()),
        )),
        _ => Ok(None),
    }
}

/// Extract schema groups from the XMP packet of a PDF document
///
/// Returns `Ok(None)` when the document carries no (or an empty) packet.
pub fn extract_pdf<R: Read>(reader: R) -> XmpResult<Option<GroupContainer>> {
    let Some(packet) = read_metadata_stream(reader)? else {
        return Ok(None);
    };
    if packet.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    log::debug!("PDF metadata stream of {} bytes", packet.len());
    XmpExtractor::new().extract_bytes(&packet).map(Some)
}

/// Extract schema groups from the XMP packet of a PDF file on disk
pub fn extract_pdf_file<P: AsRef<Path>>(path: P) -> XmpResult<Option<GroupContainer>> {
    let file = std::fs::File::open(path)?;
    extract_pdf(std::io::BufReader::new(file))
}

fn load_error(context: &str, err: lopdf::Error) -> XmpError {
    XmpError::Io(std::io::Error::other(format!("{}: {}", context, err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Stream};
    use std::io::Cursor;

    /// Build a one-page PDF, optionally with a Metadata stream
    fn create_pdf(xmp: Option<&str>) -> Vec<u8> {
        let mut doc = Document::with_version("1.4");

        let pages_id = doc.new_object_id();
        let page_id = doc.new_object_id();

        let page = dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(page_id, Object::Dictionary(page));

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        };
        if let Some(xmp) = xmp {
            let metadata_stream = Stream::new(
                dictionary! {
                    "Type" => "Metadata",
                    "Subtype" => "XML",
                },
                xmp.as_bytes().to_vec(),
            );
            let metadata_id = doc.add_object(Object::Stream(metadata_stream));
            catalog.set("Metadata", Object::Reference(metadata_id));
        }
        let catalog_id = doc.add_object(Object::Dictionary(catalog));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    const PACKET: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
  <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
    <rdf:Description rdf:about=""
      xmlns:pdf="http://ns.adobe.com/pdf/1.3/"
      pdf:Producer="Test Producer">
    </rdf:Description>
    <rdf:Description rdf:about=""
      xmlns:dc="http://purl.org/dc/elements/1.1/">
      <dc:format>application/pdf</dc:format>
    </rdf:Description>
  </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;

    #[test]
    fn test_is_pdf() {
        let mut reader = Cursor::new(create_pdf(None));
        assert!(is_pdf(&mut reader).unwrap());
        assert_eq!(reader.position(), 0);

        let mut jpeg = Cursor::new(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
        assert!(!is_pdf(&mut jpeg).unwrap());

        let mut short = Cursor::new(vec![0x25, 0x50]);
        assert!(!is_pdf(&mut short).unwrap());
    }

    #[test]
    fn test_read_metadata_stream() {
        let pdf = create_pdf(Some(PACKET));
        let packet = read_metadata_stream(Cursor::new(pdf)).unwrap().unwrap();
        assert_eq!(packet, PACKET.as_bytes());
    }

    #[test]
    fn test_extract_pdf() {
        let pdf = create_pdf(Some(PACKET));
        let groups = extract_pdf(Cursor::new(pdf)).unwrap().unwrap();

        let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["Adobe PDF", "Dublin Core"]);
        assert_eq!(
            groups.find("pdf").and_then(|g| g.get("Producer")),
            Some("Test Producer")
        );
        assert_eq!(
            groups.find("dc").and_then(|g| g.get("format")),
            Some("application/pdf")
        );
    }

    #[test]
    fn test_pdf_without_metadata() {
        let pdf = create_pdf(None);
        assert!(read_metadata_stream(Cursor::new(pdf.clone()))
            .unwrap()
            .is_none());
        assert!(extract_pdf(Cursor::new(pdf)).unwrap().is_none());
    }

    #[test]
    fn test_blank_metadata_stream() {
        let pdf = create_pdf(Some("  \n "));
        assert!(extract_pdf(Cursor::new(pdf)).unwrap().is_none());
    }

    #[test]
    fn test_malformed_packet_is_processing_error() {
        let pdf = create_pdf(Some(
            r#"<rdf:Description xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>x</rdf:Description>"#,
        ));
        let err = extract_pdf(Cursor::new(pdf)).unwrap_err();
        assert!(err.is_processing());
    }

    #[test]
    fn test_invalid_pdf_is_io_error() {
        let result = extract_pdf(Cursor::new(vec![0x00, 0x01, 0x02, 0x03, 0x04]));
        assert!(matches!(result, Err(XmpError::Io(_))));
    }
}
