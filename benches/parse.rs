use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xmpgroups::XmpExtractor;

// Simple XMP packet with a single attribute property
const SIMPLE_XMP: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
                   xmlns:xmp="http://ns.adobe.com/xap/1.0/"
                   xmp:CreatorTool="Adobe Photoshop CS2 Windows"/>
</rdf:RDF>
<?xpacket end="w"?>"#;

// Complex XMP packet with several schemas, element properties and arrays
const COMPLEX_XMP: &str = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about=""
                   xmlns:xmp="http://ns.adobe.com/xap/1.0/"
                   xmlns:xmpMM="http://ns.adobe.com/xap/1.0/mm/"
                   xmlns:tiff="http://ns.adobe.com/tiff/1.0/"
                   xmlns:exif="http://ns.adobe.com/exif/1.0/"
                   xmlns:photoshop="http://ns.adobe.com/photoshop/1.0/"
                   xmp:CreatorTool="Adobe Photoshop CS2 Windows"
                   xmp:CreateDate="2006-04-25T15:32:01+02:00"
                   xmp:ModifyDate="2006-04-27T15:38:36.655+02:00"
                   xmpMM:DocumentID="uuid:FE607D9B5FD4DA118B7787757E22306B"
                   tiff:Orientation="1"
                   exif:PixelXDimension="200"
                   photoshop:ColorMode="3">
    <xmp:MetadataDate>2006-04-26T16:47:10+02:00</xmp:MetadataDate>
    <xmpMM:InstanceID>uuid:BF664E7B33D5DA119129F691B53239AD</xmpMM:InstanceID>
  </rdf:Description>
  <rdf:Description rdf:about=""
                   xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:format>image/jpeg</dc:format>
    <dc:title>
      <rdf:Alt>
        <rdf:li xml:lang="x-default">Purple Square</rdf:li>
      </rdf:Alt>
    </dc:title>
    <dc:subject>
      <rdf:Bag>
        <rdf:li>purple</rdf:li>
        <rdf:li>square</rdf:li>
        <rdf:li>test</rdf:li>
      </rdf:Bag>
    </dc:subject>
  </rdf:Description>
</rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;

fn bench_extract_simple(c: &mut Criterion) {
    c.bench_function("extract_simple", |b| {
        let mut extractor = XmpExtractor::new();
        b.iter(|| {
            let _groups = extractor.extract_str(black_box(SIMPLE_XMP)).unwrap();
        });
    });
}

fn bench_extract_complex(c: &mut Criterion) {
    c.bench_function("extract_complex", |b| {
        let mut extractor = XmpExtractor::new();
        b.iter(|| {
            let _groups = extractor.extract_str(black_box(COMPLEX_XMP)).unwrap();
        });
    });
}

fn bench_extract_fresh_extractor(c: &mut Criterion) {
    c.bench_function("extract_fresh_extractor", |b| {
        b.iter(|| {
            let _groups = xmpgroups::extract_groups(black_box(COMPLEX_XMP.as_bytes())).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_extract_simple,
    bench_extract_complex,
    bench_extract_fresh_extractor
);
criterion_main!(benches);
