//! Benchmarks for docxtext loading and extraction.
//!
//! Run with: cargo bench
//!
//! Synthetic documents mix body paragraphs with one small table per ten
//! paragraphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docxtext::{ExtractOptions, MergedCells, TableOrder};
use std::io::Cursor;

/// Creates a synthetic DOCX document with the given number of paragraphs.
fn create_test_docx(paragraph_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#,
    )
    .unwrap();

    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>"#,
    );

    for i in 0..paragraph_count {
        content.push_str(&format!(
            r#"
    <w:p>
      <w:r>
        <w:t>This is paragraph {} with some test content for benchmarking purposes.</w:t>
      </w:r>
    </w:p>"#,
            i
        ));

        if i % 10 == 9 {
            content.push_str(
                r#"
    <w:tbl>
      <w:tr>
        <w:tc><w:tcPr><w:gridSpan w:val="2"/></w:tcPr><w:p><w:r><w:t>Header</w:t></w:r></w:p></w:tc>
      </w:tr>
      <w:tr>
        <w:tc><w:tcPr><w:vMerge w:val="restart"/></w:tcPr><w:p><w:r><w:t>Key</w:t></w:r></w:p></w:tc>
        <w:tc><w:p><w:r><w:t>First value</w:t></w:r></w:p></w:tc>
      </w:tr>
      <w:tr>
        <w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc>
        <w:tc><w:p><w:r><w:t>Second value</w:t></w:r></w:p></w:tc>
      </w:tr>
    </w:tbl>"#,
            );
        }
    }

    content.push_str(
        r#"
  </w:body>
</w:document>"#,
    );

    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

/// Benchmark loading a package into the document model.
fn bench_docx_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_loading");

    for para_count in [10, 100, 500, 1000].iter() {
        let data = create_test_docx(*para_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &data,
            |b, data| {
                b.iter(|| {
                    let _ = docxtext::load_bytes(black_box(data));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark text extraction from a loaded document.
fn bench_text_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_extraction");

    let interleaved = ExtractOptions::new()
        .with_table_order(TableOrder::Interleaved)
        .with_merged_cells(MergedCells::Once);

    for para_count in [10, 100, 500, 1000].iter() {
        let data = create_test_docx(*para_count);
        let document = docxtext::load_bytes(&data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("default", para_count),
            &document,
            |b, doc| {
                b.iter(|| {
                    let _ = docxtext::extract_text(black_box(doc));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("interleaved", para_count),
            &document,
            |b, doc| {
                b.iter(|| {
                    let _ = docxtext::extract::extract_text_with_options(black_box(doc), &interleaved);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_docx_loading, bench_text_extraction);
criterion_main!(benches);
