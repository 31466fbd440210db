//! End-to-end conversion suites: markdown in, PDF bytes out.

mod common;

use common::{contains, convert, draw_ops, TestResult};
use std::fs;
use vellum::{Converter, DrawOp};

#[test]
fn produces_a_pdf_document() -> TestResult {
    let pdf = convert("# Title\n\nSome body text.")?;
    assert!(pdf.starts_with(b"%PDF-1.7"));
    assert!(contains(&pdf, b"(Title)"));
    assert!(contains(&pdf, b"(body)"));
    Ok(())
}

#[test]
fn empty_input_still_exports_one_page() -> TestResult {
    let pdf = convert("")?;
    assert!(pdf.starts_with(b"%PDF-1.7"));
    assert!(contains(&pdf, b"/Count 1"));
    Ok(())
}

#[test]
fn page_count_matches_page_breaks_in_the_op_stream() -> TestResult {
    // Enough lines to spill over one A4 page.
    let markdown = (0..120).map(|i| format!("line number {}", i)).collect::<Vec<_>>().join("\n");

    let ops = draw_ops(&markdown)?;
    let breaks = ops.iter().filter(|op| matches!(op, DrawOp::AdvancePage)).count();
    assert!(breaks >= 1, "120 body lines must not fit on a single page");

    let pdf = convert(&markdown)?;
    let marker = format!("/Count {}", breaks + 1);
    assert!(contains(&pdf, marker.as_bytes()), "expected {marker} in the page tree");
    Ok(())
}

#[test]
fn hyperlinks_become_annotations() -> TestResult {
    let pdf = convert("a [link](http://example.com/x) here")?;
    assert!(contains(&pdf, b"/Link"));
    assert!(contains(&pdf, b"(http://example.com/x)"));
    Ok(())
}

#[test]
fn blockquotes_and_code_render_with_fills() -> TestResult {
    let pdf = convert("> quoted words\n\nuse `styled_code` inline")?;
    assert!(contains(&pdf, b"(quoted)"));
    assert!(contains(&pdf, b"(styled_code)"));
    assert!(contains(&pdf, b"/Courier"));
    Ok(())
}

#[test]
fn conversion_is_deterministic() -> TestResult {
    let markdown = "# A\n\n**b** *c* `d`\n> e\n[f](http://g)";
    let first = draw_ops(markdown)?;
    let second = draw_ops(markdown)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn unresolvable_image_aborts_with_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.pdf");

    let converter = Converter::new();
    let result = converter.generate_to_file("before\n![x](no-such-image.png)\nafter", &target);

    assert!(result.is_err());
    assert!(!target.exists(), "a failed conversion must not leave a partial file");
}

#[test]
fn successful_conversion_writes_the_file() -> TestResult {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.pdf");

    Converter::new().generate_to_file("# Written\n\nto disk", &target)?;

    let bytes = fs::read(&target)?;
    assert!(bytes.starts_with(b"%PDF-1.7"));
    Ok(())
}
