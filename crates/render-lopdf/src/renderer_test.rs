#![cfg(test)]

use crate::images::ImageCache;
use crate::renderer::LopdfRenderer;
use std::sync::Arc;
use vellum_layout::DrawOp;
use vellum_render_core::DocumentRenderer;
use vellum_style::{PageMetrics, StyleTable};
use vellum_types::TokenKind;

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn export(ops: &[DrawOp]) -> Vec<u8> {
    let mut renderer = LopdfRenderer::new(PageMetrics::a4(), Arc::new(ImageCache::new()));
    renderer.render(ops).unwrap();
    let mut buffer = Vec::new();
    renderer.export_to(&mut buffer).unwrap();
    buffer
}

fn word(text: &str) -> DrawOp {
    DrawOp::DrawWord { text: text.to_string(), width: 40.0, height: 17.0, filled: false }
}

#[test]
fn exports_a_pdf_header_even_for_empty_input() {
    let buffer = export(&[]);
    assert!(buffer.starts_with(b"%PDF-1.7"));
    assert!(contains(&buffer, b"/Count 1"));
}

#[test]
fn words_land_in_the_content_stream() {
    let style = *StyleTable::new().style_for(TokenKind::Paragraph);
    let buffer = export(&[
        DrawOp::SetStyle(style),
        word("hello"),
        word("world"),
        DrawOp::AdvanceLine(17.0),
    ]);
    assert!(contains(&buffer, b"(hello)"));
    assert!(contains(&buffer, b"(world)"));
    assert!(contains(&buffer, b"/Helvetica"));
}

#[test]
fn advance_page_creates_a_second_page() {
    let buffer = export(&[word("one"), DrawOp::AdvancePage, word("two")]);
    assert!(contains(&buffer, b"/Count 2"));
}

#[test]
fn link_regions_become_uri_annotations() {
    let buffer = export(&[
        DrawOp::DrawLinkRegion {
            width: 40.0,
            height: 17.0,
            target: "http://example.com".to_string(),
        },
        word("link"),
    ]);
    assert!(contains(&buffer, b"(http://example.com)"));
    assert!(contains(&buffer, b"/Link"));
}

#[test]
fn code_style_switches_to_courier() {
    let style = *StyleTable::new().style_for(TokenKind::Code);
    let buffer = export(&[
        DrawOp::SetStyle(style),
        DrawOp::DrawWord { text: "let".to_string(), width: 30.0, height: 17.0, filled: true },
    ]);
    assert!(contains(&buffer, b"/Courier"));
    // The filled background paints a rectangle.
    assert!(contains(&buffer, b" re"));
}

#[test]
fn blockquote_marker_paints_without_text() {
    let buffer = export(&[DrawOp::DrawBlockquoteMarker(17.0), word("quoted")]);
    assert!(contains(&buffer, b" re"));
    assert!(contains(&buffer, b"(quoted)"));
}

#[test]
fn missing_image_fails_the_render() {
    let mut renderer = LopdfRenderer::new(PageMetrics::a4(), Arc::new(ImageCache::new()));
    let ops = [DrawOp::DrawImage {
        source: "missing-image.jpg".to_string(),
        x: 30.0,
        y: 30.0,
        width: 100.0,
        height: 50.0,
    }];
    assert!(renderer.render(&ops).is_err());
}
