//! Advance widths for the base-14 faces the renderer embeds, in 1/1000 em.
//!
//! The tables cover the printable ASCII range of the standard AFM files;
//! anything outside it measures as a typical wide glyph. Courier is
//! fixed-pitch, so it needs no table at all.

use vellum_layout::TextMeasurer;
use vellum_style::{FontFamily, FontWeight};

const COURIER_ADVANCE: f32 = 600.0;

/// Fallback advance for characters outside the table range.
const DEFAULT_ADVANCE: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    //  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    //  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // {    |    }    ~
    389, 280, 389, 584,
];

fn advance(table: &[u16; 95], c: char) -> u16 {
    match (c as u32).checked_sub(32) {
        Some(idx) if (idx as usize) < table.len() => table[idx as usize],
        _ => DEFAULT_ADVANCE,
    }
}

/// Deterministic measurement over the embedded AFM tables. Oblique
/// variants share their upright widths, which is why the slant never
/// appears in the signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base14Metrics;

impl Base14Metrics {
    pub fn new() -> Self {
        Self
    }
}

impl TextMeasurer for Base14Metrics {
    fn measure(&self, family: FontFamily, weight: FontWeight, size: f32, text: &str) -> f32 {
        let thousandths: f32 = match family {
            FontFamily::Courier => text.chars().count() as f32 * COURIER_ADVANCE,
            FontFamily::Helvetica => {
                let table = if weight.is_bold() { &HELVETICA_BOLD } else { &HELVETICA };
                text.chars().map(|c| advance(table, c) as f32).sum()
            }
        };
        thousandths * size / 1000.0
    }
}
