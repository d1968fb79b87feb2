//! Standard Type1 font faces and their glyph metrics.

use serde::{Deserialize, Serialize};

/// Advance widths (1/1000 em) for printable ASCII 0x20..=0x7E in Helvetica.
/// Helvetica-Oblique shares these widths.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70
];

/// Advance widths (1/1000 em) for printable ASCII 0x20..=0x7E in Helvetica-Bold.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70
];

/// Width used for glyphs outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

/// One of the standard font faces used by reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    /// Helvetica
    #[default]
    Regular,
    /// Helvetica-Bold
    Bold,
    /// Helvetica-Oblique
    Italic,
}

impl FontFace {
    /// Every face, in resource order.
    pub const ALL: [FontFace; 3] = [FontFace::Regular, FontFace::Bold, FontFace::Italic];

    /// PostScript base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
            FontFace::Italic => "Helvetica-Oblique",
        }
    }

    /// Name of the face in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
            FontFace::Italic => "F3",
        }
    }

    /// Look up a face by its resource name.
    pub fn from_resource_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.resource_name() == name)
    }

    /// Advance width of a character in 1/1000 em.
    pub fn char_width(self, ch: char) -> u16 {
        let table = match self {
            FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
            FontFace::Regular | FontFace::Italic => &HELVETICA_WIDTHS,
        };
        match ch as u32 {
            code @ 0x20..=0x7E => table[(code - 0x20) as usize],
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of a string in points at the given font size.
    pub fn string_width_pt(self, text: &str, size_pt: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size_pt / 1000.0
    }
}
