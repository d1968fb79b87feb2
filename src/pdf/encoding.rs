//! WinAnsi text encoding for the standard Type1 fonts.

use unicode_normalization::UnicodeNormalization;

/// Byte written for characters WinAnsi cannot represent.
const REPLACEMENT: u8 = b'?';

/// Encode text as WinAnsi bytes.
///
/// Input is NFC-normalized first so decomposed accents map onto their
/// Latin-1 code points. Returns the bytes and the number of characters that
/// had to be replaced.
pub fn encode_win_ansi(text: &str) -> (Vec<u8>, usize) {
    let mut bytes = Vec::with_capacity(text.len());
    let mut replaced = 0;

    for ch in text.nfc() {
        match win_ansi_byte(ch) {
            Some(b) => bytes.push(b),
            None => {
                bytes.push(REPLACEMENT);
                replaced += 1;
            }
        }
    }

    (bytes, replaced)
}

/// Decode WinAnsi bytes back to text.
pub fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => WIN_ANSI_HIGH
                .iter()
                .find(|(code, _)| *code == b)
                .map(|(_, ch)| *ch)
                .unwrap_or(b as char),
            _ => b as char,
        })
        .collect()
}

/// Code points in 0x80..=0x9F that differ from Latin-1. 0x81, 0x8D, 0x8F,
/// 0x90 and 0x9D are unassigned.
const WIN_ANSI_HIGH: [(u8, char); 27] = [
    (0x80, '\u{20AC}'),
    (0x82, '\u{201A}'),
    (0x83, '\u{0192}'),
    (0x84, '\u{201E}'),
    (0x85, '\u{2026}'),
    (0x86, '\u{2020}'),
    (0x87, '\u{2021}'),
    (0x88, '\u{02C6}'),
    (0x89, '\u{2030}'),
    (0x8A, '\u{0160}'),
    (0x8B, '\u{2039}'),
    (0x8C, '\u{0152}'),
    (0x8E, '\u{017D}'),
    (0x91, '\u{2018}'),
    (0x92, '\u{2019}'),
    (0x93, '\u{201C}'),
    (0x94, '\u{201D}'),
    (0x95, '\u{2022}'),
    (0x96, '\u{2013}'),
    (0x97, '\u{2014}'),
    (0x98, '\u{02DC}'),
    (0x99, '\u{2122}'),
    (0x9A, '\u{0161}'),
    (0x9B, '\u{203A}'),
    (0x9C, '\u{0153}'),
    (0x9E, '\u{017E}'),
    (0x9F, '\u{0178}'),
];

fn win_ansi_byte(ch: char) -> Option<u8> {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(_, c)| *c == ch)
            .map(|(code, _)| *code),
    }
}
