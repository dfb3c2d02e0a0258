//! Code 39, with the "full ASCII" extension for characters outside of its
//! 43 character alphabet.

use crate::bit_matrix::BitMatrix;
use crate::error::{EncodeError, Result};
use crate::oned::{append_pattern, PatternRenderer};
use crate::writer::{EncodeHints, Writer};
use crate::BarcodeFormat;

/// Characters Code 39 encodes natively, in table order.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Wide (1) / narrow (0) flags of the 9 elements of each character of
/// [ALPHABET], first element in the most significant of the 9 bits.
pub const CHARACTER_ENCODINGS: [u16; 43] = [
    0x034, 0x121, 0x061, 0x160, 0x031, 0x130, 0x070, 0x025, 0x124, 0x064, // 0-9
    0x109, 0x049, 0x148, 0x019, 0x118, 0x058, 0x00D, 0x10C, 0x04C, 0x01C, // A-J
    0x103, 0x043, 0x142, 0x013, 0x112, 0x052, 0x007, 0x106, 0x046, 0x016, // K-T
    0x181, 0x0C1, 0x1C0, 0x091, 0x190, 0x0D0, 0x085, 0x184, 0x0C4, 0x0A8, // U-$
    0x0A2, 0x08A, 0x02A, // /-%
];

/// The `*` start/stop character.
pub const ASTERISK_ENCODING: u16 = 0x094;

/// Longest payload accepted, after the full ASCII conversion.
pub const MAX_LENGTH: usize = 80;

const NARROW_WHITE: [u8; 1] = [1];

#[derive(Debug, Clone, Copy, Default)]
pub struct Code39Writer;

impl Code39Writer {
    pub const fn new() -> Self {
        Self
    }
}

fn alphabet_index(c: char) -> Option<usize> {
    ALPHABET.chars().position(|a| a == c)
}

/// Element widths (narrow = 1, wide = 2) of a 9 bit character encoding.
fn to_widths(encoding: u16) -> [u8; 9] {
    core::array::from_fn(|i| if encoding & (1 << (8 - i)) == 0 { 1 } else { 2 })
}

fn check_length(length: usize, extended: bool) -> Result<()> {
    if length > MAX_LENGTH {
        let mode = if extended { " (extended full ASCII mode)" } else { "" };
        return Err(EncodeError::InvalidInput(format!(
            "Requested contents should be less than {MAX_LENGTH} digits long, but got {length}{mode}")));
    }
    Ok(())
}

/// Rewrites every character of `contents` with the full ASCII escapes
/// (`$`, `%`, `/` and `+` followed by a letter).
pub fn to_extended(contents: &str) -> Result<String> {
    let mut extended = String::with_capacity(contents.len() * 2);
    for c in contents.chars() {
        let (prefix, base, first) = match c {
            '\0' => { extended.push_str("%U"); continue; },
            ' ' | '-' | '.' | '0'..='9' | 'A'..='Z' => { extended.push(c); continue; },
            '@' => { extended.push_str("%V"); continue; },
            '`' => { extended.push_str("%W"); continue; },
            '\u{01}'..='\u{1A}' => ('$', b'A', 0x01),
            '\u{1B}'..='\u{1F}' => ('%', b'A', 0x1B),
            '!'..=',' | '/' | ':' => ('/', b'A', b'!'),
            ';'..='?' => ('%', b'F', b';'),
            '['..='_' => ('%', b'K', b'['),
            'a'..='z' => ('+', b'A', b'a'),
            '{'..='\u{7F}' => ('%', b'P', b'{'),
            _ => return Err(EncodeError::InvalidInput(
                format!("Requested content contains a non-encodable character: {c:?}"))),
        };
        extended.push(prefix);
        extended.push((base + (c as u8 - first)) as char);
    }
    Ok(extended)
}

impl PatternRenderer for Code39Writer {
    fn supported_formats(&self) -> &'static [BarcodeFormat] {
        &[BarcodeFormat::Code39]
    }

    fn encode_pattern(&self, contents: &str) -> Result<Vec<bool>> {
        check_length(contents.chars().count(), false)?;

        let converted;
        let contents = if contents.chars().all(|c| alphabet_index(c).is_some()) {
            contents
        } else {
            converted = to_extended(contents)?;
            log::debug!("{contents:?} converted to full ASCII {converted:?}");
            check_length(converted.len(), true)?;
            converted.as_str()
        };

        let length = contents.chars().count();
        let mut result = vec![false; 24 + 1 + 13 * length];

        let asterisk = to_widths(ASTERISK_ENCODING);
        let mut pos = append_pattern(&mut result, 0, &asterisk, true);
        pos += append_pattern(&mut result, pos, &NARROW_WHITE, false);
        // append next character to the pattern
        for c in contents.chars() {
            let Some(index) = alphabet_index(c) else {
                unreachable!("{c:?} is outside of the alphabet after conversion")
            };
            pos += append_pattern(&mut result, pos, &to_widths(CHARACTER_ENCODINGS[index]), true);
            pos += append_pattern(&mut result, pos, &NARROW_WHITE, false);
        }
        append_pattern(&mut result, pos, &asterisk, true);

        Ok(result)
    }
}

impl Writer for Code39Writer {
    fn encode(&self, contents: &str, format: BarcodeFormat, width: i32, height: i32,
              hints: &EncodeHints) -> Result<BitMatrix> {
        self.render(contents, format, width, height, hints)
    }
}
