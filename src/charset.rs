//! Character sets usable for byte compaction and their ECI numbers.

use crate::error::{EncodeError, Result};

/// A character set the encoder can transcode a payload into. Each one has
/// an Extended Channel Interpretation (ECI) number that is announced to the
/// reader when the set differs from the PDF417 default (ISO-8859-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterSet {
    #[default]
    Iso8859_1,
    UsAscii,
    Utf8,
    Utf16Be,
}

impl CharacterSet {
    /// Looks up a character set by one of its usual names, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        let set = match name.trim().to_ascii_uppercase().as_str() {
            "ISO-8859-1" | "ISO8859_1" | "ISO_8859_1" | "LATIN1" => Self::Iso8859_1,
            "US-ASCII" | "ASCII" => Self::UsAscii,
            "UTF-8" | "UTF8" => Self::Utf8,
            "UTF-16BE" | "UNICODEBIGUNMARKED" => Self::Utf16Be,
            _ => return Err(EncodeError::InvalidConfiguration(
                format!("unsupported character set: {name}"))),
        };
        Ok(set)
    }

    pub const fn eci(self) -> u32 {
        match self {
            Self::Iso8859_1 => 3,
            Self::UsAscii => 27,
            Self::Utf8 => 26,
            Self::Utf16Be => 25,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Iso8859_1 => "ISO-8859-1",
            Self::UsAscii => "US-ASCII",
            Self::Utf8 => "UTF-8",
            Self::Utf16Be => "UTF-16BE",
        }
    }

    pub fn can_encode(self, c: char) -> bool {
        match self {
            Self::Iso8859_1 => (c as u32) <= 0xFF,
            Self::UsAscii => c.is_ascii(),
            Self::Utf8 | Self::Utf16Be => true,
        }
    }

    /// Transcodes `s` into this character set.
    pub fn encode(self, s: &str) -> Result<Vec<u8>> {
        if let Some(c) = s.chars().find(|&c| !self.can_encode(c)) {
            return Err(EncodeError::InvalidInput(format!(
                "non-encodable character detected: {c:?} (U+{:04X}) in {}", c as u32, self.name())));
        }

        let bytes = match self {
            Self::Iso8859_1 | Self::UsAscii => s.chars().map(|c| c as u8).collect(),
            Self::Utf8 => s.as_bytes().to_vec(),
            Self::Utf16Be => s.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        };
        Ok(bytes)
    }
}
