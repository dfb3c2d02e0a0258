//! Error type shared by every writer in the crate.

use thiserror::Error;

use crate::BarcodeFormat;

/// Reasons an encode call can fail. All of them are input validation
/// failures: nothing is retried and no partial raster is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Empty payload, payload too long or a character that cannot be encoded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Negative target size.
    #[error("Negative size is not allowed. Input: {width}x{height}")]
    InvalidGeometry { width: i32, height: i32 },

    /// The writer does not implement the requested symbology.
    #[error("Can only encode {supported:?}, but got {requested:?}")]
    UnsupportedFormat {
        requested: BarcodeFormat,
        supported: &'static [BarcodeFormat],
    },

    /// Unknown character set, ECI value out of range or malformed hint.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = core::result::Result<T, EncodeError>;
