//! Barcode writers producing monochrome [BitMatrix] rasters.
//!
//! Two symbologies are available:
//! - PDF417, through [Pdf417Writer]. The payload is compacted into data
//!   codewords by [high_level], and the layout of the symbol (error
//!   correction, row indicators, codeword tables) is delegated to a
//!   [SymbolCodewordGenerator] that fills a [BarcodeMatrix].
//! - Code 39, through [Code39Writer], including the full ASCII extension.
//!
//! ```
//! use barwriter::{BarcodeFormat, Code39Writer, EncodeHints, Writer};
//!
//! let bits = Code39Writer::new()
//!     .encode("CODE 39", BarcodeFormat::Code39, 0, 0, &EncodeHints::default())
//!     .unwrap();
//! assert_eq!(bits.width(), 25 + 13 * 7 + 10);
//! ```
//!
//! With the `embedded-graphics` feature (on by default), a [BitMatrix] can
//! be drawn on any `DrawTarget<Color = BinaryColor>`.

pub mod bit_matrix;
pub mod builder;
pub mod charset;
pub mod error;
pub mod generators;
pub mod high_level;
pub mod oned;
pub mod writer;

pub use bit_matrix::BitMatrix;
pub use builder::BarcodeMatrix;
pub use charset::CharacterSet;
pub use error::{EncodeError, Result};
pub use generators::{Dimensions, SymbolCodewordGenerator, SymbolConstraints};
pub use high_level::Compaction;
pub use oned::{Code39Writer, PatternRenderer};
pub use writer::{EncodeHintType, EncodeHints, Pdf417Writer, Writer};

/// Symbologies known to the writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarcodeFormat {
    Code39,
    Pdf417,
}
