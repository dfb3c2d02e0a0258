use crate::builder::BarcodeMatrix;
use crate::error::{EncodeError, Result};
use crate::generators::bitfield::Bitfield;

pub const START_PAT: Bitfield = Bitfield::new(0b11111111010101000, 17);
pub const   END_PAT: Bitfield = Bitfield::new(0b111111101000101001, 18);

/// Minimum number of rows in a PDF417 barcode.
pub const MIN_ROWS: u8 = 3;
/// Maximum number of rows in a PDF417 barcode.
pub const MAX_ROWS: u8 = 90;
/// Minimum number of data columns in a PDF417 barcode.
pub const MIN_COLS: u8 = 1;
/// Maximum number of data columns in a PDF417 barcode.
pub const MAX_COLS: u8 = 30;
/// Highest error correction level.
pub const MAX_LEVEL: u8 = 8;

/// Bounds on the symbol layout, forwarded untouched to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub min_cols: u8,
    pub max_cols: u8,
    pub min_rows: u8,
    pub max_rows: u8,
}

impl Dimensions {
    pub fn new(min_cols: u8, max_cols: u8, min_rows: u8, max_rows: u8) -> Result<Self> {
        let cols_ok = MIN_COLS <= min_cols && min_cols <= max_cols && max_cols <= MAX_COLS;
        let rows_ok = MIN_ROWS <= min_rows && min_rows <= max_rows && max_rows <= MAX_ROWS;
        if !cols_ok || !rows_ok {
            return Err(EncodeError::InvalidConfiguration(format!(
                "invalid dimensions: columns {min_cols}..={max_cols}, rows {min_rows}..={max_rows}")));
        }
        Ok(Self { min_cols, max_cols, min_rows, max_rows })
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { min_cols: MIN_COLS, max_cols: MAX_COLS, min_rows: MIN_ROWS, max_rows: MAX_ROWS }
    }
}

/// What the caller asked for, passed on to the [SymbolCodewordGenerator].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolConstraints {
    pub error_correction_level: u8,
    /// Compact (truncated) PDF417: rows end with a single stop module.
    pub compact: bool,
    pub dimensions: Option<Dimensions>,
}

/// Turns data codewords into a filled [BarcodeMatrix]: adds the length
/// descriptor, padding and error correction codewords, picks the layout and
/// writes every row (start pattern, indicators, codewords, stop pattern).
///
/// Rows are produced with [BarcodeMatrix::start_row], once per row, in
/// order.
pub trait SymbolCodewordGenerator {
    fn generate(&self, codewords: &[u16], constraints: &SymbolConstraints) -> Result<BarcodeMatrix>;
}

impl<G: SymbolCodewordGenerator + ?Sized> SymbolCodewordGenerator for &G {
    fn generate(&self, codewords: &[u16], constraints: &SymbolConstraints) -> Result<BarcodeMatrix> {
        (**self).generate(codewords, constraints)
    }
}
