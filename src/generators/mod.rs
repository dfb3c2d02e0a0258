pub mod bitfield;
pub mod row;
pub mod generator;

pub use bitfield::Bitfield;
pub use row::BarcodeRow;
pub use generator::{
    Dimensions, SymbolCodewordGenerator, SymbolConstraints, START_PAT, END_PAT,
    MIN_ROWS, MAX_ROWS, MIN_COLS, MAX_COLS, MAX_LEVEL,
};
