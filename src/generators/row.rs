use crate::generators::bitfield::Bitfield;

/// One logical row of a PDF417 symbol, one entry per module. Modules are
/// appended left to right through an internal position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeRow {
    row: Vec<bool>,
    location: usize,
}

impl BarcodeRow {
    pub fn new(width: usize) -> Self {
        Self { row: vec![false; width], location: 0 }
    }

    /// Returns the position the next appended module is written at.
    #[inline]
    pub fn location(&self) -> usize {
        self.location
    }

    pub fn set(&mut self, x: usize, black: bool) {
        self.row[x] = black;
    }

    /// Appends a bar (`black`) or a space of `width` modules.
    pub fn add_bar(&mut self, black: bool, width: usize) {
        self.row[self.location..self.location + width].fill(black);
        self.location += width;
    }

    /// Appends the modules of `pattern`, most significant first.
    pub fn add_pattern(&mut self, pattern: Bitfield) {
        for black in pattern.modules() {
            self.row[self.location] = black;
            self.location += 1;
        }
    }

    /// Returns the row with every module repeated `scale` times.
    pub fn scaled(&self, scale: usize) -> Vec<bool> {
        self.row.iter()
            .flat_map(|&bit| core::iter::repeat(bit).take(scale))
            .collect()
    }
}
