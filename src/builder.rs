use crate::bit_matrix::BitMatrix;
use crate::generators::row::BarcodeRow;

/// Height of a module relative to its width in the unscaled symbol.
pub const ASPECT_RATIO: usize = 4;

/// Modules taken by the start pattern, the two row indicators and the stop
/// pattern, expressed in codeword widths (17 modules each) plus the extra
/// stop module.
const OVERHEAD_COLS: usize = 4;

/// Logical module grid of a PDF417 symbol. Rows are filled one after the
/// other: [start_row](BarcodeMatrix::start_row) moves a cursor that never
/// goes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeMatrix {
    rows: Vec<BarcodeRow>,
    columns: usize,
    /// `None` until the first row is started.
    current_row: Option<usize>,
}

impl BarcodeMatrix {
    /// Creates an empty grid of `rows` rows holding `columns` data columns.
    pub fn new(rows: usize, columns: usize) -> Self {
        let width = (columns + OVERHEAD_COLS) * 17 + 1;
        Self {
            rows: (0..rows).map(|_| BarcodeRow::new(width)).collect(),
            columns,
            current_row: None,
        }
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of data columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Width of a row in modules.
    #[inline]
    pub fn width(&self) -> usize {
        (self.columns + OVERHEAD_COLS) * 17 + 1
    }

    /// Index of the row being filled, `None` before the first
    /// [start_row](BarcodeMatrix::start_row).
    #[inline]
    pub fn current_row(&self) -> Option<usize> {
        self.current_row
    }

    /// Returns `true` once every row has been started.
    pub fn is_complete(&self) -> bool {
        self.current_row.map_or(self.rows.is_empty(), |row| row + 1 == self.rows.len())
    }

    /// Moves to the next row and returns it.
    pub fn start_row(&mut self) -> &mut BarcodeRow {
        let next = self.current_row.map_or(0, |row| row + 1);
        assert!(next < self.rows.len(), "all {} rows have already been started", self.rows.len());

        self.current_row = Some(next);
        &mut self.rows[next]
    }

    /// The row being filled.
    pub fn current_row_mut(&mut self) -> &mut BarcodeRow {
        let row = self.current_row.expect("start_row must be called before writing modules");
        &mut self.rows[row]
    }

    /// Sets the module at `x` of row `y`.
    pub fn set(&mut self, x: usize, y: usize, black: bool) {
        self.rows[y].set(x, black);
    }

    pub fn matrix(&self) -> Vec<Vec<bool>> {
        self.scaled_matrix(1, 1)
    }

    /// Returns the grid with every module turned into a `x_scale` x `y_scale`
    /// block. The first logical row is the last row of the result.
    pub fn scaled_matrix(&self, x_scale: usize, y_scale: usize) -> Vec<Vec<bool>> {
        let y_max = self.rows.len() * y_scale;
        (0..y_max)
            .map(|y| self.rows[(y_max - 1 - y) / y_scale].scaled(x_scale))
            .collect()
    }

    /// Renders the grid into a [BitMatrix] fitting `width` x `height` as
    /// well as possible, surrounded by `margin` unset modules on every side.
    ///
    /// The symbol is rotated by 90° when the requested area and the symbol
    /// disagree on which side is the longest, then magnified by the largest
    /// integer factor that fits.
    pub fn to_bit_matrix(&self, width: usize, height: usize, margin: usize) -> BitMatrix {
        let mut grid = self.scaled_matrix(1, ASPECT_RATIO);
        let (grid_width, grid_height) = grid_size(&grid);

        let rotated = (height > width) != (grid_width < grid_height);
        if rotated {
            grid = rotate(&grid);
        }

        let (grid_width, grid_height) = grid_size(&grid);
        let scale_x = if grid_width == 0 { 0 } else { width / grid_width };
        let scale_y = if grid_height == 0 { 0 } else { height / grid_height };
        let scale = scale_x.min(scale_y);
        log::debug!("{}x{} symbol in {width}x{height}: rotated {rotated}, scale {scale}",
            grid_width, grid_height);

        if scale > 1 {
            grid = self.scaled_matrix(scale, scale * ASPECT_RATIO);
            if rotated {
                grid = rotate(&grid);
            }
        }

        bit_matrix_from_grid(&grid, margin)
    }
}

fn grid_size(grid: &[Vec<bool>]) -> (usize, usize) {
    (grid.first().map_or(0, Vec::len), grid.len())
}

/// Rotates a grid by 90°: `out[col][rows - 1 - row] = grid[row][col]`.
pub fn rotate(grid: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let (cols, rows) = grid_size(grid);
    let mut out = vec![vec![false; rows]; cols];
    for (row, line) in grid.iter().enumerate() {
        // keeps the direction consistent on screen whichever way the grid is read
        let inverse = rows - row - 1;
        for (col, &bit) in line.iter().enumerate() {
            out[col][inverse] = bit;
        }
    }
    out
}

fn bit_matrix_from_grid(grid: &[Vec<bool>], margin: usize) -> BitMatrix {
    let (width, height) = grid_size(grid);
    let mut output = BitMatrix::new(width + 2 * margin, height + 2 * margin);
    for (y, line) in grid.iter().enumerate() {
        let y_output = output.height() - margin - 1 - y;
        for (x, &bit) in line.iter().enumerate() {
            if bit {
                output.set(x + margin, y_output);
            }
        }
    }
    output
}
