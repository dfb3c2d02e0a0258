//! One-dimensional symbologies: a module pattern stretched over the
//! requested width with a quiet zone on both sides.

pub mod code39;

pub use code39::Code39Writer;

use crate::bit_matrix::BitMatrix;
use crate::error::{EncodeError, Result};
use crate::writer::EncodeHints;
use crate::BarcodeFormat;

/// Quiet zone used when the hints do not set one. Ten narrow modules is
/// what the most demanding 1D symbology asks for.
pub const DEFAULT_MARGIN: u32 = 10;

/// A symbology whose symbols are a single row of bars and spaces.
pub trait PatternRenderer {
    /// Formats this renderer can produce.
    fn supported_formats(&self) -> &'static [BarcodeFormat];

    /// Encodes `contents` to its module pattern, `true` being a bar.
    fn encode_pattern(&self, contents: &str) -> Result<Vec<bool>>;

    fn default_margin(&self) -> u32 {
        DEFAULT_MARGIN
    }

    /// Validates the request, encodes `contents` and renders it with
    /// [render_pattern].
    fn render(&self, contents: &str, format: BarcodeFormat, width: i32, height: i32,
              hints: &EncodeHints) -> Result<BitMatrix> {
        if contents.is_empty() {
            return Err(EncodeError::InvalidInput("Found empty contents".to_owned()));
        }
        if width < 0 || height < 0 {
            return Err(EncodeError::InvalidGeometry { width, height });
        }
        let supported = self.supported_formats();
        if !supported.contains(&format) {
            return Err(EncodeError::UnsupportedFormat { requested: format, supported });
        }

        let margin = hints.margin.unwrap_or_else(|| self.default_margin());
        let code = self.encode_pattern(contents)?;
        Ok(render_pattern(&code, width as usize, height as usize, margin as usize))
    }
}

/// Renders `code` at least `width` x `height` large. Every module is
/// magnified by the same integer factor and the result is centered, leaving
/// at least `margin` modules of quiet zone in total.
pub fn render_pattern(code: &[bool], width: usize, height: usize, margin: usize) -> BitMatrix {
    let input_width = code.len();
    // Add quiet zone on both sides.
    let full_width = input_width + margin;
    let output_width = width.max(full_width);
    let output_height = height.max(1);

    let multiple = output_width / full_width.max(1);
    let left_padding = (output_width - input_width * multiple) / 2;
    log::trace!("{input_width} modules x{multiple} in {output_width}x{output_height}");

    let mut output = BitMatrix::new(output_width, output_height);
    for (i, _) in code.iter().enumerate().filter(|&(_, &bar)| bar) {
        output.set_region(left_padding + i * multiple, 0, multiple, output_height);
    }
    output
}

/// Writes runs of alternating colors into `target` starting at `pos`, the
/// first run being `start_color`. Returns the number of modules written.
pub fn append_pattern(target: &mut [bool], pos: usize, widths: &[u8], start_color: bool) -> usize {
    let mut color = start_color;
    let mut added = 0;
    for &len in widths {
        let len = len as usize;
        target[pos + added..pos + added + len].fill(color);
        added += len;
        color = !color;
    }
    added
}
