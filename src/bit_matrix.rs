//! Monochrome raster produced by every writer.

use core::fmt;

/// A fixed-size 2D grid of modules. `(0, 0)` is the top-left corner and a
/// set bit is a dark module. Bits are stored row by row, packed into `u32`
/// words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    row_size: usize,
    bits: Vec<u32>,
}

impl BitMatrix {
    /// Creates an empty (all unset) matrix.
    pub fn new(width: usize, height: usize) -> Self {
        let row_size = width.div_ceil(32);
        Self { width, height, row_size, bits: vec![0; row_size * height] }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> (usize, u32) {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) is out of bounds");
        (y * self.row_size + x / 32, 1 << (x & 0x1f))
    }

    /// Returns `true` if the module at `(x, y)` is set.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        let (i, mask) = self.offset(x, y);
        self.bits[i] & mask != 0
    }

    pub fn set(&mut self, x: usize, y: usize) {
        let (i, mask) = self.offset(x, y);
        self.bits[i] |= mask;
    }

    pub fn unset(&mut self, x: usize, y: usize) {
        let (i, mask) = self.offset(x, y);
        self.bits[i] &= !mask;
    }

    /// Unsets every module.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Sets a rectangular region of `width` x `height` modules whose top-left
    /// corner is `(left, top)`.
    pub fn set_region(&mut self, left: usize, top: usize, width: usize, height: usize) {
        let right = left + width;
        let bottom = top + height;
        assert!(right <= self.width && bottom <= self.height,
            "the region must fit inside the matrix");

        for y in top..bottom {
            for x in left..right {
                self.set(x, y);
            }
        }
    }

    /// Iterates over the coordinates of the set modules, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.is_set(x, y))
    }

    /// Packs the matrix into bytes, most significant bit first. Each row
    /// starts on a new byte, so a row takes `ceil(width / 8)` bytes.
    pub fn to_bitmap(&self) -> Vec<u8> {
        let stride = self.width.div_ceil(8);
        let mut bitmap = vec![0u8; stride * self.height];
        for (x, y) in self.pixels() {
            bitmap[y * stride + x / 8] |= 0x80 >> (x % 8);
        }
        bitmap
    }
}

impl fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.is_set(x, y) { "X " } else { "  " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(feature = "embedded-graphics")]
mod graphics {
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;

    use super::BitMatrix;

    impl OriginDimensions for BitMatrix {
        fn size(&self) -> Size {
            Size::new(self.width as u32, self.height as u32)
        }
    }

    impl Drawable for BitMatrix {
        type Color = BinaryColor;
        type Output = ();

        fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
        where
            D: DrawTarget<Color = Self::Color>,
        {
            let pixels = (0..self.height)
                .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
                .map(|(x, y)| {
                    let color = if self.is_set(x, y) { BinaryColor::On } else { BinaryColor::Off };
                    Pixel(Point::new(x as i32, y as i32), color)
                });
            target.draw_iter(pixels)
        }
    }
}
