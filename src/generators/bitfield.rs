/// A fixed module pattern (start/stop pattern or a codeword symbol), `len`
/// modules packed in the low bits of `bits`, first module in the most
/// significant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitfield {
    bits: u32,
    len: u8,
}

impl Bitfield {
    pub const fn new(bits: u32, len: u8) -> Self {
        assert!(len <= 32, "a pattern holds at most 32 modules");
        assert!(len == 32 || bits >> len == 0, "pattern is wider than its length");

        Self { bits, len }
    }

    #[inline]
    pub const fn as_pair(&self) -> (u32, u32) {
        (self.bits, self.len as u32)
    }

    /// Modules of the pattern in drawing order, `true` being a bar.
    pub fn modules(self) -> impl ExactSizeIterator<Item = bool> {
        (0..self.len).rev().map(move |i| (self.bits >> i) & 1 != 0)
    }
}
