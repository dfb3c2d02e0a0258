//! The common entry point of every symbology and the hints it accepts.

use crate::bit_matrix::BitMatrix;
use crate::charset::CharacterSet;
use crate::error::{EncodeError, Result};
use crate::generators::{Dimensions, SymbolCodewordGenerator, SymbolConstraints, MAX_LEVEL};
use crate::high_level::{encode_high_level, Compaction};
use crate::BarcodeFormat;

/// Encodes a payload into a rendered symbol.
pub trait Writer {
    /// Encodes `contents` as a `format` symbol at least `width` x `height`
    /// large (0 means "as small as possible").
    fn encode(&self, contents: &str, format: BarcodeFormat, width: i32, height: i32,
              hints: &EncodeHints) -> Result<BitMatrix>;
}

/// Keys of the textual hint interface, see [EncodeHints::set].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeHintType {
    /// Quiet zone, in modules.
    Margin,
    /// `AUTO`, `TEXT`, `BYTE` or `NUMERIC`.
    Pdf417Compaction,
    /// `true` for compact PDF417.
    Pdf417Compact,
    /// `minCols,maxCols,minRows,maxRows`.
    Pdf417Dimensions,
    /// PDF417 error correction level, `0` to `8`.
    ErrorCorrection,
    /// Name of the character set used by byte compaction.
    CharacterSet,
}

/// Optional settings of an encode request. Every writer ignores the hints
/// that do not apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeHints {
    /// Overrides the writer's default quiet zone.
    pub margin: Option<u32>,
    pub compaction: Compaction,
    pub compact: bool,
    pub dimensions: Option<Dimensions>,
    /// Defaults to [Pdf417Writer::DEFAULT_ERROR_CORRECTION_LEVEL].
    pub error_correction: Option<u8>,
    pub character_set: Option<String>,
}

impl EncodeHints {
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_compaction(mut self, compaction: Compaction) -> Self {
        self.compaction = compaction;
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_error_correction(mut self, level: u8) -> Self {
        self.error_correction = Some(level);
        self
    }

    pub fn with_character_set(mut self, name: impl Into<String>) -> Self {
        self.character_set = Some(name.into());
        self
    }

    /// Parses `value` and stores it under `hint`. Leaves the hints untouched
    /// when the value is malformed.
    pub fn set(&mut self, hint: EncodeHintType, value: &str) -> Result<()> {
        let value = value.trim();
        match hint {
            EncodeHintType::Margin => self.margin = Some(parse_number(hint, value)?),
            EncodeHintType::Pdf417Compaction => self.compaction = value.parse()?,
            EncodeHintType::Pdf417Compact => self.compact = value.eq_ignore_ascii_case("true"),
            EncodeHintType::Pdf417Dimensions => {
                let bounds = value.split(',')
                    .map(|v| parse_number::<u8>(hint, v.trim()))
                    .collect::<Result<Vec<_>>>()?;
                let [min_cols, max_cols, min_rows, max_rows] = bounds[..] else {
                    return Err(EncodeError::InvalidConfiguration(
                        format!("expected minCols,maxCols,minRows,maxRows, got {value:?}")));
                };
                self.dimensions = Some(Dimensions::new(min_cols, max_cols, min_rows, max_rows)?);
            },
            EncodeHintType::ErrorCorrection => {
                let level = parse_number(hint, value)?;
                check_level(level)?;
                self.error_correction = Some(level);
            },
            EncodeHintType::CharacterSet => {
                CharacterSet::from_name(value)?;
                self.character_set = Some(value.to_owned());
            },
        }
        Ok(())
    }
}

fn parse_number<T: core::str::FromStr>(hint: EncodeHintType, value: &str) -> Result<T> {
    value.parse().map_err(|_| EncodeError::InvalidConfiguration(
        format!("invalid value for {hint:?}: {value:?}")))
}

fn check_level(level: u8) -> Result<()> {
    if level > MAX_LEVEL {
        return Err(EncodeError::InvalidConfiguration(
            format!("error correction level must be between 0 and {MAX_LEVEL}, got {level}")));
    }
    Ok(())
}

/// PDF417 writer. The payload goes through high-level encoding, then `G`
/// lays out the symbol, and the result is rendered with
/// [BarcodeMatrix::to_bit_matrix](crate::builder::BarcodeMatrix::to_bit_matrix).
#[derive(Debug, Clone, Default)]
pub struct Pdf417Writer<G> {
    generator: G,
}

impl<G: SymbolCodewordGenerator> Pdf417Writer<G> {
    /// Default quiet zone, in modules.
    pub const WHITE_SPACE: u32 = 30;
    pub const DEFAULT_ERROR_CORRECTION_LEVEL: u8 = 2;

    pub const fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: SymbolCodewordGenerator> Writer for Pdf417Writer<G> {
    fn encode(&self, contents: &str, format: BarcodeFormat, width: i32, height: i32,
              hints: &EncodeHints) -> Result<BitMatrix> {
        if contents.is_empty() {
            return Err(EncodeError::InvalidInput("Found empty contents".to_owned()));
        }
        if format != BarcodeFormat::Pdf417 {
            return Err(EncodeError::UnsupportedFormat {
                requested: format,
                supported: &[BarcodeFormat::Pdf417],
            });
        }
        if width < 0 || height < 0 {
            return Err(EncodeError::InvalidGeometry { width, height });
        }

        let margin = hints.margin.unwrap_or(Self::WHITE_SPACE);
        let level = hints.error_correction.unwrap_or(Self::DEFAULT_ERROR_CORRECTION_LEVEL);
        check_level(level)?;

        let codewords = encode_high_level(contents, hints.compaction, hints.character_set.as_deref())?;
        log::debug!("{} data codewords, level {level}", codewords.len());

        let constraints = SymbolConstraints {
            error_correction_level: level,
            compact: hints.compact,
            dimensions: hints.dimensions,
        };
        let matrix = self.generator.generate(&codewords, &constraints)?;
        debug_assert!(matrix.is_complete(), "the generator left rows unwritten");

        Ok(matrix.to_bit_matrix(width as usize, height as usize, margin as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BarcodeMatrix;
    use crate::generators::{Bitfield, END_PAT, START_PAT};
    use core::cell::RefCell;
    use pretty_assertions::assert_eq;

    /// Three rows of start pattern, raw codewords and stop pattern. Keeps
    /// what it was called with.
    #[derive(Default)]
    struct RawGenerator {
        calls: RefCell<Vec<(Vec<u16>, SymbolConstraints)>>,
    }

    impl SymbolCodewordGenerator for RawGenerator {
        fn generate(&self, codewords: &[u16], constraints: &SymbolConstraints) -> Result<BarcodeMatrix> {
            self.calls.borrow_mut().push((codewords.to_vec(), *constraints));

            let columns = codewords.len().div_ceil(3).max(1);
            let mut matrix = BarcodeMatrix::new(3, columns);
            for chunk in (0..3).map(|r| codewords.iter().skip(r * columns).take(columns)) {
                let row = matrix.start_row();
                row.add_pattern(START_PAT);
                for &cw in chunk {
                    row.add_pattern(Bitfield::new(1 << 16 | cw as u32, 17));
                }
                row.add_pattern(END_PAT);
            }
            Ok(matrix)
        }
    }

    #[test]
    fn test_forwards_codewords_and_constraints() {
        let writer = Pdf417Writer::new(RawGenerator::default());
        let dimensions = Dimensions::new(2, 4, 3, 10).unwrap();
        let hints = EncodeHints::default().with_compact(true).with_dimensions(dimensions);
        writer.encode("Test", BarcodeFormat::Pdf417, 0, 0, &hints).unwrap();

        let calls = writer.generator().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, [19 * 30 + 27, 4 * 30 + 18, 19 * 30 + 29]);
        assert_eq!(calls[0].1, SymbolConstraints {
            error_correction_level: 2,
            compact: true,
            dimensions: Some(dimensions),
        });
    }

    #[test]
    fn test_natural_size() {
        let writer = Pdf417Writer::new(RawGenerator::default());
        let bits = writer.encode("Test", BarcodeFormat::Pdf417, 0, 0, &EncodeHints::default()).unwrap();
        // 1 column: (1 + 4) * 17 + 1 modules, 3 rows of 4 modules high
        assert_eq!((bits.width(), bits.height()), (86 + 60, 12 + 60));

        // the first row is drawn at the top, starting with 8 bars
        for x in 30..38 {
            assert!(bits.is_set(x, 30));
        }
        assert!(!bits.is_set(38, 30));
        assert!(!bits.is_set(29, 30));
        assert!(!bits.is_set(30, 29));
    }

    #[test]
    fn test_margin_hint() {
        let writer = Pdf417Writer::new(RawGenerator::default());
        let hints = EncodeHints::default().with_margin(0);
        let bits = writer.encode("Test", BarcodeFormat::Pdf417, 0, 0, &hints).unwrap();
        assert_eq!((bits.width(), bits.height()), (86, 12));
        assert!(bits.is_set(0, 0));
    }

    #[test]
    fn test_rejected_requests() {
        let writer = Pdf417Writer::new(RawGenerator::default());
        let hints = EncodeHints::default();

        assert_eq!(writer.encode("Test", BarcodeFormat::Code39, 0, 0, &hints),
            Err(EncodeError::UnsupportedFormat {
                requested: BarcodeFormat::Code39,
                supported: &[BarcodeFormat::Pdf417],
            }));
        assert!(matches!(writer.encode("", BarcodeFormat::Pdf417, 0, 0, &hints),
            Err(EncodeError::InvalidInput(_))));
        assert_eq!(writer.encode("Test", BarcodeFormat::Pdf417, 10, -1, &hints),
            Err(EncodeError::InvalidGeometry { width: 10, height: -1 }));

        let hints = EncodeHints::default().with_error_correction(9);
        assert!(matches!(writer.encode("Test", BarcodeFormat::Pdf417, 0, 0, &hints),
            Err(EncodeError::InvalidConfiguration(_))));

        let hints = EncodeHints::default().with_character_set("KOI8-R");
        assert!(matches!(writer.encode("Test", BarcodeFormat::Pdf417, 0, 0, &hints),
            Err(EncodeError::InvalidConfiguration(_))));

        let hints = EncodeHints::default().with_compaction(Compaction::Numeric);
        assert!(matches!(writer.encode("12a", BarcodeFormat::Pdf417, 0, 0, &hints),
            Err(EncodeError::InvalidInput(_))));

        assert!(writer.generator().calls.borrow().is_empty());
    }

    #[test]
    fn test_set_hints() {
        let mut hints = EncodeHints::default();
        hints.set(EncodeHintType::Margin, " 4 ").unwrap();
        hints.set(EncodeHintType::Pdf417Compaction, "byte").unwrap();
        hints.set(EncodeHintType::Pdf417Compact, "TRUE").unwrap();
        hints.set(EncodeHintType::Pdf417Dimensions, "1, 5, 3, 20").unwrap();
        hints.set(EncodeHintType::ErrorCorrection, "5").unwrap();
        hints.set(EncodeHintType::CharacterSet, "utf-8").unwrap();

        assert_eq!(hints, EncodeHints {
            margin: Some(4),
            compaction: Compaction::Byte,
            compact: true,
            dimensions: Some(Dimensions::new(1, 5, 3, 20).unwrap()),
            error_correction: Some(5),
            character_set: Some("utf-8".to_owned()),
        });

        hints.set(EncodeHintType::Pdf417Compact, "yes").unwrap();
        assert!(!hints.compact);
    }

    #[test]
    fn test_set_malformed_hints() {
        let mut hints = EncodeHints::default();
        for (hint, value) in [
            (EncodeHintType::Margin, "-1"),
            (EncodeHintType::Pdf417Compaction, "BINARY"),
            (EncodeHintType::Pdf417Dimensions, "1,5,3"),
            (EncodeHintType::Pdf417Dimensions, "5,1,3,20"),
            (EncodeHintType::ErrorCorrection, "9"),
            (EncodeHintType::CharacterSet, "Shift_JIS"),
        ] {
            assert!(matches!(hints.set(hint, value), Err(EncodeError::InvalidConfiguration(_))),
                "{hint:?} = {value:?}");
        }
        assert_eq!(hints, EncodeHints::default());
    }
}
