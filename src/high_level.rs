//! User data to high level encoding conversion functions

use core::str::FromStr;

use awint_core::{InlAwi, Bits};
type U160 = InlAwi<160, { Bits::unstable_raw_digits(160) }>;

use crate::charset::CharacterSet;
use crate::error::{EncodeError, Result};

/// Codeword used to latch to text mode
pub const M_LATCH_TEXT: u16 = 900;
/// Codeword used to latch to byte mode when the number of bytes is not a
/// multiple of 6 (otherwise use M_LATCH_BYTE_M6).
pub const M_LATCH_BYTE: u16 = 901;
/// Codeword used to latch to numeric mode
pub const M_LATCH_NUMERIC: u16 = 902;

// 903 to 912: reserved for future use

/// Codeword used to switch to byte mode for the next codeword (usable only
/// if the current mode is text).
pub const M_SHIFT_BYTE: u16 = 913;

// 914 to 920: reserved for future use
// 921: reader initialization
// 922 to 923: Macro PDF417

/// Codeword used to latch to byte mode when the number of bytes is a
/// multiple of 6.
pub const M_LATCH_BYTE_M6: u16 = 924;
/// Codeword used to specify a ECI (user) custom ID
pub const ECI_CUSTOM_ID: u16 = 925;
/// Codeword used to specify a ECI general purpose code
pub const ECI_GENERAL_ID: u16 = 926;
/// Codeword used to specify a ECI code page
pub const ECI_CODE_PAGE: u16 = 927;
// 928: Block start for PDF macro

/// Exclusive upper bound of the ECI numbers a PDF417 can announce.
pub const MAX_ECI: u32 = 811_800;

/// Minimum number of consecutive digits worth a latch to numeric mode.
const NUMERIC_RUN: usize = 13;
/// Minimum number of consecutive text characters worth a latch to text mode.
const TEXT_RUN: usize = 5;
/// Numeric compaction converts at most this many digits at once.
const NUMERIC_CHUNK: usize = 44;

// text sub-mode control codes
const LL: u8 = 27; // latch lower (alpha, mixed) / alpha shift (lower)
const ML: u8 = 28; // latch mixed (alpha, lower) / latch alpha (mixed)
const PS: u8 = 29; // punctuation shift / latch alpha (punctuation)
const PL: u8 = 25; // latch punctuation (mixed)
const SPACE: u8 = 26;

const TEXT_MIXED_RAW: [u8; 30] = [
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'&', b'\r', b'\t', b',', b':',
    b'#', b'-', b'.', b'$', b'/', b'+', b'%', b'*', b'=', b'^', 0, b' ', 0, 0, 0
];
const TEXT_PUNCTUATION_RAW: [u8; 30] = [
    b';', b'<', b'>', b'@', b'[', b'\\', b']', b'_', b'`', b'~', b'!', b'\r', b'\t', b',', b':',
    b'\n', b'-', b'.', b'$', b'/', b'"', b'|', b'*', b'(', b')', b'?', b'{', b'}', b'\'', 0
];

/// Compaction strategy requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compaction {
    /// Pick text, byte or numeric compaction for each segment of the payload.
    #[default]
    Auto,
    Text,
    Byte,
    Numeric,
}

impl FromStr for Compaction {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AUTO" => Ok(Self::Auto),
            "TEXT" => Ok(Self::Text),
            "BYTE" => Ok(Self::Byte),
            "NUMERIC" => Ok(Self::Numeric),
            _ => Err(EncodeError::InvalidConfiguration(format!("unknown compaction: {s}"))),
        }
    }
}

/// The compaction mode the encoder is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    Text,
    Byte,
    Numeric,
}

/// Sub-mode of text compaction. Each one maps its characters to 0..=29.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextSubmode {
    Alpha,
    Lower,
    Mixed,
    Punctuation,
}

#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
fn is_alpha_upper(c: char) -> bool {
    c == ' ' || c.is_ascii_uppercase()
}

#[inline]
fn is_alpha_lower(c: char) -> bool {
    c == ' ' || c.is_ascii_lowercase()
}

fn is_text(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | ' '..='~')
}

fn table_position(table: &[u8; 30], c: char) -> Option<u8> {
    if c == '\0' || !c.is_ascii() {
        return None;
    }
    table.iter().position(|&r| r == c as u8).map(|p| p as u8)
}

fn mixed_code(c: char) -> Option<u8> {
    table_position(&TEXT_MIXED_RAW, c)
}

fn punctuation_code(c: char) -> Option<u8> {
    table_position(&TEXT_PUNCTUATION_RAW, c)
}

/// Converts `msg` to a sequence of PDF417 data codewords (no length
/// descriptor, padding or error correction).
///
/// `encoding` names the character set used for byte compaction. Anything
/// other than the default ISO-8859-1 is announced with an ECI directive in
/// front of the data.
pub fn encode_high_level(msg: &str, compaction: Compaction, encoding: Option<&str>) -> Result<Vec<u16>> {
    let charset = match encoding {
        Some(name) => CharacterSet::from_name(name)?,
        None => CharacterSet::default(),
    };

    let mut out = Vec::with_capacity(msg.len());
    if charset != CharacterSet::default() {
        encoding_eci(charset.eci(), &mut out)?;
    }

    let chars: Vec<char> = msg.chars().collect();
    match compaction {
        Compaction::Text => {
            if let Some(c) = chars.iter().find(|&&c| !is_text(c)) {
                return Err(EncodeError::InvalidInput(
                    format!("{c:?} cannot be encoded with text compaction")));
            }
            encode_text(&chars, TextSubmode::Alpha, &mut out);
        },
        Compaction::Byte => {
            let bytes = charset.encode(msg)?;
            encode_binary(&bytes, EncodingMode::Byte, &mut out);
        },
        Compaction::Numeric => {
            if !msg.bytes().all(|b| b.is_ascii_digit()) {
                return Err(EncodeError::InvalidInput(
                    "numeric compaction only accepts the digits 0-9".to_owned()));
            }
            out.push(M_LATCH_NUMERIC);
            encode_numeric(msg.as_bytes(), &mut out);
        },
        Compaction::Auto => encode_auto(&chars, charset, &mut out)?,
    }

    log::trace!("encoded {} characters into {} codewords", chars.len(), out.len());
    Ok(out)
}

fn encode_auto(msg: &[char], charset: CharacterSet, out: &mut Vec<u16>) -> Result<()> {
    let len = msg.len();
    let mut p = 0;
    let mut mode = EncodingMode::Text;
    let mut submode = TextSubmode::Alpha;

    while p < len {
        let n = determine_consecutive_digit_count(msg, p);
        if n >= NUMERIC_RUN {
            log::debug!("latch to numeric compaction at {p} for {n} digits");
            out.push(M_LATCH_NUMERIC);
            mode = EncodingMode::Numeric;
            submode = TextSubmode::Alpha;

            let digits: Vec<u8> = msg[p..p + n].iter().map(|&c| c as u8).collect();
            encode_numeric(&digits, out);
            p += n;
            continue;
        }

        let t = determine_consecutive_text_count(msg, p);
        if t >= TEXT_RUN || p + t == len {
            if mode != EncodingMode::Text {
                log::debug!("latch to text compaction at {p}");
                out.push(M_LATCH_TEXT);
                mode = EncodingMode::Text;
                submode = TextSubmode::Alpha;
            }
            submode = encode_text(&msg[p..p + t], submode, out);
            p += t;
        } else {
            let b = determine_consecutive_binary_count(msg, p).max(1);
            let segment: String = msg[p..p + b].iter().collect();
            let bytes = charset.encode(&segment)?;

            if bytes.len() == 1 && mode == EncodingMode::Text {
                // shift for a single byte, the text sub-mode survives it
                encode_binary(&bytes, EncodingMode::Text, out);
            } else {
                log::debug!("latch to byte compaction at {p} for {} bytes", bytes.len());
                encode_binary(&bytes, mode, out);
                mode = EncodingMode::Byte;
                submode = TextSubmode::Alpha;
            }
            p += b;
        }
    }

    Ok(())
}

/// Text compaction of `msg`, starting in `initial` sub-mode. Every
/// character must be a text character. Returns the sub-mode the encoder
/// ended in.
pub(crate) fn encode_text(msg: &[char], initial: TextSubmode, out: &mut Vec<u16>) -> TextSubmode {
    let mut tmp: Vec<u8> = Vec::with_capacity(msg.len() * 2);
    let mut submode = initial;
    let mut idx = 0;

    while idx < msg.len() {
        let c = msg[idx];
        match submode {
            TextSubmode::Alpha => {
                if is_alpha_upper(c) {
                    tmp.push(if c == ' ' { SPACE } else { c as u8 - b'A' });
                } else if is_alpha_lower(c) {
                    tmp.push(LL);
                    submode = TextSubmode::Lower;
                    continue;
                } else if mixed_code(c).is_some() {
                    tmp.push(ML);
                    submode = TextSubmode::Mixed;
                    continue;
                } else {
                    let Some(p) = punctuation_code(c) else { unreachable!("{c:?} is not a text character") };
                    tmp.extend([PS, p]);
                }
            },
            TextSubmode::Lower => {
                if is_alpha_lower(c) {
                    tmp.push(if c == ' ' { SPACE } else { c as u8 - b'a' });
                } else if is_alpha_upper(c) {
                    // space is handled above, this is a letter
                    tmp.extend([LL, c as u8 - b'A']);
                } else if mixed_code(c).is_some() {
                    tmp.push(ML);
                    submode = TextSubmode::Mixed;
                    continue;
                } else {
                    let Some(p) = punctuation_code(c) else { unreachable!("{c:?} is not a text character") };
                    tmp.extend([PS, p]);
                }
            },
            TextSubmode::Mixed => {
                if let Some(m) = mixed_code(c) {
                    tmp.push(m);
                } else if is_alpha_upper(c) {
                    tmp.push(ML);
                    submode = TextSubmode::Alpha;
                    continue;
                } else if is_alpha_lower(c) {
                    tmp.push(LL);
                    submode = TextSubmode::Lower;
                    continue;
                } else {
                    if idx + 1 < msg.len() && punctuation_code(msg[idx + 1]).is_some() {
                        tmp.push(PL);
                        submode = TextSubmode::Punctuation;
                        continue;
                    }
                    let Some(p) = punctuation_code(c) else { unreachable!("{c:?} is not a text character") };
                    tmp.extend([PS, p]);
                }
            },
            TextSubmode::Punctuation => {
                if let Some(p) = punctuation_code(c) {
                    tmp.push(p);
                } else {
                    tmp.push(PS);
                    submode = TextSubmode::Alpha;
                    continue;
                }
            },
        }
        idx += 1;
    }

    out.extend(tmp.chunks(2).map(|pair| match *pair {
        [h, l] => h as u16 * 30 + l as u16,
        [h] => h as u16 * 30 + PS as u16,
        _ => unreachable!(),
    }));

    submode
}

/// Byte compaction of `bytes`. `start_mode` is the mode the encoder is in
/// before this segment: a single byte in text mode only needs a shift.
pub fn encode_binary(bytes: &[u8], start_mode: EncodingMode, out: &mut Vec<u16>) {
    out.push(if bytes.len() == 1 && start_mode == EncodingMode::Text {
        M_SHIFT_BYTE
    } else if bytes.len() % 6 == 0 {
        M_LATCH_BYTE_M6
    } else {
        M_LATCH_BYTE
    });

    let mut groups = bytes.chunks_exact(6);
    for group in &mut groups {
        // pack six bytes
        let mut s = group.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
        // into five base 900 codewords
        let mut cws = [0u16; 5];
        for cw in cws.iter_mut().rev() {
            *cw = (s % 900) as u16;
            s /= 900;
        }
        out.extend_from_slice(&cws);
    }

    // remaining
    out.extend(groups.remainder().iter().map(|&b| b as u16));
}

/// Numeric compaction of the ASCII digits `digits`, without the latch.
pub(crate) fn encode_numeric(digits: &[u8], out: &mut Vec<u16>) {
    debug_assert!(digits.iter().all(u8::is_ascii_digit));

    for chunk in digits.chunks(NUMERIC_CHUNK) {
        // A leading 1 keeps the leading zeros of the chunk.
        let mut src = [b'1'; NUMERIC_CHUNK + 1];
        src[1..=chunk.len()].copy_from_slice(chunk);

        let mut b = U160::zero();
        {
            let mut p0 = U160::zero();
            let mut p1 = U160::zero();
            b.bytes_radix_(None, &src[..=chunk.len()], 10, &mut p0, &mut p1)
                .expect("45 digits base 10 should fit in 160 bits");
        }

        let start = out.len();
        while !b.is_zero() {
            let r = b.digit_udivide_inplace_(900).expect("900 > 0");
            out.push(r as u16);
        }
        out[start..].reverse();
    }
}

/// Appends the ECI directive announcing `eci`.
pub fn encoding_eci(eci: u32, out: &mut Vec<u16>) -> Result<()> {
    match eci {
        0..=899 => out.extend([ECI_CODE_PAGE, eci as u16]),
        900..=810_899 => out.extend([ECI_GENERAL_ID, (eci / 900 - 1) as u16, (eci % 900) as u16]),
        810_900..=811_799 => out.extend([ECI_CUSTOM_ID, (eci - 810_900) as u16]),
        _ => return Err(EncodeError::InvalidConfiguration(
            format!("ECI number not in valid range from 0..{}, but was {eci}", MAX_ECI - 1))),
    }
    Ok(())
}

fn determine_consecutive_digit_count(msg: &[char], start: usize) -> usize {
    msg[start..].iter().take_while(|&&c| is_digit(c)).count()
}

fn determine_consecutive_text_count(msg: &[char], start: usize) -> usize {
    let len = msg.len();
    let mut idx = start;
    while idx < len {
        let mut numeric = 0;
        while numeric < NUMERIC_RUN && idx < len && is_digit(msg[idx]) {
            numeric += 1;
            idx += 1;
        }
        if numeric >= NUMERIC_RUN {
            return idx - start - numeric;
        }
        if numeric > 0 {
            // shorter digit runs stay in text
            continue;
        }
        if !is_text(msg[idx]) {
            break;
        }
        idx += 1;
    }
    idx - start
}

fn determine_consecutive_binary_count(msg: &[char], start: usize) -> usize {
    let mut idx = start;
    while idx < msg.len() {
        let numeric = msg[idx..].iter().take(NUMERIC_RUN).take_while(|&&c| is_digit(c)).count();
        if numeric >= NUMERIC_RUN {
            break;
        }
        idx += 1;
    }
    idx - start
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn auto(msg: &str) -> Vec<u16> {
        encode_high_level(msg, Compaction::Auto, None).unwrap()
    }

    /// Base 900 digits to a decimal string.
    fn base900_to_decimal(cws: &[u16]) -> String {
        let mut digits: Vec<u32> = vec![0]; // little endian
        for &cw in cws {
            let mut carry = cw as u32;
            for d in digits.iter_mut() {
                let v = *d * 900 + carry;
                *d = v % 10;
                carry = v / 10;
            }
            while carry > 0 {
                digits.push(carry % 10);
                carry /= 10;
            }
        }
        digits.iter().rev().map(|&d| char::from_digit(d, 10).unwrap()).collect()
    }

    #[test]
    fn test_encode_text_simple() {
        assert_eq!(auto("Test"), [19 * 30 + 27, 4 * 30 + 18, 19 * 30 + 29]);
        assert_eq!(encode_high_level("Test", Compaction::Text, None).unwrap(), auto("Test"));
    }

    #[test]
    fn test_encode_text_switch_modes() {
        assert_eq!(auto("abc1D234"),
            [27 * 30 + 0, 1 * 30 + 2, 28 * 30 + 1, 28 * 30 + 3, 28 * 30 + 2, 3 * 30 + 4]);
    }

    #[test]
    fn test_encode_text_with_digits() {
        assert_eq!(auto("encoded 0123456789 as digits"), [
            27 * 30 + 4, 13 * 30 + 2, 14 * 30 + 3, 4 * 30 + 3, 26 * 30 + 28, 0 * 30 + 1, 2 * 30 + 3,
            4 * 30 + 5, 6 * 30 + 7, 8 * 30 + 9, 26 * 30 + 27, 0 * 30 + 18, 26 * 30 + 3, 8 * 30 + 6,
            8 * 30 + 19, 18 * 30 + 29
        ]);
    }

    #[test]
    fn test_encode_text_punctuation() {
        // lower -> punctuation shift, then mixed -> punctuation latch
        let mut out = Vec::new();
        let submode = encode_text(&"a!".chars().collect::<Vec<_>>(), TextSubmode::Alpha, &mut out);
        assert_eq!(out, [27 * 30 + 0, 29 * 30 + 10]);
        assert_eq!(submode, TextSubmode::Lower);

        out.clear();
        let submode = encode_text(&"1();".chars().collect::<Vec<_>>(), TextSubmode::Alpha, &mut out);
        // ML 1 PL ( ) ;
        assert_eq!(out, [28 * 30 + 1, 25 * 30 + 23, 24 * 30 + 0]);
        assert_eq!(submode, TextSubmode::Punctuation);

        out.clear();
        let submode = encode_text(&"1(A".chars().collect::<Vec<_>>(), TextSubmode::Alpha, &mut out);
        // ML 1 PS ( AL A
        assert_eq!(out, [28 * 30 + 1, 29 * 30 + 23, 28 * 30 + 0]);
        assert_eq!(submode, TextSubmode::Alpha);
    }

    #[test]
    fn test_encode_text_leaves_punctuation() {
        let mut out = Vec::new();
        let submode = encode_text(&"B".chars().collect::<Vec<_>>(), TextSubmode::Punctuation, &mut out);
        assert_eq!(out, [29 * 30 + 1]);
        assert_eq!(submode, TextSubmode::Alpha);
    }

    #[test]
    fn test_encode_numeric_run() {
        assert_eq!(auto("12345678987654321 num"),
            [902, 190, 232, 499, 20, 504, 721, 900, 26 * 30 + 27, 13 * 30 + 20, 12 * 30 + 29]);
    }

    #[test]
    fn test_encode_numeric_big() {
        //        [                        p1                 ][ p2 ]
        let msg = "123456789876543211234567898765432112345678987654321";
        assert_eq!(auto(msg), [
            902, 491, 81, 137, 725, 651, 455, 511, 858, 135, 138, 488, 568, 447, 553, 198,
            /* p2 */ 21, 715, 821
        ]);
    }

    #[test]
    fn test_numeric_chunks_round_trip() {
        let digits = "00012345678901234567890123456789012345678901987654321098765432109876543210";
        assert_eq!(digits.len(), 74);

        let mut out = Vec::new();
        encode_numeric(digits.as_bytes(), &mut out);
        // ceil(74 / 44) chunks: 45 digit value -> 15 codewords, 31 digit value -> 11
        assert_eq!(out.len(), 15 + 11);

        let first = base900_to_decimal(&out[..15]);
        let second = base900_to_decimal(&out[15..]);
        assert_eq!(first.strip_prefix('1'), Some(&digits[..44]));
        assert_eq!(second.strip_prefix('1'), Some(&digits[44..]));
    }

    #[test]
    fn test_explicit_numeric() {
        assert_eq!(encode_high_level("42", Compaction::Numeric, None).unwrap(), [902, 142]);
        assert!(matches!(encode_high_level("4a", Compaction::Numeric, None),
            Err(EncodeError::InvalidInput(_))));
    }

    #[test]
    fn test_encode_bytes_multiple() {
        assert_eq!(encode_high_level("alcool", Compaction::Byte, None).unwrap(),
            [924, 163, 238, 432, 766, 244]);
    }

    #[test]
    fn test_encode_bytes_not_multiple() {
        assert_eq!(encode_high_level("encode bin", Compaction::Byte, None).unwrap(),
            [901, 169, 883, 224, 680, 517, 32, 98, 105, 110]);
    }

    #[test]
    fn test_binary_group_round_trip() {
        let bytes = [0xFF, 0x00, 0x7F, 0x80, 0x01, 0xFE];
        let mut out = Vec::new();
        encode_binary(&bytes, EncodingMode::Byte, &mut out);
        assert_eq!(out[0], M_LATCH_BYTE_M6);

        let value = out[1..].iter().fold(0u64, |acc, &cw| acc * 900 + cw as u64);
        assert_eq!(&value.to_be_bytes()[2..], &bytes[..]);
    }

    #[test]
    fn test_single_byte_shift_and_latch() {
        let mut out = Vec::new();
        encode_binary(&[7], EncodingMode::Text, &mut out);
        assert_eq!(out, [M_SHIFT_BYTE, 7]);

        out.clear();
        encode_binary(&[7], EncodingMode::Numeric, &mut out);
        assert_eq!(out, [M_LATCH_BYTE, 7]);

        assert_eq!(encode_high_level("\u{1}", Compaction::Byte, None).unwrap(), [M_LATCH_BYTE, 1]);
    }

    #[test]
    fn test_auto_shift_keeps_text_mode() {
        assert_eq!(auto("Hello\u{1}"), [7 * 30 + 27, 4 * 30 + 11, 11 * 30 + 14, 913, 1]);
        assert_eq!(auto("\u{e9}"), [913, 0xE9]);
    }

    #[test]
    fn test_auto_binary_then_text() {
        let cws = auto("\u{1}\u{2}\u{3}ABC");
        // the binary run is only cut by a numeric run, so it takes everything
        assert_eq!(cws[0], M_LATCH_BYTE_M6);
        assert_eq!(cws.len(), 1 + 5);

        let cws = auto("\u{1}\u{2}\u{3}1234567890123ABCDE");
        assert_eq!(&cws[..4], [M_LATCH_BYTE, 1, 2, 3]);
        assert_eq!(cws[4], M_LATCH_NUMERIC);
        // back to text, starting over in alpha
        assert_eq!(&cws[cws.len() - 4..], [M_LATCH_TEXT, 0 * 30 + 1, 2 * 30 + 3, 4 * 30 + 29]);
    }

    #[test]
    fn test_short_text_at_end_stays_text() {
        assert_eq!(auto("ab"), [27 * 30 + 0, 1 * 30 + 29]);
        assert_eq!(auto("123"), [28 * 30 + 1, 2 * 30 + 3]);
    }

    #[test]
    fn test_explicit_text_rejects_binary() {
        assert!(matches!(encode_high_level("a\u{1}", Compaction::Text, None),
            Err(EncodeError::InvalidInput(_))));
        assert!(matches!(encode_high_level("caf\u{e9}", Compaction::Text, None),
            Err(EncodeError::InvalidInput(_))));
    }

    #[test]
    fn test_explicit_numeric_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but have no base 10 ASCII value
        assert!(matches!(encode_high_level("12\u{0663}", Compaction::Numeric, None),
            Err(EncodeError::InvalidInput(_))));
    }

    #[test]
    fn test_charset_directive() {
        assert_eq!(encode_high_level("\u{e9}", Compaction::Auto, Some("UTF-8")).unwrap(),
            [ECI_CODE_PAGE, 26, M_LATCH_BYTE, 0xC3, 0xA9]);
        // the default character set is not announced
        assert_eq!(encode_high_level("AB", Compaction::Auto, Some("ISO-8859-1")).unwrap(), auto("AB"));
        assert!(matches!(encode_high_level("AB", Compaction::Auto, Some("EBCDIC")),
            Err(EncodeError::InvalidConfiguration(_))));
        assert!(matches!(encode_high_level("\u{20ac}", Compaction::Auto, None),
            Err(EncodeError::InvalidInput(_))));
    }

    #[test]
    fn test_encoding_eci_ranges() {
        let eci = |n| {
            let mut out = Vec::new();
            encoding_eci(n, &mut out).map(|_| out)
        };
        assert_eq!(eci(26).unwrap(), [927, 26]);
        assert_eq!(eci(900).unwrap(), [926, 0, 0]);
        assert_eq!(eci(810_899).unwrap(), [926, 899, 899]);
        assert_eq!(eci(810_900).unwrap(), [925, 0]);
        assert_eq!(eci(811_799).unwrap(), [925, 899]);
        assert!(matches!(eci(811_800), Err(EncodeError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_compaction_from_str() {
        assert_eq!("numeric".parse::<Compaction>(), Ok(Compaction::Numeric));
        assert_eq!("AUTO".parse::<Compaction>(), Ok(Compaction::Auto));
        assert!("binary".parse::<Compaction>().is_err());
    }
}
