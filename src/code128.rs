//! Code 128 symbology encoder.
//!
//! Turns short ASCII text into the bar/space module pattern of a Code 128
//! symbol: START, one symbol per value, the modulo-103 checksum, STOP.
//!
//! # Example
//!
//! ```
//! use zenbarcode::{Code128, CodeSet};
//!
//! let encoding = Code128::new().encode("1234").unwrap();
//! assert_eq!(encoding.code_set, CodeSet::C);
//! assert_eq!(encoding.values, [12, 34]);
//! assert_eq!(encoding.checksum, 82);
//!
//! let pattern = encoding.pattern();
//! assert_eq!(pattern.len(), 11 * (2 + 2) + 13);
//! ```

use core::fmt;

use tracing::debug;

use crate::error::InputError;
use crate::tables::{
    CODE_SET_A, CODE_SET_B, PATTERNS, START_A, START_B, START_C, STOP, STOP_WIDTH, SYMBOL_WIDTH,
};

/// Maximum number of input characters accepted by the encoder.
pub const MAX_DATA_LEN: usize = 48;

/// Code 128 character subset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodeSet {
    /// Uppercase, digits and punctuation (space through `_`).
    A,
    /// Printable ASCII including lowercase (space through `~`).
    B,
    /// Digit pairs `00`–`99`, one symbol per pair.
    C,
}

impl CodeSet {
    /// Code value of the START symbol that selects this subset.
    pub const fn start_value(self) -> u8 {
        match self {
            Self::A => START_A,
            Self::B => START_B,
            Self::C => START_C,
        }
    }

    /// Pick the subset for `data`.
    ///
    /// Even-length digit strings of at least four characters use C. Otherwise
    /// any lowercase letter selects B, and everything else falls to A. The
    /// digit test is checked first.
    pub fn select(data: &str) -> Self {
        let bytes = data.as_bytes();
        if bytes.len() >= 4 && bytes.len() % 2 == 0 && bytes.iter().all(u8::is_ascii_digit) {
            return Self::C;
        }
        if bytes.iter().any(u8::is_ascii_lowercase) {
            Self::B
        } else {
            Self::A
        }
    }

    fn charset(self) -> &'static [u8] {
        match self {
            Self::A => CODE_SET_A,
            Self::B => CODE_SET_B,
            Self::C => b"",
        }
    }
}

impl fmt::Display for CodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        })
    }
}

/// Encoded form of one input string, before pattern assembly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Encoding {
    /// Subset chosen for the whole string.
    pub code_set: CodeSet,
    /// Symbol values in input order (0–102).
    pub values: Vec<u8>,
    /// Modulo-103 checksum over `code_set` and `values`.
    pub checksum: u8,
}

impl Encoding {
    /// Number of modules the assembled pattern will contain.
    pub fn pattern_len(&self) -> usize {
        SYMBOL_WIDTH * (2 + self.values.len()) + STOP_WIDTH
    }

    /// Assemble the `0`/`1` module pattern: START, values, checksum, STOP.
    pub fn pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.pattern_len());
        pattern.push_str(PATTERNS[self.code_set.start_value() as usize]);
        for &value in &self.values {
            pattern.push_str(PATTERNS[value as usize]);
        }
        pattern.push_str(PATTERNS[self.checksum as usize]);
        pattern.push_str(PATTERNS[STOP as usize]);
        pattern
    }
}

/// Stateless Code 128 encoder.
///
/// All tables are constants, so one instance can be shared freely across
/// threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code128;

impl Code128 {
    pub const fn new() -> Self {
        Self
    }

    /// Encode `data` into the binary module pattern.
    ///
    /// Deterministic: the same input always yields the same pattern.
    pub fn generate(&self, data: &str) -> Result<String, InputError> {
        Ok(self.encode(data)?.pattern())
    }

    /// Validate `data`, select a subset and compute values and checksum.
    pub fn encode(&self, data: &str) -> Result<Encoding, InputError> {
        check_bounds(data)?;
        if !data.is_ascii() {
            return Err(InputError::NonAscii);
        }

        let code_set = CodeSet::select(data);
        let values = to_values(data, code_set)?;
        let checksum = checksum(code_set, &values);
        debug!(%code_set, symbols = values.len(), checksum, "encoded code 128 data");

        Ok(Encoding {
            code_set,
            values,
            checksum,
        })
    }

    /// Whether [`generate`](Self::generate) would succeed for `data`.
    pub fn validate_data(&self, data: &str) -> bool {
        if check_bounds(data).is_err() {
            return false;
        }
        to_values(data, CodeSet::select(data)).is_ok()
    }

    /// Width of a pattern in modules.
    pub fn pattern_width(&self, pattern: &str) -> usize {
        pattern.chars().count()
    }
}

fn check_bounds(data: &str) -> Result<(), InputError> {
    if data.is_empty() {
        return Err(InputError::Empty);
    }
    let len = data.chars().count();
    if len > MAX_DATA_LEN {
        return Err(InputError::TooLong { len });
    }
    Ok(())
}

/// Map characters (or digit pairs for C) to symbol values.
fn to_values(data: &str, code_set: CodeSet) -> Result<Vec<u8>, InputError> {
    if code_set == CodeSet::C {
        // select() only picks C for even-length ASCII digit strings.
        return Ok(data
            .as_bytes()
            .chunks_exact(2)
            .map(|pair| (pair[0] - b'0') * 10 + (pair[1] - b'0'))
            .collect());
    }

    let charset = code_set.charset();
    data.chars()
        .map(|ch| {
            u8::try_from(ch)
                .ok()
                .and_then(|b| charset.iter().position(|&c| c == b))
                .map(|idx| idx as u8)
                .ok_or(InputError::UnsupportedChar { ch, code_set })
        })
        .collect()
}

fn checksum(code_set: CodeSet, values: &[u8]) -> u8 {
    let weighted: u32 = values
        .iter()
        .enumerate()
        .map(|(i, &v)| v as u32 * (i as u32 + 1))
        .sum();
    ((code_set.start_value() as u32 + weighted) % 103) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_binary(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b == b'0' || b == b'1')
    }

    #[test]
    fn even_digits_use_code_set_c() {
        let enc = Code128::new().encode("1234").unwrap();
        assert_eq!(enc.code_set, CodeSet::C);
        assert_eq!(enc.values, [12, 34]);
        // (105 + 12*1 + 34*2) % 103
        assert_eq!(enc.checksum, 82);
        assert_eq!(
            enc.pattern(),
            concat!(
                "11010011100", // START C
                "10110011100", // 12
                "10001011000", // 34
                "10010011110", // checksum 82
                "1100011101011"
            )
        );
    }

    #[test]
    fn odd_or_short_digits_do_not_use_code_set_c() {
        assert_eq!(CodeSet::select("12345"), CodeSet::A);
        assert_eq!(CodeSet::select("12"), CodeSet::A);
        assert_eq!(CodeSet::select("123456"), CodeSet::C);

        let enc = Code128::new().encode("12345").unwrap();
        assert_eq!(enc.values, [17, 18, 19, 20, 21]);
    }

    #[test]
    fn lowercase_selects_code_set_b() {
        let enc = Code128::new().encode("test123").unwrap();
        assert_eq!(enc.code_set, CodeSet::B);
        assert_eq!(enc.values, [84, 69, 83, 84, 17, 18, 19]);
        assert_eq!(enc.checksum, 1);
        assert_eq!(CodeSet::select("TeSt123"), CodeSet::B);
    }

    #[test]
    fn uppercase_selects_code_set_a() {
        let enc = Code128::new().encode("ABC").unwrap();
        assert_eq!(enc.code_set, CodeSet::A);
        assert_eq!(enc.values, [33, 34, 35]);
        // (103 + 33 + 68 + 105) = 309 = 3 * 103
        assert_eq!(enc.checksum, 0);
    }

    #[test]
    fn pattern_length_formula() {
        let coder = Code128::new();
        for data in ["1234", "ABC123", "test123", "!@#$%^&*()", "0"] {
            let enc = coder.encode(data).unwrap();
            let pattern = enc.pattern();
            assert_eq!(pattern.len(), 11 * (2 + enc.values.len()) + 13, "{data}");
            assert_eq!(pattern.len(), enc.pattern_len());
            assert!(is_binary(&pattern));
        }
    }

    #[test]
    fn generate_is_deterministic() {
        let coder = Code128::new();
        assert_eq!(coder.generate("TEST123"), coder.generate("TEST123"));
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(Code128::new().generate(""), Err(InputError::Empty));
        assert!(!Code128::new().validate_data(""));
    }

    #[test]
    fn length_boundary() {
        let coder = Code128::new();
        let max = "A".repeat(48);
        assert!(is_binary(&coder.generate(&max).unwrap()));
        assert!(coder.validate_data(&max));

        let over = "A".repeat(49);
        assert_eq!(coder.generate(&over), Err(InputError::TooLong { len: 49 }));
        assert!(!coder.validate_data(&over));
    }

    #[test]
    fn non_ascii_rejected() {
        let coder = Code128::new();
        assert_eq!(coder.generate("test€123"), Err(InputError::NonAscii));
        assert!(!coder.validate_data("test€123"));
        assert!(!coder.validate_data("test€"));
    }

    #[test]
    fn unsupported_characters_name_the_subset() {
        let coder = Code128::new();
        assert_eq!(
            coder.generate("AB\tC"),
            Err(InputError::UnsupportedChar {
                ch: '\t',
                code_set: CodeSet::A
            })
        );
        assert_eq!(
            coder.generate("ab\x7f"),
            Err(InputError::UnsupportedChar {
                ch: '\x7f',
                code_set: CodeSet::B
            })
        );
        assert!(!coder.validate_data("AB\tC"));
    }

    #[test]
    fn single_zero_is_valid() {
        let enc = Code128::new().encode("0").unwrap();
        assert_eq!(enc.code_set, CodeSet::A);
        assert_eq!(enc.values, [16]);
    }

    #[test]
    fn all_printable_ascii_encodes() {
        let printable: String = (32u8..=126).map(char::from).take(48).collect();
        let pattern = Code128::new().generate(&printable).unwrap();
        assert!(is_binary(&pattern));

        let tail: String = (32u8..=126).map(char::from).skip(48).collect();
        assert!(Code128::new().validate_data(&tail));
    }

    #[test]
    fn validate_agrees_with_generate() {
        let coder = Code128::new();
        let mut inputs: Vec<String> = (0u8..=127).map(|b| format!("X{}", b as char)).collect();
        inputs.extend((0u8..=127).map(|b| format!("x{}", b as char)));
        inputs.extend(["", "é", "12ab", "0000", "A".repeat(49).as_str()].map(String::from));
        for data in &inputs {
            assert_eq!(
                coder.validate_data(data),
                coder.generate(data).is_ok(),
                "disagreement for {data:?}"
            );
        }
    }

    #[test]
    fn checksum_always_in_range() {
        let coder = Code128::new();
        for len in 1..=48 {
            // leading lowercase forces B, which covers all printable ASCII
            let data: String = core::iter::once('z')
                .chain((1..len).map(|i| char::from(32 + (i * 37 % 95) as u8)))
                .collect();
            let enc = coder.encode(&data).unwrap();
            assert!(enc.checksum <= 102);
            assert!(enc.values.iter().all(|&v| v <= 102));
        }
    }

    #[test]
    fn pattern_width_counts_modules() {
        assert_eq!(Code128::new().pattern_width("110110011001101100110"), 21);
        assert_eq!(Code128::new().pattern_width(""), 0);
    }
}
