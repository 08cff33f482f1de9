//! Fixed Code 128 tables: symbol patterns and the A/B character sets.

/// Code value of the START A symbol.
pub(crate) const START_A: u8 = 103;
/// Code value of the START B symbol.
pub(crate) const START_B: u8 = 104;
/// Code value of the START C symbol.
pub(crate) const START_C: u8 = 105;
/// Code value of the STOP symbol (the only 13-module entry).
pub(crate) const STOP: u8 = 106;

/// Modules per regular symbol.
pub const SYMBOL_WIDTH: usize = 11;
/// Modules in the STOP symbol, including the terminating bar.
pub const STOP_WIDTH: usize = 13;

/// Bar/space patterns indexed by code value, `1` = bar, `0` = space.
pub(crate) const PATTERNS: [&str; 107] = [
    "11011001100", "11001101100", "11001100110", "10010011000", // 0
    "10010001100", "10001001100", "10011001000", "10011000100",
    "10001100100", "11001001000", "11001000100", "11000100100",
    "10110011100", "10011011100", "10011001110", "10111001100",
    "10011101100", "10011100110", "11001110010", "11001011100", // 16
    "11001001110", "11011100100", "11001110100", "11101101110",
    "11101001100", "11100101100", "11100100110", "11101100100",
    "11100110100", "11100110010", "11011011000", "11011000110",
    "11000110110", "10100011000", "10001011000", "10001000110", // 32
    "10110001000", "10001101000", "10001100010", "11010001000",
    "11000101000", "11000100010", "10110111000", "10110001110",
    "10001101110", "10111011000", "10111000110", "10001110110",
    "11101110110", "11010001110", "11000101110", "11011101000", // 48
    "11011100010", "11011101110", "11101011000", "11101000110",
    "11100010110", "11101101000", "11101100010", "11100011010",
    "11101111010", "11001000010", "11110001010", "10100110000",
    "10100001100", "10010110000", "10010000110", "10000101100", // 64
    "10000100110", "10110010000", "10110000100", "10011010000",
    "10011000010", "10000110100", "10000110010", "11000010010",
    "11001010000", "11110111010", "11000010100", "10001111010",
    "10100111100", "10010111100", "10010011110", "10111100100", // 80
    "10011110100", "10011110010", "11110100100", "11110010100",
    "11110010010", "11011011110", "11011110110", "11110110110",
    "10101111000", "10100011110", "10001011110", "10111101000",
    "10111100010", "11110101000", "11110100010", "10111011110", // 96
    "10111101110", "11101011110", "11110101110", "11010000100",
    "11010010000", "11010011100", "1100011101011",
];

/// Code Set A as supported here: space through underscore, in value order.
pub(crate) const CODE_SET_A: &[u8; 64] =
    b" !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_";

/// Code Set B: printable ASCII, space through tilde, in value order.
pub(crate) const CODE_SET_B: &[u8; 95] =
    b" !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";
