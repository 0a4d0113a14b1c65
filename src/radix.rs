use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed};

use crate::errors::*;
use crate::value::format_f64;

/// Text shown instead of a number that has no integer rendering
pub const ERROR_TEXT: &str = "Error";

// negative integers are shown as unsigned 32-bit two's complement words
const WORD_MODULUS: u64 = 1 << 32;

// Drops the fraction (toward zero) and renders what is left in `base`
fn int_to_base(value: f64, base: u32, prefix: &str) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }
    let vi = match BigInt::from_f64(value.trunc()) {
        Some(i) => i,
        None => return ERROR_TEXT.to_string(),
    };
    let vi = if vi.is_negative() {
        let modulus = BigInt::from(WORD_MODULUS);
        ((vi % &modulus) + &modulus) % &modulus
    } else {
        vi
    };

    format!("{}{}", prefix, vi.to_str_radix(base).to_uppercase())
}

/// `-8` -> `0b11111111111111111111111111111000`, `5.7` -> `0b101`
pub fn to_binary_string(value: f64) -> String {
    int_to_base(value, 2, "0b")
}

/// `64` -> `0o100`
pub fn to_octal_string(value: f64) -> String {
    int_to_base(value, 8, "0o")
}

/// `255` -> `0xFF`, `-1` -> `0xFFFFFFFF`
pub fn to_hex_string(value: f64) -> String {
    int_to_base(value, 16, "0x")
}

/// How stack values are rendered. Never changes the values themselves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Decimal,
    Binary,
    Octal,
    Hexadecimal,
}

impl DisplayMode {
    /// Cycle order: decimal, binary, octal, hexadecimal, decimal
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Decimal => DisplayMode::Binary,
            DisplayMode::Binary => DisplayMode::Octal,
            DisplayMode::Octal => DisplayMode::Hexadecimal,
            DisplayMode::Hexadecimal => DisplayMode::Decimal,
        }
    }

    /// Button caption
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Decimal => "DEC",
            DisplayMode::Binary => "BIN",
            DisplayMode::Octal => "OCT",
            DisplayMode::Hexadecimal => "HEX",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Decimal => "decimal",
            DisplayMode::Binary => "binary",
            DisplayMode::Octal => "octal",
            DisplayMode::Hexadecimal => "hexadecimal",
        }
    }

    /// Renders one stack value. Decimal keeps the fraction and the sign,
    /// the other bases show the truncated integer part only
    pub fn format(self, value: f64) -> String {
        match self {
            DisplayMode::Decimal => format_f64(value),
            DisplayMode::Binary => to_binary_string(value),
            DisplayMode::Octal => to_octal_string(value),
            DisplayMode::Hexadecimal => to_hex_string(value),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "decimal" | "dec" => Ok(DisplayMode::Decimal),
            "binary" | "bin" => Ok(DisplayMode::Binary),
            "octal" | "oct" => Ok(DisplayMode::Octal),
            "hexadecimal" | "hex" => Ok(DisplayMode::Hexadecimal),
            _ => Err(CalcError::InvalidMode(s.to_string())),
        }
    }
}
