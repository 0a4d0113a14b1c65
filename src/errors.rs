use std::fmt;

/// Everything that can go wrong while turning text into something the engine understands.
///
/// The engine itself never surfaces these: its operations absorb them as no-ops.
#[derive(Clone, PartialEq)]
pub enum CalcError {
    StrToFloat(String),
    StrToExponent(String),
    NotFinite(String),

    InvalidOp(String),
    InvalidDigit(char),
    InvalidMode(String),
    InvalidKey(String),

    ParseFailed(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            CalcError::StrToFloat(s) => write!(f, "Failed to convert '{}' to float", s),
            CalcError::StrToExponent(s) => write!(f, "Failed to convert '{}' to exponent", s),
            CalcError::NotFinite(s) => write!(f, "'{}' is out of range", s),

            CalcError::InvalidOp(s) => write!(f, "Invalid operator '{}'", s),
            CalcError::InvalidDigit(c) => write!(f, "Invalid digit '{}'", c),
            CalcError::InvalidMode(s) => write!(f, "Invalid display mode '{}'", s),
            CalcError::InvalidKey(s) => write!(f, "Invalid key '{}'", s),

            CalcError::ParseFailed(s) => write!(f, "Failed to parse keys: {}", s),
        }
    }
}

impl fmt::Debug for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for CalcError {}
