use std::str;

use crate::errors::*;

/// Result of turning entry text into a stack value
pub type NumResult = Result<f64, CalcError>;

const F64_BUF_LEN: usize = 48;

/// Shortest decimal text that reads back as the same number.
/// Integral values are written without the `.0` tail: `15`, `-4`, `3.14`
pub fn format_f64(g: f64) -> String {
    if g == 0.0 {
        // covers -0.0 as well
        return "0".to_string();
    }
    if !g.is_finite() {
        return format!("{}", g);
    }
    let mut buf = [b'\0'; F64_BUF_LEN];
    let s = match dtoa::write(&mut buf[..], g) {
        Ok(len) => match str::from_utf8(&buf[..len]) {
            Ok(s) => s.to_string(),
            Err(..) => format!("{}", g),
        },
        Err(..) => format!("{}", g),
    };
    match s.strip_suffix(".0") {
        Some(int_part) => int_part.to_string(),
        None => s,
    }
}

/// Converts a mantissa buffer (`-12.5`, `0.`, `7`) to a number.
/// Only the entry grammar is accepted: optional `-`, digits, at most one `.`
pub fn str_to_f64(s: &str) -> NumResult {
    let body = s.strip_prefix('-').unwrap_or(s);
    let has_digit = body.chars().any(|c| c.is_ascii_digit());
    let only_digits = body.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !has_digit || !only_digits || body.matches('.').count() > 1 {
        return Err(CalcError::StrToFloat(s.to_owned()));
    }

    match s.parse::<f64>() {
        Ok(f) => Ok(f),
        Err(..) => Err(CalcError::StrToFloat(s.to_owned())),
    }
}

/// Converts an exponent buffer to a power of ten. An empty buffer means `0`
pub fn str_to_exponent(s: &str) -> Result<i32, CalcError> {
    if s.is_empty() {
        return Ok(0);
    }
    match s.parse::<i32>() {
        Ok(e) => Ok(e),
        Err(..) => Err(CalcError::StrToExponent(s.to_owned())),
    }
}

/// Resolves the entry buffers to the value a commit would push.
///
/// `mantissa * 10^exponent` is computed by reading `<mantissa>e<exponent>` back
/// as one literal, so `5.6e-3` gives the double closest to `0.0056` instead of
/// accumulating a rounding error in the multiplication.
pub fn resolve(mantissa: &str, exponent: Option<&str>) -> NumResult {
    let m = str_to_f64(mantissa)?;
    let v = match exponent {
        None => m,
        Some(exp) => {
            let e = str_to_exponent(exp)?;
            let literal = format!("{}e{}", m, e);
            match literal.parse::<f64>() {
                Ok(v) => v,
                Err(..) => return Err(CalcError::StrToFloat(literal)),
            }
        }
    };

    if !v.is_finite() {
        let text = match exponent {
            Some(exp) => format!("{}e{}", mantissa, exp),
            None => mantissa.to_string(),
        };
        return Err(CalcError::NotFinite(text));
    }
    Ok(v)
}

/// Adds or removes the leading minus of an entry buffer
pub(crate) fn toggle_sign(s: &str) -> String {
    match s.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{}", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_f64(15.0), "15");
        assert_eq!(format_f64(-4.0), "-4");
        assert_eq!(format_f64(3.14), "3.14");
        assert_eq!(format_f64(0.0056), "0.0056");
        assert_eq!(format_f64(-0.0), "0");
        assert_eq!(format_f64(20_000_000_000.0), "20000000000");
    }

    #[test]
    fn test_str_to_f64() {
        assert_eq!(str_to_f64("15"), Ok(15.0));
        assert_eq!(str_to_f64("-12.5"), Ok(-12.5));
        assert_eq!(str_to_f64("0."), Ok(0.0));
        assert_eq!(str_to_f64("12."), Ok(12.0));
        assert_eq!(str_to_f64("000123"), Ok(123.0));
        assert!(str_to_f64("-").is_err());
        assert!(str_to_f64("").is_err());
        assert!(str_to_f64("inf").is_err());
        assert!(str_to_f64("1e5").is_err());
        assert!(str_to_f64("1.2.3").is_err());
    }

    #[test]
    fn test_exponent() {
        assert_eq!(str_to_exponent(""), Ok(0));
        assert_eq!(str_to_exponent("-3"), Ok(-3));
        assert_eq!(str_to_exponent("05"), Ok(5));
        assert_eq!(
            str_to_exponent("-"),
            Err(CalcError::StrToExponent("-".to_string()))
        );
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("1.23", Some("4")), Ok(12300.0));
        assert_eq!(resolve("5.6", Some("-3")), Ok(0.0056));
        assert_eq!(resolve("0.123", Some("4")), Ok(1230.0));
        assert_eq!(resolve("3.14", Some("")), Ok(3.14));
        assert_eq!(resolve("1", Some("20")), Ok(1e20));
        assert_eq!(resolve("1", Some("-20")), Ok(1e-20));
        assert_eq!(resolve("-8", None), Ok(-8.0));
        assert!(resolve("1", Some("999")).is_err());
        assert!(resolve("1", Some("-")).is_err());
        assert!(resolve("-", Some("2")).is_err());
    }

    #[test]
    fn test_toggle_sign() {
        assert_eq!(toggle_sign("12"), "-12");
        assert_eq!(toggle_sign("-12"), "12");
        assert_eq!(toggle_sign("-"), "");
    }
}
