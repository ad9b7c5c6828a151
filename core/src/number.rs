//! Numeric string recognition and canonical number text.
//!
//! Number text follows the shortest round-trip decimal form, switching to
//! exponent notation below `1e-6` and from `1e21` upward (`1e+21`,
//! `1.5e-7`). Integral values print without a fractional part.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value};

/// Largest integer an IEEE-754 double represents exactly.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("static regex must compile")
});

/// Parses a decimal numeric string.
///
/// Accepts an optional sign, digits with an optional decimal point and an
/// optional exponent. Returns `None` for anything else, including the empty
/// string and values that overflow to infinity.
///
/// # Examples
///
/// ```
/// use exit_coerce_core::parse_numeric;
///
/// assert_eq!(parse_numeric("-4.5", true), Some(-4.5));
/// assert_eq!(parse_numeric(" 12 ", true), Some(12.0));
/// assert_eq!(parse_numeric(" 12 ", false), None);
/// assert_eq!(parse_numeric("asgasdgjasdg", true), None);
/// ```
pub fn parse_numeric(text: &str, trim: bool) -> Option<f64> {
    let candidate = if trim { text.trim() } else { text };
    if !NUMERIC_RE.is_match(candidate) {
        return None;
    }
    candidate.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Builds a JSON number, preferring an integer when `value` is integral and
/// exactly representable. Non-finite input yields `0`.
pub fn number_value(value: f64) -> Value {
    if !value.is_finite() {
        return Value::from(0);
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return Value::from(value as i64);
    }
    Number::from_f64(value).map_or_else(|| Value::from(0), Value::Number)
}

/// Canonical text for a JSON number.
///
/// # Examples
///
/// ```
/// use exit_coerce_core::format_number;
/// use serde_json::Number;
///
/// assert_eq!(format_number(&Number::from(1)), "1");
/// assert_eq!(format_number(&Number::from_f64(-1.1).unwrap()), "-1.1");
/// assert_eq!(format_number(&Number::from_f64(1e21).unwrap()), "1e+21");
/// ```
pub fn format_number(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(uint) = number.as_u64() {
        return uint.to_string();
    }
    format_f64(number.as_f64().unwrap_or_default())
}

fn format_f64(value: f64) -> String {
    // Covers -0 as well.
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !value.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw,
    }
}
