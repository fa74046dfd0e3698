//! Total coercions from loosely-typed JSON values to typed fields.
//!
//! Each helper takes the raw value (if any) and the fallback to use when the
//! value is missing or has the wrong shape. None of them fail.

use serde_json::{Map, Number, Value};

/// Returns the object behind `value`, or `None` for null, arrays, and scalars.
pub fn as_record(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// Looks up `key` on `value` when it is an object.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    as_record(value).and_then(|record| record.get(key))
}

/// Looks up `primary`, falling back to `alias` only when `primary` is absent or null.
pub fn field_or_alias<'a>(value: &'a Value, primary: &str, alias: &str) -> Option<&'a Value> {
    present(field(value, primary)).or_else(|| present(field(value, alias)))
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

/// Trimmed textual form of a scalar, or `None` when there is nothing usable.
/// Arrays and objects have no meaningful text and yield `None`.
pub fn text(value: Option<&Value>) -> Option<String> {
    let raw = match value? {
        Value::String(text) => text.clone(),
        Value::Number(number) => number_text(number),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Largest integer a double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Integral floats render without a fractional part, so `10.0` reads as `10`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float)
            if number.is_f64() && float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER =>
        {
            format!("{}", float as i64)
        }
        _ => number.to_string(),
    }
}

pub fn parse_string(value: Option<&Value>, fallback: &str) -> String {
    text(value).unwrap_or_else(|| fallback.to_string())
}

pub fn parse_bool(value: Option<&Value>, fallback: bool) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) if text.eq_ignore_ascii_case("true") => true,
        Some(Value::String(text)) if text.eq_ignore_ascii_case("false") => false,
        _ => fallback,
    }
}

pub fn parse_number(value: Option<&Value>, fallback: f64) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => parse_finite(text),
        _ => None,
    };
    parsed.filter(|number| number.is_finite()).unwrap_or(fallback)
}

/// Numeric text: blank reads as zero, and `0x`/`0o`/`0b` integer literals
/// are accepted alongside decimal notation.
fn parse_finite(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some((radix, digits)) = radix_literal(trimmed) {
        if digits.is_empty() || !digits.chars().all(|digit| digit.is_digit(radix)) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|value| value as f64);
    }
    trimmed.parse::<f64>().ok()
}

fn radix_literal(text: &str) -> Option<(u32, &str)> {
    let prefix = text.get(..2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

/// Count coercion: parses like [`parse_number`], then clamps to at least one.
pub fn parse_count(value: Option<&Value>, fallback: u32) -> u32 {
    let number = parse_number(value, f64::from(fallback)).max(1.0);
    // `as` saturates at u32::MAX and truncates fractional counts.
    number as u32
}
