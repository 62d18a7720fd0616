//! Runtime type checks over loosely typed values.
//!
//! Values arriving from query strings, config files or JSON bodies are
//! classified into a closed set of kinds before being checked.

/// A loosely typed value as received from user input or a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Arrays and objects.
    Structured(serde_json::Value),
    /// Null or missing.
    Absent,
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            // serde_json 的數字一定能轉成 f64（可能損失精度）
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            structured => Value::Structured(structured),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Absent)
    }
}

/// Check if the value is of the numeric kind. NaN and infinities count.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Check if the value is a numeric string.
///
/// Any value that is not text fails. Text passes only when the whole string
/// coerces to a number *and* a leading numeric prefix can be parsed from it,
/// which rejects blank strings (they coerce to 0) and trailing garbage such
/// as `"12px"` (its prefix parses).
pub fn is_numeric(value: &Value) -> bool {
    let Value::Text(text) = value else {
        return false;
    };
    coerce_to_number(text).is_some() && parse_float_prefix(text).is_some()
}

/// Whole-string numeric coercion. `None` stands for NaN.
pub(crate) fn coerce_to_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(is_number_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let len = scan_decimal_literal(trimmed)?;
    if len != trimmed.len() {
        return None;
    }
    decimal_value(trimmed)
}

/// Longest-prefix numeric parse. `None` stands for NaN.
pub(crate) fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(is_number_whitespace);
    let len = scan_decimal_literal(trimmed)?;
    decimal_value(&trimmed[..len])
}

fn is_number_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `0x`, `0o` and `0b` integer literals. Unsigned only.
///
/// Returns `None` when the text has no radix prefix, `Some(None)` when the
/// prefix is present but the digits are not valid.
fn parse_radix_literal(text: &str) -> Option<Option<f64>> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let mut value = 0f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * radix as f64 + d as f64,
            None => return Some(None),
        }
    }
    Some(Some(value))
}

/// Byte length of the longest decimal literal at the start of `text`:
/// `[+-]? (Infinity | digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
fn scan_decimal_literal(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    if text[pos..].starts_with("Infinity") {
        return Some(pos + "Infinity".len());
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        // "5." 合法，但單獨的 "." 不合法
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    Some(pos)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn decimal_value(literal: &str) -> Option<f64> {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}
