//! String-to-typed-value inference.
//!
//! `infer_value_type` reinterprets string input as boolean or number when
//! the whole string reads as one; everything else passes through
//! untouched. `parse_bool` is the narrower, case-insensitive boolean
//! parser. Neither can fail: a rejected parse returns the original value
//! or the "not a boolean" sentinel.

use value_types::{BoxedPrimitive, Value};

use crate::classifier::resolve_type_name;

/// The result of inferring a typed value from input.
///
/// `original` is always the untouched input; `parsed` is the
/// reinterpreted boolean/number or the original value; `type_name` is
/// the type name of `parsed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    /// The untouched input value.
    pub original: Value,
    /// The reinterpreted value, or the input where no reinterpretation
    /// applies.
    pub parsed: Value,
    /// Type name of the parsed value.
    pub type_name: String,
}

impl Inference {
    fn new(original: Value, parsed: Value, type_name: impl Into<String>) -> Self {
        Inference {
            original,
            parsed,
            type_name: type_name.into(),
        }
    }
}

/// Infer a typed value from the input.
///
/// Non-string input is returned unchanged with its own type name. String
/// input is trimmed, then:
///
/// - exactly `"true"` or `"false"` (case-sensitive) becomes a boolean;
/// - text that reads entirely as one number becomes that number. The
///   numeric interpretation is accepted only when the prefix-parsed
///   number re-stringifies to the same canonical text as converting the
///   whole trimmed input, which rejects partial parses like `"42abc"`;
/// - anything else stays a string.
///
/// # Examples
///
/// ```
/// use inspect::infer_value_type;
/// use value_types::Value;
///
/// assert_eq!(infer_value_type(&Value::string("42")).parsed, Value::number(42.0));
/// assert_eq!(infer_value_type(&Value::string(" true ")).parsed, Value::boolean(true));
///
/// let rejected = infer_value_type(&Value::string("42abc"));
/// assert_eq!(rejected.parsed, Value::string("42abc"));
/// assert_eq!(rejected.type_name, "string");
/// ```
pub fn infer_value_type(value: &Value) -> Inference {
    let type_name = resolve_type_name(value);
    if type_name != "string" {
        return Inference::new(value.clone(), value.clone(), type_name);
    }
    let text = match string_text(value) {
        Some(text) => text,
        None => return Inference::new(value.clone(), value.clone(), type_name),
    };

    let trimmed = text.trim();
    if trimmed == "true" || trimmed == "false" {
        return Inference::new(value.clone(), Value::boolean(trimmed == "true"), "boolean");
    }

    let parsed = parse_float_prefix(trimmed);
    if !parsed.is_nan() {
        // Normalize both to canonical numeric text; a partial parse
        // leaves the two sides disagreeing.
        let parsed_text = canonical_number_text(parsed);
        let input_numeric = canonical_number_text(to_number(trimmed));
        if parsed_text == input_numeric {
            return Inference::new(value.clone(), Value::number(parsed), "number");
        }
    }
    Inference::new(value.clone(), value.clone(), "string")
}

/// Parse a boolean out of the input.
///
/// Booleans pass through; strings are trimmed and lower-cased, so the
/// match is case-insensitive (unlike [`infer_value_type`]). Anything
/// else yields `None`, the explicit "not a boolean" sentinel.
///
/// # Examples
///
/// ```
/// use inspect::parse_bool;
/// use value_types::Value;
///
/// assert_eq!(parse_bool(&Value::string(" TrUe ")), Some(true));
/// assert_eq!(parse_bool(&Value::boolean(false)), Some(false));
/// assert_eq!(parse_bool(&Value::string("yes")), None);
/// ```
pub fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Boxed(b) => match &**b {
            BoxedPrimitive::Boolean(v) => Some(*v),
            BoxedPrimitive::String(s) => parse_bool_text(s),
            _ => None,
        },
        Value::String(s) => parse_bool_text(s),
        _ => None,
    }
}

fn parse_bool_text(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// The string payload of a string or boxed String value.
fn string_text(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Boxed(b) => match &**b {
            BoxedPrimitive::String(s) => Some(s),
            _ => None,
        },
        _ => None,
    }
}

/// Canonical numeric text, following the host language's number
/// stringification: NaN and the infinities by name, integral doubles
/// without a decimal point, shortest round-trip decimal otherwise.
fn canonical_number_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if n == n.trunc() && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }
    let mut buffer = ryu::Buffer::new();
    buffer.format(n).to_string()
}

/// Longest-prefix float parse: consumes an optional sign, an Infinity
/// literal or a decimal mantissa with optional exponent, and ignores any
/// trailing text. NaN when no numeric prefix exists.
fn parse_float_prefix(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    if text[i..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let mut saw_digit = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        saw_digit = true;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return f64::NAN;
    }

    let mut end = i;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exponent_digits = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // The exponent only counts if it has at least one digit.
        if j > exponent_digits {
            end = j;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Whole-string numeric conversion: empty text is zero, Infinity
/// literals and radix prefixes are honored, anything else must read
/// entirely as one decimal number.
fn to_number(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return i64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}
