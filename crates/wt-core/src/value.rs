//! Plain data reconstructed from literal expressions.
//!
//! A [`PlainValue`] mirrors what a JavaScript object literal holds once its
//! literal parts are evaluated: strings, numbers, booleans, arrays, and
//! objects. Anything that cannot be determined statically becomes
//! [`PlainValue::Absent`], which serializes the way `JSON.stringify` treats
//! `undefined`: dropped from objects, `null` inside arrays.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A statically reconstructed literal value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlainValue {
    /// The source value was not a supported literal.
    #[default]
    Absent,
    String(String),
    Number(f64),
    Bool(bool),
    Array(Vec<PlainValue>),
    /// Key/value pairs in declaration order.
    Object(Vec<(String, PlainValue)>),
}

impl PlainValue {
    /// Build a string value.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Build an empty string value, the default for descriptions.
    #[must_use]
    pub const fn empty() -> Self {
        Self::String(String::new())
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the inner string when this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key of an object value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Insert into an ordered entry list with last-write-wins semantics.
    ///
    /// A repeated key keeps the position of its first occurrence and takes
    /// the newest value, matching how object literals behave at runtime.
    pub fn insert_entry(entries: &mut Vec<(String, Self)>, key: String, value: Self) {
        if let Some(slot) = entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            entries.push((key, value));
        }
    }
}

impl From<&str> for PlainValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PlainValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for PlainValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for PlainValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn integral(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        #[allow(clippy::cast_possible_truncation)]
        Some(n as i64)
    } else {
        None
    }
}

/// `Number.prototype.toString` for finite, non-safe-integer values.
///
/// Rust's `{:e}` yields the shortest round-trip digits; only the placement
/// of the decimal point differs from JavaScript.
fn js_number(n: f64) -> String {
    let sci = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return sci;
    };
    let digits: String = mantissa.chars().filter(|&c| c != '.').collect();
    let len = i64::try_from(digits.len()).unwrap_or(i64::MAX);
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if len <= point && point <= 21 {
        let zeros = usize::try_from(point - len).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else if 0 < point && point <= 21 {
        let split = usize::try_from(point).unwrap_or(0);
        format!("{}.{}", &digits[..split], &digits[split..])
    } else if -6 < point && point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{first}e{sign}{}", exponent.abs())
        } else {
            format!("{first}.{rest}e{sign}{}", exponent.abs())
        }
    };
    if n < 0.0 { format!("-{body}") } else { body }
}

/// Renders the value the way JavaScript string interpolation would.
impl fmt::Display for PlainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("undefined"),
            Self::String(s) => f.write_str(s),
            Self::Number(n) => {
                if let Some(i) = integral(*n) {
                    write!(f, "{i}")
                } else if n.is_nan() {
                    f.write_str("NaN")
                } else if n.is_infinite() {
                    f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else {
                    f.write_str(&js_number(*n))
                }
            }
            Self::Bool(b) => write!(f, "{b}"),
            Self::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    // `undefined` elements join as empty strings.
                    if !item.is_absent() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => f.write_str("[object Object]"),
        }
    }
}

impl Serialize for PlainValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_unit(),
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(n) => match integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let present = entries.iter().filter(|(_, v)| !v.is_absent());
                let mut map = serializer.serialize_map(Some(present.clone().count()))?;
                for (key, value) in present {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl JsonSchema for PlainValue {
    fn schema_name() -> Cow<'static, str> {
        "PlainValue".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "A literal value reconstructed from source; null marks an undeterminable array element.",
            "type": ["string", "number", "boolean", "array", "object", "null"]
        })
    }
}
