//! Format-neutral values, used to carry wire fields that no model declares.

use std::collections::BTreeMap;

/// Any value a parse node can hold.
///
/// This is the payload type of the additional-data bag: fields of a wire
/// object that the model does not declare are kept here verbatim so that a
/// read-modify-write cycle does not lose them.
///
/// ```rust
/// use odata_dto::{Number, Value};
///
/// let value = Value::from(vec![Value::from(1_i64), Value::from("two")]);
/// assert_eq!(
///     value,
///     Value::Array(vec![Value::Number(Number::U64(1)), Value::String("two".to_owned())]),
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

/// A JSON-style number.
///
/// The parser stores non-negative integers as `U64`. Integers compare by
/// value whatever their variant, so `I64(5) == U64(5)`; floats only equal
/// floats.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    U64(u64),
    I64(i64),
    F64(f64),
}

/// Open bag of wire fields not covered by a model's declared schema.
pub type AdditionalData = BTreeMap<String, Value>;

impl Default for Value {
    /// The default value is null.
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    /// Name of the kind of value held, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Number(Number::U64(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::F64(f))
    }
}

impl From<Vec<Value>> for Value {
    fn from(array: Vec<Value>) -> Self {
        Value::Array(array)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(object: BTreeMap<String, Value>) -> Self {
        Value::Object(object)
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        if i >= 0 {
            Number::U64(i as u64)
        } else {
            Number::I64(i)
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::F64(a), Number::F64(b)) => a == b,
            (Number::F64(_), _) | (_, Number::F64(_)) => false,
            (a, b) => a.as_i128() == b.as_i128(),
        }
    }
}

impl Number {
    /// The number as an `i128`, if it is integral.
    pub fn as_i128(self) -> Option<i128> {
        match self {
            Number::U64(u) => Some(u.into()),
            Number::I64(i) => Some(i.into()),
            Number::F64(_) => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::U64(u) => u as f64,
            Number::I64(i) => i as f64,
            Number::F64(f) => f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_positive_integers_normalize() {
        assert_eq!(Value::from(7_i64), Value::Number(Number::U64(7)));
        assert_eq!(Value::from(-7_i64), Value::Number(Number::I64(-7)));
    }

    #[test]
    fn kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from("x").kind(), "string");
        assert_eq!(Value::from(vec![]).kind(), "array");
        assert_eq!(Value::from(BTreeMap::new()).kind(), "object");
    }

    #[test]
    fn number_conversions() {
        assert_eq!(Number::U64(3).as_i128(), Some(3));
        assert_eq!(Number::I64(-3).as_i128(), Some(-3));
        assert_eq!(Number::F64(1.5).as_i128(), None);
        assert_eq!(Number::I64(-2).as_f64(), -2.0);
    }

    #[test]
    fn integer_equality_ignores_the_variant() {
        assert_eq!(Number::I64(7), Number::U64(7));
        assert_eq!(Number::U64(0), Number::I64(0));
        assert_ne!(Number::I64(-1), Number::U64(u64::MAX));
        assert_ne!(Number::F64(7.0), Number::I64(7));
    }
}
