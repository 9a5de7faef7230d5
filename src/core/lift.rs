//! Purpose: Lift host primitives into scalar leaves of the value tree.
//! Exports: `from_bool`, `from_i64`, `from_f64`, `from_decimal`, `from_string`.
//! Role: Adapter family used by sheet conversion and by API callers.
//! Invariants: Adapters are pure and deterministic; equal input, equal scalar.
//! Invariants: Numeric text is locale-independent (Rust `Display` has no locale).
//! Invariants: Non-finite floats are rejected, never silently coerced.
use rust_decimal::Decimal;
use serde_json::Number;

use crate::core::error::{Error, ErrorKind};
use crate::core::value::{Scalar, Value};

pub fn from_bool(value: bool) -> Value {
    Value::Scalar(Scalar::Bool(value))
}

pub fn from_i64(value: i64) -> Value {
    Value::Scalar(Scalar::Number(Number::from(value)))
}

/// Lift a float. `NaN` and infinities have no JSON representation and fail
/// with `UnsupportedShape`.
pub fn from_f64(value: f64) -> Result<Value, Error> {
    match Number::from_f64(value) {
        Some(number) => Ok(Value::Scalar(Scalar::Number(number))),
        None => Err(Error::new(ErrorKind::UnsupportedShape)
            .with_message(format!("{value} has no JSON number form"))),
    }
}

/// Lift a fixed-point decimal through its invariant display form.
pub fn from_decimal(value: Decimal) -> Value {
    // Decimal's display is always plain `-?digits[.digits]`, which is valid
    // JSON number syntax; a parse failure here is an internal-invariant
    // violation, not a recoverable condition.
    match value.to_string().parse::<Number>() {
        Ok(number) => Value::Scalar(Scalar::Number(number)),
        Err(_) => unreachable!("decimal display is valid JSON number syntax"),
    }
}

/// Lift an optional string. `None` becomes the JSON `null` literal, not an
/// empty string.
pub fn from_string(value: Option<&str>) -> Value {
    match value {
        Some(text) => Value::Scalar(Scalar::Text(text.to_string())),
        None => Value::Scalar(Scalar::Null),
    }
}
