//! Value types for Tabula attributes.
//!
//! Values are the atomic data stored in node and edge attributes.
//! `Null` is the missing-value sentinel: it marks cells a mutation never
//! defined and propagates through arithmetic.

use serde::Serialize;
use std::fmt;

use crate::{EvalError, EvalResult};

/// A value that can be stored in an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
}

impl Value {
    /// Returns true if this is the missing-value sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is an integer or float value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric view of Int and Float values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
        }
    }

    // ==================== Arithmetic ====================

    /// Addition. Strings concatenate.
    pub fn add(&self, other: &Value) -> EvalResult<Value> {
        match (self, other) {
            (Value::Null, _) | (_, Value::Null) => Ok(Value::Null),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
            (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{}{}", a, b))),
            _ => self.float_op(other, "add", |a, b| a + b),
        }
    }

    /// Subtraction.
    pub fn sub(&self, other: &Value) -> EvalResult<Value> {
        match (self, other) {
            (Value::Null, _) | (_, Value::Null) => Ok(Value::Null),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_sub(*b))),
            _ => self.float_op(other, "subtract", |a, b| a - b),
        }
    }

    /// Multiplication.
    pub fn mul(&self, other: &Value) -> EvalResult<Value> {
        match (self, other) {
            (Value::Null, _) | (_, Value::Null) => Ok(Value::Null),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_mul(*b))),
            _ => self.float_op(other, "multiply", |a, b| a * b),
        }
    }

    /// Division. Always produces a Float, so `3 / 2` is `1.5`.
    pub fn div(&self, other: &Value) -> EvalResult<Value> {
        if self.is_null() || other.is_null() {
            return Ok(Value::Null);
        }
        match other.as_f64() {
            Some(d) if d == 0.0 => Err(EvalError::DivisionByZero),
            _ => self.float_op(other, "divide", |a, b| a / b),
        }
    }

    /// Natural logarithm.
    pub fn ln(&self) -> EvalResult<Value> {
        match self {
            Value::Null => Ok(Value::Null),
            other => match other.as_f64() {
                Some(x) => Ok(Value::Float(x.ln())),
                None => Err(EvalError::type_error(format!(
                    "cannot take the logarithm of {}",
                    other.type_name()
                ))),
            },
        }
    }

    /// Round to `digits` decimal places, half away from zero.
    /// Integers are returned unchanged.
    pub fn round_to(&self, digits: u32) -> EvalResult<Value> {
        match self {
            Value::Null => Ok(Value::Null),
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Float(f) => Ok(Value::Float(round_half_away(*f, digits))),
            other => Err(EvalError::type_error(format!(
                "cannot round {}",
                other.type_name()
            ))),
        }
    }

    fn float_op(&self, other: &Value, verb: &str, op: impl Fn(f64, f64) -> f64) -> EvalResult<Value> {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => Ok(Value::Float(op(a, b))),
            _ => Err(EvalError::type_error(format!(
                "cannot {} {} and {}",
                verb,
                self.type_name(),
                other.type_name()
            ))),
        }
    }
}

/// Round `x` to `digits` decimal places, half away from zero.
///
/// Past `f64::MAX_10_EXP` digits no rounding can change a finite float, so
/// `x` is returned as is.
pub fn round_half_away(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let exp = match i32::try_from(digits) {
        Ok(exp) if exp <= f64::MAX_10_EXP => exp,
        _ => return x,
    };
    let scale = 10f64.powi(exp);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / scale
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Type alias for attribute storage.
pub type Attributes = std::collections::HashMap<String, Value>;

/// Helper macro to create attribute maps.
#[macro_export]
macro_rules! attrs {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
