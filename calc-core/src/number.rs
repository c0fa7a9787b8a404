//! Numeric model for calculator operands and results
//!
//! A [`Number`] is either a JSON integer or a JSON float. The exact
//! operations (add, subtract, multiply) keep integer typing when both
//! operands are integers; division and any float operand promote to f64.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A calculator operand or result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A JSON integer
    Int(i64),
    /// A JSON float
    Float(f64),
}

impl Number {
    /// Extract a number from a decoded JSON value
    ///
    /// Only JSON numbers qualify; numeric-looking strings and booleans are
    /// rejected. Integers outside the i64 range are carried as floats.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            _ => None,
        }
    }

    /// The value as an f64, promoting integers
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Whether the value is zero (integer or float zero)
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Add two numbers, keeping integer typing when exact
    ///
    /// Integer overflow falls back to the float value rather than wrapping.
    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => match a.checked_add(b) {
                Some(v) => Self::Int(v),
                None => Self::Float(a as f64 + b as f64),
            },
            _ => Self::Float(self.as_f64() + other.as_f64()),
        }
    }

    /// Subtract `other` from `self`, keeping integer typing when exact
    pub fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => match a.checked_sub(b) {
                Some(v) => Self::Int(v),
                None => Self::Float(a as f64 - b as f64),
            },
            _ => Self::Float(self.as_f64() - other.as_f64()),
        }
    }

    /// Multiply two numbers, keeping integer typing when exact
    pub fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => match a.checked_mul(b) {
                Some(v) => Self::Int(v),
                None => Self::Float(a as f64 * b as f64),
            },
            _ => Self::Float(self.as_f64() * other.as_f64()),
        }
    }

    /// Divide `self` by `other`
    ///
    /// Always yields a float, even for evenly divisible integers. The
    /// divisor is checked for zero upstream.
    pub fn div(self, other: Self) -> Self {
        Self::Float(self.as_f64() / other.as_f64())
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_accepts_numbers_only() {
        assert_eq!(Number::from_json(&json!(10)), Some(Number::Int(10)));
        assert_eq!(Number::from_json(&json!(-3)), Some(Number::Int(-3)));
        assert_eq!(Number::from_json(&json!(1.5)), Some(Number::Float(1.5)));
        assert_eq!(Number::from_json(&json!("10")), None);
        assert_eq!(Number::from_json(&json!(true)), None);
        assert_eq!(Number::from_json(&json!(null)), None);
        assert_eq!(Number::from_json(&json!([1])), None);
    }

    #[test]
    fn from_json_carries_huge_integers_as_floats() {
        let value = json!(u64::MAX);
        assert_eq!(
            Number::from_json(&value),
            Some(Number::Float(u64::MAX as f64))
        );
    }

    #[test]
    fn integer_arithmetic_stays_integer() {
        assert_eq!(Number::Int(10).add(Number::Int(5)), Number::Int(15));
        assert_eq!(Number::Int(10).sub(Number::Int(3)), Number::Int(7));
        assert_eq!(Number::Int(4).mul(Number::Int(3)), Number::Int(12));
    }

    #[test]
    fn mixed_arithmetic_promotes_to_float() {
        assert_eq!(Number::Int(1).add(Number::Float(2.5)), Number::Float(3.5));
        assert_eq!(Number::Float(1.5).add(Number::Float(2.5)), Number::Float(4.0));
    }

    #[test]
    fn division_is_always_float() {
        assert_eq!(Number::Int(10).div(Number::Int(2)), Number::Float(5.0));
    }

    #[test]
    fn integer_overflow_falls_back_to_float() {
        let result = Number::Int(i64::MAX).add(Number::Int(1));
        assert_eq!(result, Number::Float(i64::MAX as f64 + 1.0));
    }

    #[test]
    fn serializes_with_original_typing() {
        let int = serde_json::to_string(&Number::Int(5)).unwrap();
        assert_eq!(int, "5");
        let float = serde_json::to_string(&Number::Float(5.0)).unwrap();
        assert_eq!(float, "5.0");
    }
}
