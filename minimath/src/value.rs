//! Dynamic value type
//!
//! `Value` is the operand type of every engine operation. `Real` and
//! `Complex` are numeric; `Str` and `Nothing` exist so that callers holding
//! untyped input can still ask the predicates, and get a proper
//! "neither a number nor complex" error from the arithmetic.

use std::fmt;

use crate::complex::Complex;
use crate::format::format_number;

/// Dynamic operand
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Bare real number (a scalar when not NaN)
    Real(f64),
    /// Complex number
    Complex(Complex),
    /// Unparsed text
    Str(String),
    /// Missing argument
    Nothing,
}

impl Value {
    /// Name of the runtime shape of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Real(_) => "Real",
            Value::Complex(_) => "Complex",
            Value::Str(_) => "String",
            Value::Nothing => "Nothing",
        }
    }

    /// Check if this value is a usable real number
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Real(n) if crate::scalar::is_scalar(*n))
    }
}

// ========== From implementations ==========

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Real(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Real(v as f64)
    }
}

impl From<Complex> for Value {
    fn from(v: Complex) -> Self {
        Value::Complex(v)
    }
}

impl From<&Complex> for Value {
    fn from(v: &Complex) -> Self {
        Value::Complex(v.clone())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nothing
    }
}

// ========== Display implementation ==========

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Real(v) => f.write_str(&format_number(*v)),
            Value::Complex(c) => write!(f, "{}", c),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Nothing => write!(f, "nothing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_primitives() {
        assert!(matches!(Value::from(42i64), Value::Real(v) if v == 42.0));
        assert!(matches!(Value::from(-3i32), Value::Real(v) if v == -3.0));
        assert!(matches!(Value::from(3.125f64), Value::Real(_)));
        assert!(matches!(Value::from("5 - 4i"), Value::Str(_)));
        assert!(matches!(Value::from(()), Value::Nothing));
    }

    #[test]
    fn test_value_type_name() {
        assert_eq!(Value::Real(1.5).type_name(), "Real");
        assert_eq!(Value::Str("x".to_string()).type_name(), "String");
        assert_eq!(Value::Nothing.type_name(), "Nothing");
        let c = Complex::new(1.0, 2.0).unwrap();
        assert_eq!(Value::from(c).type_name(), "Complex");
    }

    #[test]
    fn test_value_is_scalar() {
        assert!(Value::Real(0.0).is_scalar());
        assert!(Value::Real(-5.0 / 6.0).is_scalar());
        assert!(!Value::Real(f64::NAN).is_scalar());
        assert!(!Value::from(Complex::new(0.0, 1.0).unwrap()).is_scalar());
        assert!(!Value::from("3").is_scalar());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Real(42.0)), "42");
        assert_eq!(format!("{}", Value::Real(-0.5)), "-0.5");
        assert_eq!(format!("{}", Value::Real(f64::NAN)), "NaN");
        assert_eq!(format!("{}", Value::from("blah")), "\"blah\"");
        assert_eq!(format!("{}", Value::Nothing), "nothing");
        let c = Complex::new(5.0, -4.0).unwrap();
        assert_eq!(format!("{}", Value::from(c)), "5 - 4i");
    }
}
