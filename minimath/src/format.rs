//! Textual rendering of complex numbers
//!
//! `re + im·i` is written with the real term first, the operator spaced out,
//! and the imaginary magnitude collapsed to a bare `i` when it is one:
//!
//! | re | im | rendering  |
//! |----|----|------------|
//! | 0  | 0  | `0`        |
//! | 0  | -1 | `-i`       |
//! | 0  | 6  | `6i`       |
//! | 4  | 3  | `4 + 3i`   |
//! | 5  | -4 | `5 - 4i`   |
//! | 2  | 1  | `2 + i`    |
//! | 7  | 0  | `7`        |

use crate::error::{MathError, MathResult};
use crate::scalar::is_negative;
use crate::value::Value;

/// Shortest round-trip decimal form; negative zero prints as `0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Render a real and an imaginary part.
pub fn to_string_parts(re: f64, im: f64) -> String {
    if re == 0.0 {
        if im == 0.0 {
            "0".to_string()
        } else if im.abs() == 1.0 {
            let unit = if is_negative(im) { "-i" } else { "i" };
            unit.to_string()
        } else {
            format!("{}i", format_number(im))
        }
    } else {
        let real = format_number(re);
        if im == 0.0 {
            return real;
        }
        let operator = if is_negative(im) { " - " } else { " + " };
        let magnitude = im.abs();
        if magnitude == 1.0 {
            format!("{}{}i", real, operator)
        } else {
            format!("{}{}{}i", real, operator, format_number(magnitude))
        }
    }
}

/// Render a scalar or a complex value.
///
/// A scalar is stringified directly; anything else that is not a complex
/// number is rejected.
pub fn to_string(value: impl Into<Value>) -> MathResult<String> {
    let value: Value = value.into();
    match value {
        Value::Real(n) if crate::scalar::is_scalar(n) => Ok(format_number(n)),
        Value::Complex(c) => Ok(c.display().to_string()),
        other => Err(MathError::not_a_number("toString", other.to_string())),
    }
}
