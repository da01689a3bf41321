//! Error types for minimath
//!
//! Every failure carries the name of the operation that raised it, so the
//! rendered message reads `"<op> - <subject> <reason>"`.

use std::fmt;

use thiserror::Error;

/// Error raised by the complex number engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// A required scalar argument is missing or not a finite real number
    #[error("{op} - {subject} is not a number")]
    NotANumber {
        /// Operation that rejected the argument
        op: &'static str,
        /// Rendered offending argument(s)
        subject: String,
    },

    /// An operand is neither a scalar nor a complex number
    #[error("{op} - {subject} is neither a number nor a complex number")]
    NeitherNumberNorComplex {
        /// Operation that rejected the operand
        op: &'static str,
        /// Rendered offending operand(s)
        subject: String,
    },

    /// Divisor is `0` or `(0, 0)`
    #[error("{op} - {subject} is 0: division by zero not allowed")]
    DivisionByZero {
        /// Operation that attempted the division
        op: &'static str,
        /// Rendered divisor
        subject: String,
    },

    /// Input string is neither a real number nor `a ± bi`
    #[error("fromString - {0}")]
    Parse(#[from] ParseError),

    /// Exponent outside the non-negative integers
    #[error("{op} - exponent {exponent} is not a non-negative integer")]
    InvalidExponent {
        /// Operation that rejected the exponent
        op: &'static str,
        /// Offending exponent
        exponent: i64,
    },
}

impl MathError {
    /// Create a not-a-number error
    pub fn not_a_number(op: &'static str, subject: impl Into<String>) -> Self {
        MathError::NotANumber {
            op,
            subject: subject.into(),
        }
    }

    /// Create a neither-number-nor-complex error
    pub fn neither_number_nor_complex(op: &'static str, subject: impl Into<String>) -> Self {
        MathError::NeitherNumberNorComplex {
            op,
            subject: subject.into(),
        }
    }

    /// Create a division-by-zero error
    pub fn division_by_zero(op: &'static str, subject: impl Into<String>) -> Self {
        MathError::DivisionByZero {
            op,
            subject: subject.into(),
        }
    }

    /// Create an invalid exponent error
    pub fn invalid_exponent(op: &'static str, exponent: i64) -> Self {
        MathError::InvalidExponent { op, exponent }
    }

    /// True for operand errors, including strings that failed to parse.
    pub fn is_neither_number_nor_complex(&self) -> bool {
        matches!(
            self,
            MathError::NeitherNumberNorComplex { .. } | MathError::Parse(_)
        )
    }

    /// Name of the operation that raised the error
    pub fn op(&self) -> &'static str {
        match self {
            MathError::NotANumber { op, .. }
            | MathError::NeitherNumberNorComplex { op, .. }
            | MathError::DivisionByZero { op, .. }
            | MathError::InvalidExponent { op, .. } => op,
            MathError::Parse(_) => "fromString",
        }
    }
}

/// Phrase naming both operands of a failed binary operation.
pub fn subject_pair(first: impl fmt::Display, second: impl fmt::Display) -> String {
    format!("one or both of {} and {}", first, second)
}

/// Error raised by the `a ± bi` scanner
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing to parse
    #[error("empty input is neither a number nor a complex number")]
    Empty,

    /// A character that does not fit the grammar at this point
    #[error("expected {expected} at {position}, found '{found}'")]
    UnexpectedChar {
        /// What the grammar required
        expected: &'static str,
        /// Character actually present
        found: char,
        /// Byte offset into the trimmed input
        position: usize,
    },

    /// Input ended before the grammar was satisfied
    #[error("expected {expected} at {position}, found end of input")]
    UnexpectedEnd {
        /// What the grammar required
        expected: &'static str,
        /// Byte offset into the trimmed input
        position: usize,
    },

    /// A complete `a ± bi` followed by more text
    #[error("unexpected trailing '{found}' at {position}")]
    TrailingInput {
        /// First extra character
        found: char,
        /// Byte offset into the trimmed input
        position: usize,
    },
}

impl ParseError {
    /// Byte offset at which scanning stopped
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::Empty => None,
            ParseError::UnexpectedChar { position, .. }
            | ParseError::UnexpectedEnd { position, .. }
            | ParseError::TrailingInput { position, .. } => Some(*position),
        }
    }
}

/// Result type alias for minimath operations
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::not_a_number("create", "NaN");
        assert_eq!(format!("{}", err), "create - NaN is not a number");

        let err = MathError::neither_number_nor_complex("add", subject_pair("1", "nothing"));
        assert_eq!(
            format!("{}", err),
            "add - one or both of 1 and nothing is neither a number nor a complex number"
        );

        let err = MathError::division_by_zero("div", "0");
        assert_eq!(
            format!("{}", err),
            "div - 0 is 0: division by zero not allowed"
        );

        let err = MathError::invalid_exponent("pow", -2);
        assert_eq!(
            format!("{}", err),
            "pow - exponent -2 is not a non-negative integer"
        );
    }

    #[test]
    fn test_parse_error_is_operand_error() {
        let err = MathError::from(ParseError::UnexpectedEnd {
            expected: "'i'",
            position: 5,
        });
        assert!(err.is_neither_number_nor_complex());
        assert_eq!(err.op(), "fromString");
        assert_eq!(
            format!("{}", err),
            "fromString - expected 'i' at 5, found end of input"
        );
    }

    #[test]
    fn test_parse_error_position() {
        assert_eq!(ParseError::Empty.position(), None);
        let err = ParseError::TrailingInput {
            found: 'x',
            position: 6,
        };
        assert_eq!(err.position(), Some(6));
    }

    #[test]
    fn test_op_names() {
        assert_eq!(MathError::not_a_number("create", "x").op(), "create");
        assert!(!MathError::division_by_zero("div", "0").is_neither_number_nor_complex());
    }
}
