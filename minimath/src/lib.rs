//! minimath
//!
//! Scalar-aware complex number arithmetic. It includes:
//!
//! - `Complex`, an immutable complex number carrying its rendered form
//! - `Value` for operands that may be a bare scalar or a complex number
//! - tolerant equality at four decimal places
//! - parsing and formatting of `a ± bi` strings
//! - add, sub, mult, div, conj, pow, sqrt, abs and rotate
//!
//! # Example
//!
//! ```
//! use minimath::prelude::*;
//!
//! let b = Complex::new(4.0, 3.0).unwrap();
//! let scaled = mult(&b, 3.0).unwrap();
//! assert_eq!(scaled.display(), "12 + 9i");
//!
//! let root = sqrt(from_string("8 - 6i").unwrap()).unwrap();
//! assert!(equals(&root, Complex::new(3.0, -1.0).unwrap()).unwrap());
//! ```

pub mod complex;
pub mod debug;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod parse;
pub mod scalar;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use minimath::prelude::*;
/// ```
pub mod prelude {
    pub use super::complex::{create, im, is_complex, sqrt_im, Complex};
    pub use super::dispatch::{
        abs, add, binop, conj, div, equals, mult, pow, pow_im, rotate, sqrt, sub, BinOp,
    };
    pub use super::error::{MathError, MathResult, ParseError};
    pub use super::format::{to_string, to_string_parts};
    pub use super::parse::from_string;
    pub use super::value::Value;
}

pub use prelude::*;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_prelude_round_trip() {
        let c = create(Some(4.0), Some(3.0)).unwrap();
        let text = to_string(&c).unwrap();
        assert_eq!(text, "4 + 3i");
        assert_eq!(from_string(&text).unwrap(), c);
    }
}
