//! The complex number type
//!
//! A `Complex` always has finite parts and carries its rendered form, which
//! is computed once by the constructor. The fields are private: the only way
//! to change a part is to build a new value, so the cached rendering can
//! never go stale.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{subject_pair, MathError, MathResult};
use crate::format::{format_number, to_string_parts};
use crate::value::Value;

/// Imaginary unit `i`, built on first use.
static IM: Lazy<Complex> = Lazy::new(|| {
    #[cfg(debug_assertions)]
    if crate::debug::debug_enabled() {
        crate::debug::debug_log(format_args!("[CONST] initializing Im()"));
    }
    Complex::from_finite(0.0, 1.0)
});

/// Principal square root of `i`, built on first use.
static SQRT_IM: Lazy<Complex> = Lazy::new(|| {
    #[cfg(debug_assertions)]
    if crate::debug::debug_enabled() {
        crate::debug::debug_log(format_args!("[CONST] initializing SqrtIm()"));
    }
    let part = 1.0 / 2.0_f64.sqrt();
    Complex::from_finite(part, part)
});

/// The imaginary unit `0 + 1i`.
pub fn im() -> &'static Complex {
    &IM
}

/// `√i = 1/√2 + (1/√2)i`.
pub fn sqrt_im() -> &'static Complex {
    &SQRT_IM
}

/// Complex number `re + im·i`
///
/// Equality through `==` compares the parts exactly; use
/// [`crate::dispatch::equals`] for the tolerant comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ComplexParts")]
pub struct Complex {
    re: f64,
    im: f64,
    #[serde(rename = "value")]
    display: String,
}

/// Wire form accepted on deserialization; any `value` field is ignored.
#[derive(Deserialize)]
struct ComplexParts {
    re: f64,
    im: f64,
}

impl TryFrom<ComplexParts> for Complex {
    type Error = MathError;

    fn try_from(parts: ComplexParts) -> MathResult<Self> {
        Complex::new(parts.re, parts.im)
    }
}

impl Complex {
    /// Create a complex number, rejecting non-finite parts.
    pub fn new(re: f64, im: f64) -> MathResult<Self> {
        Self::checked("create", re, im)
    }

    /// Create a complex number with a zero imaginary part.
    pub fn real(re: f64) -> MathResult<Self> {
        Self::checked("create", re, 0.0)
    }

    /// Validating constructor that reports failures under `op`.
    pub(crate) fn checked(op: &'static str, re: f64, im: f64) -> MathResult<Self> {
        match (re.is_finite(), im.is_finite()) {
            (true, true) => Ok(Self::from_finite(re, im)),
            (false, true) => Err(MathError::not_a_number(op, format_number(re))),
            (true, false) => Err(MathError::not_a_number(op, format_number(im))),
            (false, false) => Err(MathError::not_a_number(
                op,
                subject_pair(format_number(re), format_number(im)),
            )),
        }
    }

    /// Build from parts already known to be finite.
    pub(crate) fn from_finite(re: f64, im: f64) -> Self {
        debug_assert!(re.is_finite() && im.is_finite());
        Self {
            re,
            im,
            display: to_string_parts(re, im),
        }
    }

    /// Real part
    #[inline]
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Imaginary part
    #[inline]
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Cached rendering, e.g. `"5 - 4i"`
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Check if the imaginary part is exactly zero
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }

    /// `re² + im²`
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Complex conjugate `re - im·i`
    pub fn conj(&self) -> Self {
        Self::from_finite(self.re, -self.im)
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::from_finite(0.0, 0.0)
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.im == other.im
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl FromStr for Complex {
    type Err = MathError;

    fn from_str(s: &str) -> MathResult<Self> {
        crate::parse::from_string(s)
    }
}

/// Create a complex number; a missing part defaults to zero.
pub fn create(re: Option<f64>, im: Option<f64>) -> MathResult<Complex> {
    Complex::new(re.unwrap_or(0.0), im.unwrap_or(0.0))
}

/// Check if `x` is a complex number, or a string that parses as one.
///
/// A bare scalar is not complex here even though every operation accepts it
/// as an operand. Parse failures become `false`.
pub fn is_complex(x: impl Into<Value>) -> bool {
    let value: Value = x.into();
    match value {
        Value::Complex(_) => true,
        Value::Str(s) => crate::parse::from_string(&s).is_ok(),
        Value::Real(_) | Value::Nothing => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let c = Complex::new(5.0, -4.0).unwrap();
        assert_eq!(c.re(), 5.0);
        assert_eq!(c.im(), -4.0);
        assert_eq!(c.display(), "5 - 4i");
    }

    #[test]
    fn test_create_defaults() {
        let zero = create(None, None).unwrap();
        assert_eq!(zero, Complex::default());
        assert_eq!(zero.display(), "0");

        let real = create(Some(7.0), None).unwrap();
        assert_eq!(real.im(), 0.0);
        assert_eq!(real.display(), "7");

        let imag = create(None, Some(-2.0)).unwrap();
        assert_eq!(imag.re(), 0.0);
        assert_eq!(imag.display(), "-2i");
    }

    #[test]
    fn test_create_rejects_non_finite() {
        assert_eq!(
            Complex::new(f64::NAN, 1.0),
            Err(MathError::not_a_number("create", "NaN"))
        );
        assert_eq!(
            Complex::new(1.0, f64::INFINITY),
            Err(MathError::not_a_number("create", "inf"))
        );
        assert_eq!(
            create(Some(f64::NAN), Some(f64::NAN)),
            Err(MathError::not_a_number(
                "create",
                "one or both of NaN and NaN"
            ))
        );
    }

    #[test]
    fn test_constants() {
        let i = im();
        assert_eq!(i.re(), 0.0);
        assert_eq!(i.im(), 1.0);
        assert_eq!(i.display(), "i");
        assert!(std::ptr::eq(im(), im()));

        let root = sqrt_im();
        assert_eq!(root.re(), root.im());
        assert!((root.re() - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
        assert!(std::ptr::eq(sqrt_im(), sqrt_im()));
    }

    #[test]
    fn test_raw_equality_is_exact() {
        let a = Complex::new(0.1 + 0.2, 0.0).unwrap();
        let b = Complex::new(0.3, 0.0).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, Complex::new(0.1 + 0.2, 0.0).unwrap());
    }

    #[test]
    fn test_conj_and_norm() {
        let c = Complex::new(4.0, 3.0).unwrap();
        assert_eq!(c.conj(), Complex::new(4.0, -3.0).unwrap());
        assert_eq!(c.conj().display(), "4 - 3i");
        assert_eq!(c.norm_sqr(), 25.0);
        assert!(!c.is_real());
        assert!(Complex::real(-2.0).unwrap().is_real());
    }

    #[test]
    fn test_is_complex() {
        assert!(is_complex(Complex::new(0.0, 1.0).unwrap()));
        assert!(is_complex("5 - 4i"));
        assert!(!is_complex("blah"));
        assert!(!is_complex(-4));
        assert!(!is_complex(()));
    }

    #[test]
    fn test_display_and_from_str() {
        let c: Complex = "4 + 3i".parse().unwrap();
        assert_eq!(c, Complex::new(4.0, 3.0).unwrap());
        assert_eq!(format!("{}", c), "4 + 3i");
    }
}
