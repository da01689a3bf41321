//! Operand dispatch and complex arithmetic
//!
//! Every operation accepts a bare scalar wherever it accepts a complex
//! number, treating the scalar as `x + 0i`. Binary operations match on the
//! four pairings {complex, complex}, {scalar, scalar}, {complex, scalar} and
//! {scalar, complex}; any other operand is rejected with
//! [`MathError::NeitherNumberNorComplex`].

use crate::complex::{sqrt_im, Complex};
use crate::error::{subject_pair, MathError, MathResult};
use crate::scalar::{self, is_negative, is_scalar};
use crate::value::Value;

/// Binary operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mult,
    Div,
}

impl BinOp {
    /// Operation name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::Sub => "sub",
            BinOp::Mult => "mult",
            BinOp::Div => "div",
        }
    }
}

/// Perform a binary operation chosen at runtime.
pub fn binop(op: BinOp, lhs: &Value, rhs: &Value) -> MathResult<Complex> {
    match op {
        BinOp::Add => add_values(lhs, rhs),
        BinOp::Sub => sub_values(lhs, rhs),
        BinOp::Mult => mult_values(lhs, rhs),
        BinOp::Div => div_values(lhs, rhs),
    }
}

/// Numeric view of a [`Value`]
#[derive(Clone, Copy)]
enum Operand<'a> {
    Scalar(f64),
    Complex(&'a Complex),
}

impl Operand<'_> {
    fn parts(self) -> (f64, f64) {
        match self {
            Operand::Scalar(x) => (x, 0.0),
            Operand::Complex(c) => (c.re(), c.im()),
        }
    }
}

fn operand(value: &Value) -> Option<Operand<'_>> {
    match value {
        Value::Real(n) if is_scalar(*n) => Some(Operand::Scalar(*n)),
        Value::Complex(c) => Some(Operand::Complex(c)),
        _ => None,
    }
}

/// Error naming whichever operand(s) are not numeric.
fn neither(op: &'static str, lhs: &Value, rhs: &Value) -> MathError {
    let subject = match (operand(lhs).is_some(), operand(rhs).is_some()) {
        (false, true) => lhs.to_string(),
        (true, false) => rhs.to_string(),
        _ => subject_pair(lhs, rhs),
    };
    MathError::neither_number_nor_complex(op, subject)
}

fn unary_operand<'a>(op: &'static str, value: &'a Value) -> MathResult<Operand<'a>> {
    operand(value).ok_or_else(|| MathError::neither_number_nor_complex(op, value.to_string()))
}

#[inline]
fn trace_dispatch(op: &str, operands: &[&Value]) {
    #[cfg(debug_assertions)]
    if crate::debug::debug_enabled() {
        let names: Vec<&str> = operands.iter().map(|v| v.type_name()).collect();
        crate::debug::debug_log(format_args!("[DISPATCH] {}({})", op, names.join(", ")));
    }
    #[cfg(not(debug_assertions))]
    let _ = (op, operands);
}

// ========== Kernels over parts ==========

fn mul_parts((a, b): (f64, f64), (c, d): (f64, f64)) -> (f64, f64) {
    (a * c - b * d, a * d + b * c)
}

fn scale(op: &'static str, c: &Complex, s: f64) -> MathResult<Complex> {
    Complex::checked(op, c.re() * s, c.im() * s)
}

/// `n / d` through the conjugate of `d`; `d` must not be `(0, 0)`.
fn div_parts(op: &'static str, n: (f64, f64), d: (f64, f64)) -> MathResult<Complex> {
    let conj = (d.0, -d.1);
    let (num_re, num_im) = mul_parts(n, conj);
    let (den, _) = mul_parts(d, conj);
    Complex::checked(op, num_re / den, num_im / den)
}

fn sqrt_parts(re: f64, im: f64) -> MathResult<Complex> {
    if im == 0.0 {
        return if is_negative(re) {
            Complex::checked("sqrt", 0.0, (-re).sqrt())
        } else {
            Complex::checked("sqrt", re.sqrt(), 0.0)
        };
    }

    if re == 0.0 {
        // √(b·i) = √|b| · √i, mirrored below the real axis
        let unit = if is_negative(im) {
            sqrt_im().conj()
        } else {
            sqrt_im().clone()
        };
        return scale("sqrt", &unit, im.abs().sqrt());
    }

    let m = re.hypot(im);
    let root_re = ((m + re) / 2.0).sqrt();
    let root_im = scalar::sign(im) * ((m - re) / 2.0).sqrt();
    Complex::checked("sqrt", root_re, root_im)
}

// ========== Binary operations ==========

/// Sum of two operands.
pub fn add(a: impl Into<Value>, b: impl Into<Value>) -> MathResult<Complex> {
    add_values(&a.into(), &b.into())
}

fn add_values(lhs: &Value, rhs: &Value) -> MathResult<Complex> {
    trace_dispatch("add", &[lhs, rhs]);
    match (operand(lhs), operand(rhs)) {
        (Some(Operand::Complex(x)), Some(Operand::Complex(y))) => {
            Complex::checked("add", x.re() + y.re(), x.im() + y.im())
        }
        (Some(Operand::Scalar(x)), Some(Operand::Scalar(y))) => Complex::checked("add", x + y, 0.0),
        (Some(Operand::Complex(x)), Some(Operand::Scalar(y))) => {
            Complex::checked("add", x.re() + y, x.im())
        }
        (Some(Operand::Scalar(x)), Some(Operand::Complex(y))) => {
            Complex::checked("add", x + y.re(), y.im())
        }
        _ => Err(neither("add", lhs, rhs)),
    }
}

/// Difference `a - b`, computed as `a + (-1)·b`.
pub fn sub(a: impl Into<Value>, b: impl Into<Value>) -> MathResult<Complex> {
    sub_values(&a.into(), &b.into())
}

fn sub_values(lhs: &Value, rhs: &Value) -> MathResult<Complex> {
    trace_dispatch("sub", &[lhs, rhs]);
    let negated = match (operand(lhs), operand(rhs)) {
        (Some(_), Some(Operand::Scalar(y))) => Value::Real(-y),
        (Some(_), Some(Operand::Complex(y))) => Value::Complex(scale("sub", y, -1.0)?),
        _ => return Err(neither("sub", lhs, rhs)),
    };
    add_values(lhs, &negated)
}

/// Product of two operands.
pub fn mult(a: impl Into<Value>, b: impl Into<Value>) -> MathResult<Complex> {
    mult_values(&a.into(), &b.into())
}

fn mult_values(lhs: &Value, rhs: &Value) -> MathResult<Complex> {
    trace_dispatch("mult", &[lhs, rhs]);
    match (operand(lhs), operand(rhs)) {
        (Some(Operand::Complex(x)), Some(Operand::Complex(y))) => {
            let (re, im) = mul_parts((x.re(), x.im()), (y.re(), y.im()));
            Complex::checked("mult", re, im)
        }
        (Some(Operand::Scalar(x)), Some(Operand::Scalar(y))) => {
            Complex::checked("mult", x * y, 0.0)
        }
        (Some(Operand::Complex(x)), Some(Operand::Scalar(y))) => scale("mult", x, y),
        (Some(Operand::Scalar(x)), Some(Operand::Complex(y))) => scale("mult", y, x),
        _ => Err(neither("mult", lhs, rhs)),
    }
}

/// Quotient `a / b`.
///
/// Fails with [`MathError::DivisionByZero`] when `b` is exactly `0` or `(0, 0)`.
pub fn div(a: impl Into<Value>, b: impl Into<Value>) -> MathResult<Complex> {
    div_values(&a.into(), &b.into())
}

fn div_values(lhs: &Value, rhs: &Value) -> MathResult<Complex> {
    trace_dispatch("div", &[lhs, rhs]);
    match (operand(lhs), operand(rhs)) {
        (Some(_), Some(Operand::Scalar(y))) if y == 0.0 => {
            Err(MathError::division_by_zero("div", rhs.to_string()))
        }
        (Some(_), Some(Operand::Complex(y))) if y.re() == 0.0 && y.im() == 0.0 => {
            Err(MathError::division_by_zero("div", rhs.to_string()))
        }
        (Some(Operand::Scalar(x)), Some(Operand::Scalar(y))) => Complex::checked("div", x / y, 0.0),
        (Some(Operand::Complex(x)), Some(Operand::Scalar(y))) => {
            Complex::checked("div", x.re() / y, x.im() / y)
        }
        // a real divisor skips the conjugate, whose square can underflow
        (Some(n), Some(Operand::Complex(y))) if y.is_real() => {
            let (re, im) = n.parts();
            Complex::checked("div", re / y.re(), im / y.re())
        }
        (Some(n), Some(d @ Operand::Complex(_))) => div_parts("div", n.parts(), d.parts()),
        _ => Err(neither("div", lhs, rhs)),
    }
}

/// Tolerant equality of two operands.
///
/// Parts are compared at four decimal places. A scalar equals a complex
/// number only when the imaginary part is exactly zero.
pub fn equals(a: impl Into<Value>, b: impl Into<Value>) -> MathResult<bool> {
    let (lhs, rhs): (Value, Value) = (a.into(), b.into());
    trace_dispatch("equals", &[&lhs, &rhs]);
    match (operand(&lhs), operand(&rhs)) {
        (Some(Operand::Complex(x)), Some(Operand::Complex(y))) => {
            Ok(scalar::equals(x.re(), y.re()) && scalar::equals(x.im(), y.im()))
        }
        (Some(Operand::Scalar(x)), Some(Operand::Scalar(y))) => Ok(scalar::equals(x, y)),
        (Some(Operand::Complex(c)), Some(Operand::Scalar(s)))
        | (Some(Operand::Scalar(s)), Some(Operand::Complex(c))) => {
            Ok(c.im() == 0.0 && scalar::equals(c.re(), s))
        }
        _ => Err(neither("equals", &lhs, &rhs)),
    }
}

// ========== Unary operations ==========

/// Complex conjugate; a scalar is its own conjugate.
pub fn conj(c: impl Into<Value>) -> MathResult<Complex> {
    let value: Value = c.into();
    trace_dispatch("conj", &[&value]);
    match unary_operand("conj", &value)? {
        Operand::Complex(x) => Ok(x.conj()),
        Operand::Scalar(x) => Complex::checked("conj", x, 0.0),
    }
}

/// Raise `c` to a non-negative integer power by repeated multiplication.
///
/// `pow(c, 0)` is `1` and `pow(c, 1)` hands `c` back untouched. Negative
/// exponents are rejected.
pub fn pow(c: impl Into<Value>, p: i64) -> MathResult<Complex> {
    if p < 0 {
        return Err(MathError::invalid_exponent("pow", p));
    }

    let value: Value = c.into();
    let base = match value {
        Value::Complex(x) => x,
        Value::Real(x) if is_scalar(x) => Complex::checked("pow", x, 0.0)?,
        other => {
            return Err(MathError::neither_number_nor_complex(
                "pow",
                other.to_string(),
            ))
        }
    };

    match p {
        0 => Complex::checked("pow", 1.0, 0.0),
        1 => Ok(base),
        _ => {
            let factor = (base.re(), base.im());
            let mut acc = factor;
            for _ in 1..p {
                acc = mul_parts(factor, acc);
                if !(acc.0.is_finite() && acc.1.is_finite()) {
                    break;
                }
            }
            Complex::checked("pow", acc.0, acc.1)
        }
    }
}

/// `pow(Im(), p)`: cycles through `1, i, -1, -i`.
pub fn pow_im(p: i64) -> MathResult<Complex> {
    pow(crate::complex::im(), p)
}

/// Principal square root.
pub fn sqrt(c: impl Into<Value>) -> MathResult<Complex> {
    let value: Value = c.into();
    trace_dispatch("sqrt", &[&value]);
    let (re, im) = unary_operand("sqrt", &value)?.parts();
    sqrt_parts(re, im)
}

/// Magnitude as a complex number with zero imaginary part.
///
/// For a complex operand this is `sqrt(c · conj(c))`. A bare scalar comes
/// back as `x + 0i` with its sign kept.
pub fn abs(c: impl Into<Value>) -> MathResult<Complex> {
    let value: Value = c.into();
    trace_dispatch("abs", &[&value]);
    match unary_operand("abs", &value)? {
        // c · conj(c) is real, and hypot takes its root without overflowing
        Operand::Complex(x) => Complex::checked("abs", x.re().hypot(x.im()), 0.0),
        Operand::Scalar(x) => Complex::checked("abs", x, 0.0),
    }
}

/// Rotate `point` counter-clockwise by `angle` radians about the origin.
pub fn rotate(point: impl Into<Value>, angle: f64) -> MathResult<Complex> {
    let value: Value = point.into();
    trace_dispatch("rotate", &[&value]);
    let p = unary_operand("rotate", &value)?.parts();
    if !is_scalar(angle) {
        return Err(MathError::not_a_number("rotate", angle.to_string()));
    }
    let rotor = Complex::checked("rotate", angle.cos(), angle.sin())?;
    let (re, im) = mul_parts(p, (rotor.re(), rotor.im()));
    Complex::checked("rotate", re, im)
}
