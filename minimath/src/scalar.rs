//! Scalar utilities
//!
//! Primitive predicates and tolerant comparison over real numbers, shared by
//! the complex number engine.

/// Decimal places compared by the tolerant [`equals`].
pub const EQUALITY_DECIMALS: u32 = 4;

/// True iff `n` is a usable real number (not NaN).
#[inline]
pub fn is_scalar(n: f64) -> bool {
    !n.is_nan()
}

/// True iff `n` is nonzero with the sign bit set.
///
/// `-0.0` is not negative, and neither is NaN.
#[inline]
pub fn is_negative(n: f64) -> bool {
    n != 0.0 && !n.is_nan() && n.is_sign_negative()
}

/// Sign used by the principal square root: zero maps to `+1`.
#[inline]
pub fn sign(n: f64) -> f64 {
    if is_negative(n) {
        -1.0
    } else {
        1.0
    }
}

/// Round `n` to `decimals` fractional digits, half away from zero.
///
/// Works on the shortest decimal representation of `n` rather than on the
/// binary value, so `round(1.005, 2)` is `1.01`. Non-finite input is returned
/// unchanged.
pub fn round(n: f64, decimals: u32) -> f64 {
    if !n.is_finite() {
        return n;
    }

    let repr = n.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let keep = decimals as usize;
    if frac_part.len() <= keep {
        return n;
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(keep))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes()[keep] >= b'5' {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, 1);
                break;
            }
            idx -= 1;
            if digits[idx] == 9 {
                digits[idx] = 0;
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - keep;
    let mut text = String::with_capacity(digits.len() + 1);
    for (idx, digit) in digits.iter().enumerate() {
        if idx == int_len {
            text.push('.');
        }
        text.push(char::from(b'0' + digit));
    }

    text.parse::<f64>().map_or(n, |magnitude| magnitude.copysign(n))
}

/// Tolerant equality at [`EQUALITY_DECIMALS`] places.
#[inline]
pub fn equals(a: f64, b: f64) -> bool {
    equals_within(a, b, EQUALITY_DECIMALS)
}

/// Tolerant equality at `decimals` places; strict when either side is NaN.
pub fn equals_within(a: f64, b: f64, decimals: u32) -> bool {
    if is_scalar(a) && is_scalar(b) {
        round(a, decimals) == round(b, decimals)
    } else {
        a == b
    }
}
