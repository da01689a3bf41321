//! Parsing complex numbers from text
//!
//! Input that is a plain real number (`"5"`, `"-2.5"`, `"1e3"`) becomes a
//! complex number with a zero imaginary part. Everything else must match
//!
//! ```text
//! complex   := [sign] digits [' '] op [' '] [sign] [digits] 'i'
//!            | [sign] [digits] 'i'
//! op        := '+' | '-'
//! sign      := '+' | '-'
//! ```
//!
//! over the whole input, surrounding whitespace aside. A missing imaginary
//! digit run means a magnitude of one, so every rendering produced by
//! [`crate::format::to_string_parts`] with integer parts reads back.

use crate::complex::Complex;
use crate::error::{MathResult, ParseError};

/// Parse a real number or an `a ± bi` string.
pub fn from_string(s: &str) -> MathResult<Complex> {
    let input = s.trim();
    if let Ok(n) = input.parse::<f64>() {
        if n.is_finite() {
            return Complex::checked("fromString", n, 0.0);
        }
    }

    let (re, im) = Scanner::new(input).scan().map_err(|err| {
        #[cfg(debug_assertions)]
        if crate::debug::debug_enabled() {
            crate::debug::debug_log(format_args!("[PARSE] {:?}: {}", input, err));
        }
        err
    })?;
    Complex::checked("fromString", re, im)
}

/// Hand-written scanner over the `a ± bi` grammar
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn scan(mut self) -> Result<(f64, f64), ParseError> {
        if self.input.is_empty() {
            return Err(ParseError::Empty);
        }

        let lead_sign = self.sign();
        let lead_digits = self.digits();

        if self.peek() == Some('i') {
            self.bump('i');
            self.finish()?;
            return Ok((0.0, lead_sign * lead_digits.unwrap_or(1.0)));
        }

        let re = lead_sign * lead_digits.ok_or_else(|| self.error("a digit"))?;
        self.space();
        let op_sign = self.operator()?;
        self.space();
        let im_sign = self.sign();
        let im = im_sign * self.digits().unwrap_or(1.0);
        self.expect('i', "'i'")?;
        self.finish()?;

        Ok((re, op_sign * im))
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Optional sign, `+1` when absent.
    fn sign(&mut self) -> f64 {
        match self.peek() {
            Some('-') => {
                self.bump('-');
                -1.0
            }
            Some('+') => {
                self.bump('+');
                1.0
            }
            _ => 1.0,
        }
    }

    /// Optional run of ASCII digits.
    fn digits(&mut self) -> Option<f64> {
        let start = self.pos;
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            self.bump(c);
        }
        if start == self.pos {
            return None;
        }
        self.input[start..self.pos].parse().ok()
    }

    /// At most one separating space.
    fn space(&mut self) {
        if self.peek() == Some(' ') {
            self.bump(' ');
        }
    }

    fn operator(&mut self) -> Result<f64, ParseError> {
        match self.peek() {
            Some('+') => {
                self.bump('+');
                Ok(1.0)
            }
            Some('-') => {
                self.bump('-');
                Ok(-1.0)
            }
            _ => Err(self.error("'+' or '-'")),
        }
    }

    fn expect(&mut self, want: char, expected: &'static str) -> Result<(), ParseError> {
        if self.peek() == Some(want) {
            self.bump(want);
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    fn finish(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(found) => Err(ParseError::TrailingInput {
                found,
                position: self.pos,
            }),
        }
    }

    fn error(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(found) => ParseError::UnexpectedChar {
                expected,
                found,
                position: self.pos,
            },
            None => ParseError::UnexpectedEnd {
                expected,
                position: self.pos,
            },
        }
    }
}
