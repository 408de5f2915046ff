//! Exact rational number type.
//!
//! `Rational` is always stored in lowest terms with a positive denominator.
//! Intermediate products are computed in 128 bits and narrowed back to 64
//! bits with an explicit [`RationalError::Overflow`] instead of wrapping.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use crate::error::{RationalError, Result};
use crate::round::Round;

/// A reduced fraction of two 64-bit integers.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(i64, i64)", into = "(i64, i64)")
)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Zero (`0/1`).
    pub const ZERO: Rational = Rational { num: 0, den: 1 };

    /// One (`1/1`).
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// Create a new rational, reducing it and moving the sign to the numerator.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if `den` is zero.
    pub fn new(num: i64, den: i64) -> Result<Self> {
        Self::from_wide(i128::from(num), i128::from(den))
    }

    /// Create a rational from a whole number.
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Create a rational in a const context.
    ///
    /// Meant for constants with small, positive denominators.
    ///
    /// # Panics
    ///
    /// Panics if `den` is not positive; in a `const` item this is a compile
    /// error.
    pub const fn new_const(num: i64, den: i64) -> Self {
        assert!(den > 0, "denominator must be positive");
        let (mut a, mut b) = (num.unsigned_abs(), den.unsigned_abs());
        while b != 0 {
            let t = b;
            b = a % b;
            a = t;
        }
        // a divides den, so it is at most i64::MAX.
        Self {
            num: num / a as i64,
            den: den / a as i64,
        }
    }

    /// Reduce a 128-bit fraction and narrow it to 64 bits.
    fn from_wide(num: i128, den: i128) -> Result<Self> {
        if den == 0 {
            return Err(RationalError::DivideByZero);
        }
        if num == 0 {
            return Ok(Self::ZERO);
        }

        let g = gcd(num.unsigned_abs(), den.unsigned_abs());
        // g >= 1 and divides both magnitudes, so the quotients fit i128.
        let g = g as i128;
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }

        Ok(Self {
            num: i64::try_from(num).map_err(|_| RationalError::Overflow)?,
            den: i64::try_from(den).map_err(|_| RationalError::Overflow)?,
        })
    }

    /// The numerator (carries the sign).
    pub const fn numer(&self) -> i64 {
        self.num
    }

    /// The denominator (always positive).
    pub const fn denom(&self) -> i64 {
        self.den
    }

    /// Check if this rational is zero.
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Check if this rational is strictly positive.
    pub const fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Check if this rational is strictly negative.
    pub const fn is_negative(&self) -> bool {
        self.num < 0
    }

    /// Check if this rational is a whole number.
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// -1, 0 or 1 depending on the sign.
    pub const fn signum(&self) -> i64 {
        self.num.signum()
    }

    /// Add two rationals.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        let num = wide_mul(self.num, rhs.den)
            .checked_add(wide_mul(rhs.num, self.den))
            .ok_or(RationalError::Overflow)?;
        Self::from_wide(num, wide_mul(self.den, rhs.den))
    }

    /// Subtract `rhs` from this rational.
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        let num = wide_mul(self.num, rhs.den)
            .checked_sub(wide_mul(rhs.num, self.den))
            .ok_or(RationalError::Overflow)?;
        Self::from_wide(num, wide_mul(self.den, rhs.den))
    }

    /// Multiply two rationals.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        Self::from_wide(wide_mul(self.num, rhs.num), wide_mul(self.den, rhs.den))
    }

    /// Divide this rational by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        Self::from_wide(wide_mul(self.num, rhs.den), wide_mul(self.den, rhs.num))
    }

    /// Remainder of truncating division, with the sign of `self`.
    ///
    /// Matches the semantics of `%` on Rust integers.
    pub fn checked_rem(self, rhs: Self) -> Result<Self> {
        let quotient = self.checked_div(rhs)?.trunc();
        self.checked_sub(rhs.checked_mul(Self::from_integer(quotient))?)
    }

    /// Floored division: returns `(q, r)` where `q = floor(self / rhs)` and
    /// `self = q * rhs + r`. The remainder takes the sign of `rhs`.
    pub fn div_rem(self, rhs: Self) -> Result<(i64, Self)> {
        let quotient = self.checked_div(rhs)?.floor();
        let remainder = self.checked_sub(rhs.checked_mul(Self::from_integer(quotient))?)?;
        Ok((quotient, remainder))
    }

    /// Negate this rational.
    pub fn checked_neg(self) -> Result<Self> {
        Ok(Self {
            num: self.num.checked_neg().ok_or(RationalError::Overflow)?,
            den: self.den,
        })
    }

    /// Absolute value.
    pub fn checked_abs(self) -> Result<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// The reciprocal `den/num`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] for zero.
    pub fn recip(self) -> Result<Self> {
        Self::new(self.den, self.num)
    }

    /// Round to a whole number with the given mode.
    ///
    /// # Errors
    ///
    /// [`Round::Off`] returns [`RationalError::NotInteger`] when the value has
    /// a fractional part.
    pub fn round(&self, mode: Round) -> Result<i64> {
        let floor = self.num.div_euclid(self.den);
        let rem = self.num.rem_euclid(self.den);
        if rem == 0 {
            return Ok(floor);
        }

        // rem > 0 here, so floor + 1 never exceeds the true value's ceiling.
        let rounded = match mode {
            Round::Floor => floor,
            Round::Ceil => floor + 1,
            Round::Trunc => {
                if self.num < 0 {
                    floor + 1
                } else {
                    floor
                }
            }
            Round::Closest => self.closest(),
            Round::Off => return Err(RationalError::NotInteger(self.to_string())),
        };
        Ok(rounded)
    }

    /// Largest whole number less than or equal to this value.
    pub fn floor(&self) -> i64 {
        self.num.div_euclid(self.den)
    }

    /// Smallest whole number greater than or equal to this value.
    pub fn ceil(&self) -> i64 {
        let floor = self.floor();
        if self.is_integer() {
            floor
        } else {
            floor + 1
        }
    }

    /// Whole part, rounding toward zero.
    pub fn trunc(&self) -> i64 {
        self.num / self.den
    }

    /// Nearest whole number, ties away from zero.
    pub fn round_closest(&self) -> i64 {
        self.closest()
    }

    fn closest(&self) -> i64 {
        let floor = self.num.div_euclid(self.den);
        let rem = self.num.rem_euclid(self.den);
        match (2 * i128::from(rem)).cmp(&i128::from(self.den)) {
            Ordering::Less => floor,
            Ordering::Greater => floor + 1,
            Ordering::Equal if self.num < 0 => floor,
            Ordering::Equal => floor + 1,
        }
    }

    /// Lossy conversion to `f64`.
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Convert a float through its shortest decimal representation.
    ///
    /// `23.98_f64` becomes `1199/50`, not the binary expansion of the float.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::NotFinite`] for NaN and infinities, and
    /// [`RationalError::Overflow`] when the decimal does not fit 64 bits.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(RationalError::NotFinite(value.to_string()));
        }
        Self::from_decimal_str(&value.to_string())
    }

    /// Parse a plain decimal such as `"23.976"`, `"-1.5"` or `"24"`.
    pub fn from_decimal_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));
        let frac = frac.trim_end_matches('0');

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if body.is_empty() || body == "." || !is_digits(whole) || !is_digits(frac) {
            return Err(RationalError::invalid(text));
        }

        let mut num: i128 = 0;
        for digit in whole.bytes().chain(frac.bytes()) {
            num = num
                .checked_mul(10)
                .and_then(|n| n.checked_add(i128::from(digit - b'0')))
                .ok_or(RationalError::Overflow)?;
        }
        let exponent = u32::try_from(frac.len()).map_err(|_| RationalError::Overflow)?;
        let den = 10_i128
            .checked_pow(exponent)
            .ok_or(RationalError::Overflow)?;

        Self::from_wide(if negative { -num } else { num }, den)
    }
}

/// Product of two i64 values, which always fits i128.
fn wide_mul(a: i64, b: i64) -> i128 {
    i128::from(a) * i128::from(b)
}

/// Greatest common divisor (Euclid).
fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parse `"N/D"`, `"N"` or a decimal like `"-23.976"`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('/') {
            Some((num, den)) => {
                let num: i64 = num.trim().parse().map_err(|_| RationalError::invalid(s))?;
                let den: i64 = den.trim().parse().map_err(|_| RationalError::invalid(s))?;
                Self::new(num, den)
            }
            None => Self::from_decimal_str(s),
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        wide_mul(self.num, other.den).cmp(&wide_mul(other.num, self.den))
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl TryFrom<(i64, i64)> for Rational {
    type Error = RationalError;

    fn try_from((num, den): (i64, i64)) -> Result<Self> {
        Self::new(num, den)
    }
}

impl From<Rational> for (i64, i64) {
    fn from(r: Rational) -> Self {
        (r.num, r.den)
    }
}

impl TryFrom<f64> for Rational {
    type Error = RationalError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

/// Operator impls panic on overflow and division by zero, like the integer
/// operators do. Use the `checked_*` methods to handle those cases.
fn expect_op(result: Result<Rational>, op: &str) -> Rational {
    match result {
        Ok(value) => value,
        Err(e) => panic!("rational {op} failed: {e}"),
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_add(rhs), "addition")
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_sub(rhs), "subtraction")
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_mul(rhs), "multiplication")
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_div(rhs), "division")
    }
}

impl Rem for Rational {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        expect_op(self.checked_rem(rhs), "remainder")
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        expect_op(self.checked_neg(), "negation")
    }
}
