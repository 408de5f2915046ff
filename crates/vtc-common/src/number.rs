//! Numeric input union.
//!
//! Constructors that accept "any number" take a [`Number`] so the caller's
//! shape (integer, float, exact fraction) is known without runtime type
//! inspection.

use std::fmt;

use crate::error::Result;
use crate::rational::Rational;

/// An integer, float or exact rational input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// A whole number.
    Int(i64),
    /// A float. Only exact when it has no fractional part.
    Float(f64),
    /// An exact fraction.
    Rational(Rational),
}

impl Number {
    /// Convert to an exact rational.
    ///
    /// Floats go through their shortest decimal form, see
    /// [`Rational::from_f64`].
    pub fn to_rational(&self) -> Result<Rational> {
        match *self {
            Self::Int(n) => Ok(Rational::from_integer(n)),
            Self::Float(f) => Rational::from_f64(f),
            Self::Rational(r) => Ok(r),
        }
    }

    /// Whether the input carries no float imprecision.
    ///
    /// A float is exact only when it is whole (`24.0`).
    pub fn is_exact(&self) -> bool {
        match *self {
            Self::Int(_) | Self::Rational(_) => true,
            Self::Float(f) => f.is_finite() && f.fract() == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Rational(r) => write!(f, "{}", r),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rational() {
        assert_eq!(
            Number::Int(24).to_rational().unwrap(),
            Rational::from_integer(24)
        );
        assert_eq!(
            Number::Float(29.97).to_rational().unwrap(),
            Rational::new(2997, 100).unwrap()
        );
        let exact = Rational::new(30000, 1001).unwrap();
        assert_eq!(Number::from(exact).to_rational().unwrap(), exact);
    }

    #[test]
    fn test_is_exact() {
        assert!(Number::from(24).is_exact());
        assert!(Number::from(24.0).is_exact());
        assert!(!Number::from(23.98).is_exact());
        assert!(!Number::from(f64::INFINITY).is_exact());
        assert!(Number::from(Rational::new(1, 3).unwrap()).is_exact());
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::from(24).to_string(), "24");
        assert_eq!(Number::from(23.98).to_string(), "23.98");
        assert_eq!(
            Number::from(Rational::new(24000, 1001).unwrap()).to_string(),
            "24000/1001"
        );
    }
}
