//! Error types for rational arithmetic.
//!
//! Every fallible operation on [`Rational`](crate::Rational) reports one of
//! these variants instead of wrapping or panicking.

/// Error type for rational construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    /// A denominator or divisor was zero.
    #[error("Division by zero")]
    DivideByZero,

    /// The reduced result does not fit a 64-bit numerator/denominator pair.
    #[error("Arithmetic overflow: result does not fit in 64 bits")]
    Overflow,

    /// A float input was NaN or infinite.
    #[error("Value is not finite: {0}")]
    NotFinite(String),

    /// A whole number was required but the value has a fractional part.
    #[error("Value is not a whole number: {0}")]
    NotInteger(String),

    /// Text could not be read as a rational or decimal number.
    #[error("Invalid rational: {0}")]
    Invalid(String),
}

impl RationalError {
    /// Create a new Invalid error.
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Result type alias using [`RationalError`].
pub type Result<T> = std::result::Result<T, RationalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(RationalError::DivideByZero.to_string(), "Division by zero");
        assert_eq!(
            RationalError::Overflow.to_string(),
            "Arithmetic overflow: result does not fit in 64 bits"
        );
        assert_eq!(
            RationalError::NotInteger("3/2".into()).to_string(),
            "Value is not a whole number: 3/2"
        );
        assert_eq!(
            RationalError::invalid("abc").to_string(),
            "Invalid rational: abc"
        );
    }
}
