//! Rounding modes used when an exact value must become a whole number.

use std::fmt;

/// How to turn a fractional value into a whole number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Round {
    /// Nearest whole number; ties round away from zero.
    #[default]
    Closest,
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// Toward zero.
    Trunc,
    /// No rounding: the value must already be whole.
    Off,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closest => write!(f, "closest"),
            Self::Floor => write!(f, "floor"),
            Self::Ceil => write!(f, "ceil"),
            Self::Trunc => write!(f, "trunc"),
            Self::Off => write!(f, "off"),
        }
    }
}

impl std::str::FromStr for Round {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "closest" => Ok(Self::Closest),
            "floor" => Ok(Self::Floor),
            "ceil" => Ok(Self::Ceil),
            "trunc" => Ok(Self::Trunc),
            "off" => Ok(Self::Off),
            _ => Err(format!("Invalid rounding mode: {}", s)),
        }
    }
}
