//! Validation policy for raw rows
//!
//! Defines how strictly measurements are checked when wrapping raw input.

use serde::{Deserialize, Serialize};

/// Validation policy levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Any number is accepted, including negatives
    #[default]
    Lenient,
    /// Rim and tire must both be zero or greater
    NonNegative,
}

impl Policy {
    /// Pick the policy matching a `strict` flag
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict { Self::NonNegative } else { Self::Lenient }
    }

    /// Whether a measurement is acceptable under this policy
    #[must_use]
    pub const fn accepts(self, value: f64) -> bool {
        match self {
            Self::Lenient => true,
            Self::NonNegative => value >= 0.0,
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::NonNegative => write!(f, "non_negative"),
        }
    }
}

impl std::str::FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "lenient" => Ok(Self::Lenient),
            "non_negative" | "strict" => Ok(Self::NonNegative),
            _ => Err(format!("Invalid policy: {s}. Use: lenient, non_negative")),
        }
    }
}
