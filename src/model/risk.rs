use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk band tag sent by the prediction service.
///
/// Unrecognised tags are kept verbatim instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskColor {
    Green,
    Orange,
    Red,
    Unrecognized(String),
}

impl From<String> for RiskColor {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "green" => Self::Green,
            "orange" => Self::Orange,
            "red" => Self::Red,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<RiskColor> for String {
    fn from(color: RiskColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for RiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => f.write_str("green"),
            Self::Orange => f.write_str("orange"),
            Self::Red => f.write_str("red"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// Outcome label reported by each ensemble member. Labels other than the two
/// known ones are kept verbatim so one odd member cannot fail the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    Expired,
    Survived,
    Unrecognized(String),
}

impl From<String> for Outcome {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Expired" => Self::Expired,
            "Survived" => Self::Survived,
            _ => Self::Unrecognized(raw),
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.to_string()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expired => f.write_str("Expired"),
            Self::Survived => f.write_str("Survived"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
