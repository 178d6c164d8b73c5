//! Risk band presenter: a total lookup from the service's color tag to style
//! tokens. Every input, including an absent or unknown tag, maps to a style.

use serde::Serialize;

use crate::model::{Outcome, RiskColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Green,
    Orange,
    Red,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub text: &'static str,
}

pub fn tone_for(color: Option<&RiskColor>) -> Tone {
    match color {
        Some(RiskColor::Green) => Tone::Green,
        Some(RiskColor::Orange) => Tone::Orange,
        Some(RiskColor::Red) => Tone::Red,
        Some(RiskColor::Unrecognized(_)) | None => Tone::Neutral,
    }
}

pub fn outcome_tone(outcome: &Outcome) -> Tone {
    match outcome {
        Outcome::Expired => Tone::Red,
        Outcome::Survived => Tone::Green,
        Outcome::Unrecognized(_) => Tone::Neutral,
    }
}

pub fn panel_style(color: Option<&RiskColor>) -> PanelStyle {
    match tone_for(color) {
        Tone::Green => PanelStyle {
            background: "bg-green-50",
            border: "border-green-300",
            text: "text-green-900",
        },
        Tone::Orange => PanelStyle {
            background: "bg-orange-50",
            border: "border-orange-300",
            text: "text-orange-900",
        },
        Tone::Red => PanelStyle {
            background: "bg-red-50",
            border: "border-red-300",
            text: "text-red-900",
        },
        Tone::Neutral => PanelStyle {
            background: "bg-gray-50",
            border: "border-gray-300",
            text: "text-gray-900",
        },
    }
}

pub fn badge_style(color: Option<&RiskColor>) -> BadgeStyle {
    let background = match tone_for(color) {
        Tone::Green => "bg-green-600",
        Tone::Orange => "bg-orange-600",
        Tone::Red => "bg-red-600",
        Tone::Neutral => "bg-gray-600",
    };
    BadgeStyle {
        background,
        text: "text-white",
    }
}

/// Marker used by the plain-text renderer.
pub fn tone_marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Green => "[GREEN]",
        Tone::Orange => "[ORANGE]",
        Tone::Red => "[RED]",
        Tone::Neutral => "[-]",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/risk.rs"]
mod tests;
