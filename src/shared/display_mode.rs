//! Darstellungsmodus der beiden Polylinien (shared zwischen App und Renderer).

use super::EditorError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Welche Polylinien der Renderer zeichnen soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Kontrollpunkt-Polyline und geglättete Kurve
    #[default]
    Both,
    /// Nur die Kontrollpunkt-Polyline
    Input,
    /// Nur die geglättete Kurve
    Smooth,
}

impl DisplayMode {
    /// Ob die Kontrollpunkt-Polyline sichtbar ist.
    pub fn shows_input(self) -> bool {
        matches!(self, Self::Both | Self::Input)
    }

    /// Ob die geglättete Kurve sichtbar ist.
    pub fn shows_smooth(self) -> bool {
        matches!(self, Self::Both | Self::Smooth)
    }
}

impl FromStr for DisplayMode {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "both" => Ok(Self::Both),
            "input" => Ok(Self::Input),
            "smooth" => Ok(Self::Smooth),
            other => Err(EditorError::invalid("display_mode", other)),
        }
    }
}
