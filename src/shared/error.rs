//! Domänenfehler des Editors.

use thiserror::Error;

/// Fehler, die an den Setter-/Command-Grenzen des Editors gemeldet werden.
///
/// Ein abgelehnter Wert verändert den Zustand nie.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// Ungültiger Parameterwert (z.B. Grain ≤ 0, nicht-endliche Tension)
    #[error("Ungültiger Parameter `{name}`: {value}")]
    InvalidParameter {
        /// Name des Parameters
        name: &'static str,
        /// Abgelehnter Wert (formatiert)
        value: String,
    },
}

impl EditorError {
    /// Kurzform für `InvalidParameter`.
    pub fn invalid(name: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}
