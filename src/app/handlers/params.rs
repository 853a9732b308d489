//! Handler für Tension und Grain.

use crate::app::use_cases;
use crate::app::EditorState;

/// Setzt die Tension.
pub fn set_tension(state: &mut EditorState, tension: f64) -> anyhow::Result<()> {
    use_cases::params::set_tension(state, tension)?;
    Ok(())
}

/// Setzt den Grain.
pub fn set_grain(state: &mut EditorState, grain: i64) -> anyhow::Result<()> {
    use_cases::params::set_grain(state, grain)?;
    Ok(())
}
