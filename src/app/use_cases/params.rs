//! Use-Case-Funktionen für die Interpolationsparameter.

use crate::app::EditorState;
use crate::shared::EditorError;

/// Setzt die Tension und berechnet die Kurve neu.
///
/// Nicht-endliche Werte werden abgelehnt, der alte Wert bleibt aktiv.
pub fn set_tension(state: &mut EditorState, tension: f64) -> Result<(), EditorError> {
    if let Err(e) = state.params.set_tension(tension) {
        log::warn!("{}", e);
        return Err(e);
    }
    state.recompute_curve();
    log::info!("Tension: {}", tension);
    Ok(())
}

/// Setzt den Grain und berechnet die Kurve neu.
///
/// Werte ≤ 0 werden abgelehnt; alter Grain und alte Kurve bleiben erhalten.
pub fn set_grain(state: &mut EditorState, grain: i64) -> Result<(), EditorError> {
    if let Err(e) = state.params.set_grain(grain) {
        log::warn!("{}", e);
        return Err(e);
    }
    state.recompute_curve();
    log::info!("Grain: {}", grain);
    Ok(())
}
