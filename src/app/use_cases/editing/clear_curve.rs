//! Use-Case: Kurve komplett zurücksetzen.

use crate::app::EditorState;

/// Leert Kontrollpunkte und Kurve und beendet jede laufende Geste.
pub fn clear_curve(state: &mut EditorState) {
    let removed = state.control_points.len();
    state.control_points.clear();
    state.edit.end();
    state.rendered_curve.clear();
    log::info!("Kurve zurückgesetzt ({} Kontrollpunkte verworfen)", removed);
}
