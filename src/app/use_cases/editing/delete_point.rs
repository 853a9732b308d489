//! Use-Case: Aktiven Kontrollpunkt löschen.

use crate::app::EditorState;

/// Entfernt den aktiven Punkt und beendet die Geste. Ohne aktiven Punkt: No-op.
pub fn delete_active_point(state: &mut EditorState) {
    let Some(index) = state.edit.active_index() else {
        log::debug!("Löschen ignoriert: kein aktiver Punkt");
        return;
    };

    state.edit.end();
    if state.control_points.remove(index).is_none() {
        log::warn!("Aktiver Index {} ungültig, nichts gelöscht", index);
        return;
    }
    state.recompute_curve();

    log::info!(
        "Punkt {} gelöscht, {} Kontrollpunkte verbleiben",
        index,
        state.control_points.len()
    );
}
