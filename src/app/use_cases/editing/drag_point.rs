//! Use-Case: Aktiven Kontrollpunkt verschieben.

use crate::app::EditorState;
use crate::shared::Point2D;

/// Setzt den aktiven Punkt auf `pos`. Ohne aktiven Punkt: keine Änderung.
pub fn drag_active_point(state: &mut EditorState, pos: Point2D) {
    let Some(index) = state.edit.active_index() else {
        return;
    };
    if !state.control_points.replace(index, pos) {
        log::warn!("Aktiver Index {} ungültig, Geste beendet", index);
        state.edit.end();
        return;
    }
    state.recompute_curve();
}
