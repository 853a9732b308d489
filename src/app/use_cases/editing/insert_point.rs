//! Use-Case: Kontrollpunkt in das nächstgelegene Segment einfügen.

use crate::app::state::EditMode;
use crate::app::EditorState;
use crate::shared::Point2D;

/// Fügt `pos` direkt hinter dem ersten Punkt des nächstgelegenen Segments ein.
///
/// Benötigt mindestens zwei Kontrollpunkte, sonst wird das Event ignoriert.
pub fn insert_point(state: &mut EditorState, pos: Point2D) {
    let Some(hit) = state.control_points.nearest_segment(pos) else {
        log::debug!("Einfügen ignoriert: weniger als zwei Kontrollpunkte");
        return;
    };

    let index = hit.index + 1;
    if !state.control_points.insert(index, pos) {
        return;
    }

    state.edit.begin(EditMode::Insert, index);
    state.recompute_curve();

    log::info!(
        "Punkt an Index {} eingefügt (Segment {}, Abstand {:.2})",
        index,
        hit.index,
        hit.distance
    );
}
