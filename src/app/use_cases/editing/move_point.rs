//! Use-Case: Bestehenden Kontrollpunkt zum Verschieben auswählen.

use crate::app::state::EditMode;
use crate::app::EditorState;
use crate::shared::Point2D;

/// Wählt den Kontrollpunkt mit dem kleinsten Abstand zu `pos` als aktiven Punkt.
///
/// Ohne Kontrollpunkte wird das Event ignoriert.
pub fn begin_move_point(state: &mut EditorState, pos: Point2D) {
    let Some(hit) = state.control_points.nearest_point(pos) else {
        log::debug!("Verschieben ignoriert: keine Kontrollpunkte");
        return;
    };

    state.edit.begin(EditMode::Move, hit.index);
    log::info!(
        "Punkt {} zum Verschieben gewählt (Abstand {:.2})",
        hit.index,
        hit.distance
    );
}
