//! Use-Case: Kontrollpunkt anhängen.

use crate::app::state::EditMode;
use crate::app::EditorState;
use crate::shared::Point2D;

/// Hängt `pos` an die Sequenz an und macht ihn zum aktiven Punkt.
///
/// Bei leerer Sequenz wird der Punkt doppelt angehängt, damit schon der
/// erste Klick eine Kurve aus zwei Punkten ergibt.
pub fn append_point(state: &mut EditorState, pos: Point2D) {
    if state.control_points.is_empty() {
        state.control_points.push(pos);
    }
    let index = state.control_points.push(pos);

    state.edit.begin(EditMode::Append, index);
    state.recompute_curve();

    log::info!(
        "Punkt {} an Position ({:.1}, {:.1}) angehängt",
        index,
        pos.x,
        pos.y
    );
}
