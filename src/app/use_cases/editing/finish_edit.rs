//! Use-Case: Laufende Geste beenden.

use crate::app::state::EditMode;
use crate::app::EditorState;

/// Beendet die Geste beim Loslassen.
///
/// Im Append-Modus bleibt der angehängte Punkt aktiv, damit nachfolgende
/// Drags ihn weiter verschieben.
pub fn release_active_point(state: &mut EditorState) {
    if state.edit.mode() == EditMode::Append {
        return;
    }
    state.edit.end();
}

/// Beendet die Geste bedingungslos; der Punkt bleibt, wo er ist.
pub fn cancel_edit(state: &mut EditorState) {
    if state.edit.mode() != EditMode::None {
        log::debug!("Geste {:?} beendet", state.edit.mode());
    }
    state.edit.end();
}
