//! Handler für das Bearbeiten der Kontrollpunkte.

use crate::app::use_cases;
use crate::app::EditorState;
use crate::shared::Point2D;

/// Hängt einen Punkt an (Primärtaste).
pub fn append_point(state: &mut EditorState, pos: Point2D) {
    use_cases::editing::append_point(state, pos);
}

/// Wählt den nächsten Punkt zum Verschieben (Sekundärtaste).
pub fn begin_move(state: &mut EditorState, pos: Point2D) {
    use_cases::editing::begin_move_point(state, pos);
}

/// Fügt einen Punkt ins nächste Segment ein (Tertiärtaste).
pub fn insert_point(state: &mut EditorState, pos: Point2D) {
    use_cases::editing::insert_point(state, pos);
}

/// Verschiebt den aktiven Punkt.
pub fn drag(state: &mut EditorState, pos: Point2D) {
    use_cases::editing::drag_active_point(state, pos);
}

/// Beendet die Geste beim Loslassen.
pub fn release(state: &mut EditorState) {
    use_cases::editing::release_active_point(state);
}

/// Beendet die Geste bedingungslos (Escape).
pub fn cancel(state: &mut EditorState) {
    use_cases::editing::cancel_edit(state);
}

/// Löscht den aktiven Punkt (Entf).
pub fn delete_active(state: &mut EditorState) {
    use_cases::editing::delete_active_point(state);
}

/// Setzt die Kurve zurück.
pub fn clear(state: &mut EditorState) {
    use_cases::editing::clear_curve(state);
}
