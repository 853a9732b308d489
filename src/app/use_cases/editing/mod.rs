//! Use-Case-Funktionen für das Bearbeiten der Kontrollpunkte.
//!
//! Aufgeteilt nach Operation:
//! - `append_point` - Punkt anhängen (Primärtaste)
//! - `move_point` - Nächsten Punkt zum Verschieben wählen (Sekundärtaste)
//! - `insert_point` - Punkt ins nächste Segment einfügen (Tertiärtaste)
//! - `drag_point` - Aktiven Punkt verschieben
//! - `finish_edit` - Geste beenden (Release, Escape)
//! - `delete_point` - Aktiven Punkt löschen
//! - `clear_curve` - Alles zurücksetzen

mod append_point;
mod clear_curve;
mod delete_point;
mod drag_point;
mod finish_edit;
mod insert_point;
mod move_point;

pub use append_point::append_point;
pub use clear_curve::clear_curve;
pub use delete_point::delete_active_point;
pub use drag_point::drag_active_point;
pub use finish_edit::{cancel_edit, release_active_point};
pub use insert_point::insert_point;
pub use move_point::begin_move_point;
