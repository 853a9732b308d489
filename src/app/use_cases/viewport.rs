//! Use-Case-Funktionen für Größenänderungen der Zeichenfläche.

use crate::app::EditorState;
use crate::shared::EditorError;
use glam::DVec2;

/// Skaliert Kontrollpunkte und abgetastete Kurve achsenweise.
///
/// Reine Koordinaten-Transformation ohne Neuberechnung: die Kurve skaliert
/// linear mit ihren Kontrollpunkten. Faktoren müssen endlich und > 0 sein.
pub fn scale_curve(state: &mut EditorState, scale_x: f64, scale_y: f64) -> Result<(), EditorError> {
    for (name, value) in [("scale_x", scale_x), ("scale_y", scale_y)] {
        if !(value.is_finite() && value > 0.0) {
            log::warn!("Skalierung abgelehnt: {} = {}", name, value);
            return Err(EditorError::invalid(name, value));
        }
    }

    let factor = DVec2::new(scale_x, scale_y);
    state.control_points.scale(factor);
    for point in &mut state.rendered_curve {
        *point *= factor;
    }

    log::debug!("Kurve skaliert um ({:.3}, {:.3})", scale_x, scale_y);
    Ok(())
}
