//! Builder für Render-Szenen aus dem EditorState.

use crate::app::EditorState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen EditorState.
///
/// Der Darstellungsmodus blendet Polylinien nur aus, die Daten selbst
/// bleiben unverändert.
pub fn build(state: &EditorState) -> RenderScene {
    let mode = state.display_mode;

    RenderScene {
        control_polyline: mode
            .shows_input()
            .then(|| state.control_points().to_vec()),
        smooth_polyline: mode
            .shows_smooth()
            .then(|| state.rendered_curve().to_vec()),
        active_point: state.active_point(),
    }
}
