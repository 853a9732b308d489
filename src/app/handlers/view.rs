//! Handler für Darstellung und Zeichenflächen-Größe.

use crate::app::use_cases;
use crate::app::EditorState;
use crate::shared::DisplayMode;

/// Skaliert alle Punkte nach einer Größenänderung.
pub fn scale(state: &mut EditorState, scale_x: f64, scale_y: f64) -> anyhow::Result<()> {
    use_cases::viewport::scale_curve(state, scale_x, scale_y)?;
    Ok(())
}

/// Setzt den Darstellungsmodus.
pub fn set_display_mode(state: &mut EditorState, mode: DisplayMode) {
    state.display_mode = mode;
    log::info!("Darstellungsmodus: {:?}", mode);
}
