//! Render-Szene als expliziter Übergabevertrag zwischen Editor und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein externer Renderer sie konsumiert.

use super::Point2D;
use serde::Serialize;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderScene {
    /// Kontrollpunkte als Polyline (None = per Darstellungsmodus ausgeblendet)
    pub control_polyline: Option<Vec<Point2D>>,
    /// Abgetastete Kurve (None = per Darstellungsmodus ausgeblendet)
    pub smooth_polyline: Option<Vec<Point2D>>,
    /// Position des aktiven Kontrollpunkts (für Hervorhebung)
    pub active_point: Option<Point2D>,
}

impl RenderScene {
    /// Gibt zurück, ob eine sichtbare, nicht-leere Kurve vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.smooth_polyline
            .as_ref()
            .is_some_and(|curve| !curve.is_empty())
    }
}
