use crate::core::ControlPoints;
use crate::shared::spline_geometry::{self, polyline_length};
use crate::shared::{DisplayMode, EditorOptions, InterpolationParams, Point2D};

use super::{EditMode, EditSession};

/// Hauptzustand des Editors
pub struct EditorState {
    /// Kontrollpunkte in Durchlaufreihenfolge
    pub(crate) control_points: ControlPoints,
    /// Tension und Grain
    pub(crate) params: InterpolationParams,
    /// Laufende Geste (Modus + aktiver Punkt)
    pub(crate) edit: EditSession,
    /// Abgetastete Kurve, wird bei jeder Änderung komplett neu berechnet
    pub(crate) rendered_curve: Vec<Point2D>,
    /// Sichtbarkeit der Polylinien (reine Projektion für den Renderer)
    pub display_mode: DisplayMode,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt einen leeren Editor mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(&EditorOptions::default())
    }

    /// Erstellt einen leeren Editor mit den gegebenen Optionen
    pub fn with_options(options: &EditorOptions) -> Self {
        Self {
            control_points: ControlPoints::new(),
            params: options.interpolation_params(),
            edit: EditSession::new(),
            rendered_curve: Vec::new(),
            display_mode: options.display_mode,
        }
    }

    /// Kontrollpunkte in Reihenfolge
    pub fn control_points(&self) -> &[Point2D] {
        self.control_points.as_slice()
    }

    /// Aktuell abgetastete Kurve
    pub fn rendered_curve(&self) -> &[Point2D] {
        &self.rendered_curve
    }

    /// Aktuelle Interpolationsparameter
    pub fn params(&self) -> InterpolationParams {
        self.params
    }

    /// Aktueller Interaktionsmodus
    pub fn mode(&self) -> EditMode {
        self.edit.mode()
    }

    /// Index des aktiven Kontrollpunkts
    pub fn active_index(&self) -> Option<usize> {
        self.edit.active_index()
    }

    /// Position des aktiven Kontrollpunkts
    pub fn active_point(&self) -> Option<Point2D> {
        self.active_index()
            .and_then(|index| self.control_points.get(index))
    }

    /// Approximierte Länge der abgetasteten Kurve
    pub fn curve_length(&self) -> f64 {
        polyline_length(&self.rendered_curve)
    }

    /// Statuszeile: nächste erwartete Geste.
    pub fn status_text(&self) -> &'static str {
        match (self.mode(), self.control_points.len()) {
            (EditMode::Append, _) => "Ziehen verschiebt den neuen Punkt, Escape beendet",
            (EditMode::Move, _) => "Punkt ziehen, Loslassen beendet, Entf löscht",
            (EditMode::Insert, _) => "Eingefügten Punkt ziehen, Loslassen beendet",
            (EditMode::None, 0) => "Startpunkt klicken",
            (EditMode::None, 1) => "Nächsten Punkt klicken",
            (EditMode::None, _) => "Links hängt an, Mitte verschiebt, Rechts fügt ein",
        }
    }

    /// Berechnet die Kurve aus Kontrollpunkten und Parametern neu.
    pub(crate) fn recompute_curve(&mut self) {
        self.rendered_curve =
            spline_geometry::sample_curve(self.control_points.as_slice(), &self.params);
        log::debug!(
            "Kurve neu berechnet: {} Kontrollpunkte → {} Samples",
            self.control_points.len(),
            self.rendered_curve.len()
        );
    }
}
