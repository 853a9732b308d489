use crate::shared::{DisplayMode, Point2D};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveCommand {
    /// Punkt anhängen (bei leerer Sequenz doppelt) und aktiv setzen
    AppendPoint { pos: Point2D },
    /// Nächsten Kontrollpunkt zum Verschieben auswählen
    BeginMovePoint { pos: Point2D },
    /// Punkt in das nächstgelegene Segment einfügen
    InsertPoint { pos: Point2D },
    /// Aktiven Punkt an neue Position setzen
    DragActivePoint { pos: Point2D },
    /// Geste beenden (außer im Append-Modus)
    ReleaseActivePoint,
    /// Geste bedingungslos beenden
    CancelEdit,
    /// Aktiven Punkt löschen
    DeleteActivePoint,
    /// Alle Punkte und die Kurve verwerfen
    ClearCurve,
    /// Tension setzen
    SetTension { tension: f64 },
    /// Grain setzen
    SetGrain { grain: i64 },
    /// Alle Punkte achsenweise skalieren
    ScaleCurve { scale_x: f64, scale_y: f64 },
    /// Darstellungsmodus setzen
    SetDisplayMode { mode: DisplayMode },
}
