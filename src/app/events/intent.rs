use crate::shared::{DisplayMode, Point2D};

/// Curve-Intents: rohe Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveIntent {
    /// Primärtaste gedrückt (Punkt anhängen)
    PrimaryPressed { pos: Point2D },
    /// Sekundärtaste gedrückt (nächsten Punkt verschieben)
    SecondaryPressed { pos: Point2D },
    /// Tertiärtaste gedrückt (Punkt ins nächste Segment einfügen)
    TertiaryPressed { pos: Point2D },
    /// Zeiger bei gedrückter Taste bewegt
    PointerDragged { pos: Point2D },
    /// Taste losgelassen
    PointerReleased,
    /// Escape gedrückt
    EscapePressed,
    /// Entf gedrückt
    DeletePressed,
    /// Alles zurücksetzen
    ClearRequested,
    /// Tension geändert
    TensionChanged { tension: f64 },
    /// Grain geändert (ungeprüfter Rohwert)
    GrainChanged { grain: i64 },
    /// Zeichenfläche hat ihre Größe geändert
    ViewportResized {
        old_size: [f64; 2],
        new_size: [f64; 2],
    },
    /// Darstellungsmodus umgeschaltet
    DisplayModeChanged { mode: DisplayMode },
}
