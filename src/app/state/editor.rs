/// Interaktionsmodus des Editors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Kein Punkt in Bearbeitung
    #[default]
    None,
    /// Zuletzt angehängter Punkt folgt dem Zeiger (bleibt über Release aktiv)
    Append,
    /// Bestehender Punkt wird verschoben
    Move,
    /// Eingefügter Punkt wird platziert
    Insert,
}

/// Laufende Bearbeitungsgeste: Modus + aktiver Punkt.
///
/// Invariante: `active_index` ist genau dann gesetzt, wenn `mode != None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditSession {
    mode: EditMode,
    active_index: Option<usize>,
}

impl EditSession {
    /// Erstellt eine leere Session (Modus `None`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Modus
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Index des aktiven Kontrollpunkts
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Startet eine Geste auf dem Punkt `index`.
    pub(crate) fn begin(&mut self, mode: EditMode, index: usize) {
        if mode == EditMode::None {
            self.end();
            return;
        }
        self.mode = mode;
        self.active_index = Some(index);
    }

    /// Beendet die Geste (Position bleibt, wie sie ist).
    pub(crate) fn end(&mut self) {
        self.mode = EditMode::None;
        self.active_index = None;
    }
}
