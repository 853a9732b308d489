//! Geordnete Kontrollpunkt-Sequenz.
//!
//! Die Reihenfolge definiert die Durchlaufrichtung der Kurve.
//! Mutation nur über Anhängen, Einfügen, Ersetzen und Entfernen per Index.

use super::picking::{self, PickMatch};
use crate::shared::Point2D;

/// Kontrollpunkte einer Kurve
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPoints {
    points: Vec<Point2D>,
}

impl ControlPoints {
    /// Erstellt eine leere Sequenz
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Anzahl der Kontrollpunkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte in Reihenfolge
    pub fn as_slice(&self) -> &[Point2D] {
        &self.points
    }

    /// Punkt an `index`
    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    /// Hängt einen Punkt an und liefert seinen Index
    pub fn push(&mut self, point: Point2D) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Fügt einen Punkt vor `index` ein (`index == len` hängt an)
    pub fn insert(&mut self, index: usize, point: Point2D) -> bool {
        if index > self.points.len() {
            return false;
        }
        self.points.insert(index, point);
        true
    }

    /// Ersetzt den Punkt an `index`
    pub fn replace(&mut self, index: usize, point: Point2D) -> bool {
        let Some(slot) = self.points.get_mut(index) else {
            return false;
        };
        *slot = point;
        true
    }

    /// Entfernt den Punkt an `index`
    pub fn remove(&mut self, index: usize) -> Option<Point2D> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Leert die Sequenz
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Skaliert alle Punkte achsenweise
    pub fn scale(&mut self, factor: Point2D) {
        for point in &mut self.points {
            *point *= factor;
        }
    }

    /// Nächster Kontrollpunkt zu `query` (quadrierter Abstand, erster gewinnt)
    pub fn nearest_point(&self, query: Point2D) -> Option<PickMatch> {
        picking::nearest_point(&self.points, query)
    }

    /// Nächstes Segment zu `query`, `index` ist der erste Punkt des Paars
    pub fn nearest_segment(&self, query: Point2D) -> Option<PickMatch> {
        picking::nearest_segment(&self.points, query)
    }
}
