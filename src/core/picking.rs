//! Treffer-Suche auf Kontrollpunkten: nächster Punkt und nächstes Segment.
//!
//! Lineare O(n)-Scans. Bei Gleichstand gewinnt immer der erste Treffer in
//! Sequenz-Reihenfolge.

use crate::shared::Point2D;

/// Ergebnis einer Treffer-Suche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickMatch {
    /// Index des Punkts bzw. des ersten Punkts des Segments
    pub index: usize,
    /// Abstand zur Abfrageposition
    pub distance: f64,
}

/// Findet den Punkt mit dem kleinsten quadrierten Abstand zu `query`.
pub fn nearest_point(points: &[Point2D], query: Point2D) -> Option<PickMatch> {
    let mut best: Option<(usize, f64)> = None;
    for (index, point) in points.iter().enumerate() {
        let d2 = point.distance_squared(query);
        if best.is_none_or(|(_, best_d2)| d2 < best_d2) {
            best = Some((index, d2));
        }
    }
    best.map(|(index, d2)| PickMatch {
        index,
        distance: d2.sqrt(),
    })
}

/// Abstandsmaß zwischen Klickposition `c` und dem Segment `a`–`b`.
///
/// Liegt die Projektion von `c` zwischen den Endpunkten (beide anliegenden
/// Winkel < 90°), zählt der Lotabstand zur Geraden durch `a` und `b`,
/// sonst der Abstand zum näheren Endpunkt. Ein Segment der Länge 0 fällt
/// automatisch in den Endpunkt-Fall.
pub fn segment_distance(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    let ab = b - a;
    let ac = c - a;
    let bc = c - b;

    let inside_at_a = ab.dot(ac) > 0.0;
    let inside_at_b = (-ab).dot(bc) > 0.0;

    if inside_at_a && inside_at_b {
        // Beide Skalarprodukte > 0 ⇒ |ab| > 0
        ab.perp_dot(ac).abs() / ab.length()
    } else {
        ac.length().min(bc.length())
    }
}

/// Findet das Segment (Paar aufeinanderfolgender Punkte) mit dem kleinsten
/// [`segment_distance`] zu `query`. `index` ist der erste Punkt des Paars.
pub fn nearest_segment(points: &[Point2D], query: Point2D) -> Option<PickMatch> {
    let mut best: Option<PickMatch> = None;
    for (index, pair) in points.windows(2).enumerate() {
        let distance = segment_distance(pair[0], pair[1], query);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(PickMatch { index, distance });
        }
    }
    best
}
