//! Reine Geometrie-Funktionen für Cardinal-/Hermite-Splines.
//!
//! Layer-neutral: kann von `core`, `app` und dem Benchmark importiert werden,
//! ohne Zirkel-Abhängigkeiten zu erzeugen. Kein Zustand, keine Seiteneffekte.

use super::options::{DEFAULT_GRAIN, DEFAULT_TENSION};
use super::EditorError;
use glam::{DMat4, DVec2, DVec4};

/// Ein Punkt in der Zeichenfläche (x, y).
pub type Point2D = DVec2;

/// Hermite-Basismatrix H, zeilenweise notiert.
pub const HERMITE_ROWS: [[f64; 4]; 4] = [
    [2.0, -2.0, 1.0, 1.0],
    [-3.0, 3.0, -2.0, -1.0],
    [0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];

/// Glättungsparameter der Interpolation.
///
/// Invariante: `grain >= 1` und `tension` endlich. Nur über die
/// validierenden Konstruktoren/Setter erzeugbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationParams {
    tension: f64,
    grain: u32,
}

impl Default for InterpolationParams {
    fn default() -> Self {
        Self {
            tension: DEFAULT_TENSION,
            grain: DEFAULT_GRAIN,
        }
    }
}

impl InterpolationParams {
    /// Erstellt validierte Parameter.
    pub fn new(tension: f64, grain: i64) -> Result<Self, EditorError> {
        Ok(Self {
            tension: validate_tension(tension)?,
            grain: validate_grain(grain)?,
        })
    }

    /// Tangenten-Skalierung (1.0 = neutral).
    pub fn tension(&self) -> f64 {
        self.tension
    }

    /// Anzahl der Unterteilungen pro Segment.
    pub fn grain(&self) -> u32 {
        self.grain
    }

    /// Setzt die Tension. Bei Fehler bleibt der alte Wert erhalten.
    pub fn set_tension(&mut self, tension: f64) -> Result<(), EditorError> {
        self.tension = validate_tension(tension)?;
        Ok(())
    }

    /// Setzt den Grain. Bei Fehler bleibt der alte Wert erhalten.
    pub fn set_grain(&mut self, grain: i64) -> Result<(), EditorError> {
        self.grain = validate_grain(grain)?;
        Ok(())
    }
}

fn validate_tension(tension: f64) -> Result<f64, EditorError> {
    if tension.is_finite() {
        Ok(tension)
    } else {
        Err(EditorError::invalid("tension", tension))
    }
}

fn validate_grain(grain: i64) -> Result<u32, EditorError> {
    match u32::try_from(grain) {
        Ok(g) if g >= 1 => Ok(g),
        _ => Err(EditorError::invalid("grain", grain)),
    }
}

/// Berechnet die Zeile `U(u) · H` für einen Parameter `u`.
///
/// Unabhängig von den Kontrollpunkten, kann pro `u` wiederverwendet werden.
pub fn hermite_weights(u: f64) -> DVec4 {
    // Spalten = Zeilen von H, damit `M * U` dem Zeilenvektor `U · H` entspricht
    let basis = DMat4::from_cols_array_2d(&HERMITE_ROWS);
    let u2 = u * u;
    basis * DVec4::new(u2 * u, u2, u, 1.0)
}

/// Wertet ein Segment mit vorberechneten Hermite-Gewichten aus.
fn interpolate_weighted(
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    weights: DVec4,
    tension: f64,
) -> Point2D {
    let gx = DVec4::new(
        p1.x,
        p2.x,
        tension * (p2.x - p0.x),
        tension * (p3.x - p1.x),
    );
    let gy = DVec4::new(
        p1.y,
        p2.y,
        tension * (p2.y - p0.y),
        tension * (p3.y - p1.y),
    );
    DVec2::new(weights.dot(gx), weights.dot(gy))
}

/// Berechnet einen Punkt auf dem Cardinal-Segment zwischen `p1` und `p2` (u ∈ [0, 1]).
///
/// `tension` skaliert die Differenzen-Tangenten `p2 - p0` bzw. `p3 - p1`
/// multiplikativ. Jeder endliche Wert ist erlaubt, negative Werte kehren
/// die Tangenten um.
pub fn interpolate(
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    u: f64,
    tension: f64,
) -> Point2D {
    interpolate_weighted(p0, p1, p2, p3, hermite_weights(u), tension)
}

/// Tastet die Kurve durch alle Kontrollpunkte ab.
///
/// Erster und letzter Punkt werden als Phantom-Punkte dupliziert, damit auch
/// die Randpunkte interpoliert werden. Jedes der `n - 1` Fenster liefert genau
/// `grain + 1` Samples bei `u = k / grain`. Ein einzelner Punkt wird
/// unverändert zurückgegeben, eine leere Eingabe ergibt eine leere Kurve.
pub fn sample_curve(points: &[Point2D], params: &InterpolationParams) -> Vec<Point2D> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if points.len() == 1 {
        return vec![first];
    }

    let grain = params.grain() as usize;
    let weights: Vec<DVec4> = (0..=grain)
        .map(|k| hermite_weights(k as f64 / grain as f64))
        .collect();

    let mut padded = Vec::with_capacity(points.len() + 2);
    padded.push(first);
    padded.extend_from_slice(points);
    padded.push(last);

    let mut result = Vec::with_capacity((points.len() - 1) * (grain + 1));
    for window in padded.windows(4) {
        for &w in &weights {
            result.push(interpolate_weighted(
                window[0],
                window[1],
                window[2],
                window[3],
                w,
                params.tension(),
            ));
        }
    }
    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Point2D]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
