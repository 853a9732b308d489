//! Eingabe-Adapter: übersetzt rohe Eingaben in `CurveIntent`s.

mod line_input;

pub use line_input::parse_line;
