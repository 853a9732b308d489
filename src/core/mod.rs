//! Core-Domänentypen: Kontrollpunkt-Sequenz und Treffer-Suche.

pub mod control_points;
pub mod picking;

pub use control_points::ControlPoints;
pub use picking::PickMatch;
