//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Geometrie, Optionen und die Render-Szene, die zwischen `core`,
//! `app` und dem (externen) Renderer geteilt werden.

mod display_mode;
mod error;
pub mod options;
mod render_scene;
pub mod spline_geometry;

pub use display_mode::DisplayMode;
pub use error::EditorError;
pub use options::EditorOptions;
pub use options::{DEFAULT_GRAIN, DEFAULT_TENSION};
pub use render_scene::RenderScene;
pub use spline_geometry::{InterpolationParams, Point2D};
