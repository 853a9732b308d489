//! Cardinal Spline Editor Library.
//! Spline-Interpolation und Kontrollpunkt-Editor als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{CurveCommand, CurveController, CurveIntent, EditMode, EditSession, EditorState};
pub use core::{ControlPoints, PickMatch};
pub use shared::spline_geometry::{interpolate, polyline_length, sample_curve};
pub use shared::{DisplayMode, EditorError, EditorOptions, InterpolationParams, Point2D, RenderScene};
