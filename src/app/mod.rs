//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Editor State
///
/// Dieses Modul verwaltet Kontrollpunkte, Parameter und die laufende Geste.
pub mod state;
pub mod use_cases;

pub use controller::CurveController;
pub use events::{CurveCommand, CurveIntent};
pub use render_scene::build as build_render_scene;
pub use state::{EditMode, EditSession, EditorState};
