//! Editor State: zentrale Datenhaltung.
//!
//! Ein einzelner `EditorState` wird von genau einem Event-Loop-Thread
//! mutiert; alle Operationen laufen synchron bis zum Ende durch.

mod app_state;
mod editor;

pub use app_state::EditorState;
pub use editor::{EditMode, EditSession};
