//! Curve Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{CurveCommand, CurveIntent, EditorState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den EditorState.
#[derive(Default)]
pub struct CurveController;

impl CurveController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: CurveIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &EditorState, intent: CurveIntent) -> Vec<CurveCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: CurveCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Kontrollpunkte ===
            CurveCommand::AppendPoint { pos } => handlers::editing::append_point(state, pos),
            CurveCommand::BeginMovePoint { pos } => handlers::editing::begin_move(state, pos),
            CurveCommand::InsertPoint { pos } => handlers::editing::insert_point(state, pos),
            CurveCommand::DragActivePoint { pos } => handlers::editing::drag(state, pos),
            CurveCommand::ReleaseActivePoint => handlers::editing::release(state),
            CurveCommand::CancelEdit => handlers::editing::cancel(state),
            CurveCommand::DeleteActivePoint => handlers::editing::delete_active(state),
            CurveCommand::ClearCurve => handlers::editing::clear(state),

            // === Parameter ===
            CurveCommand::SetTension { tension } => handlers::params::set_tension(state, tension)?,
            CurveCommand::SetGrain { grain } => handlers::params::set_grain(state, grain)?,

            // === Darstellung ===
            CurveCommand::ScaleCurve { scale_x, scale_y } => {
                handlers::view::scale(state, scale_x, scale_y)?
            }
            CurveCommand::SetDisplayMode { mode } => handlers::view::set_display_mode(state, mode),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen EditorState.
    pub fn build_render_scene(&self, state: &EditorState) -> RenderScene {
        render_scene::build(state)
    }
}
