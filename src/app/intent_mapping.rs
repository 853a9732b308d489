//! Mapping von UI-Intents auf mutierende Curve-Commands.

use super::{CurveCommand, CurveIntent, EditorState};

/// Übersetzt einen `CurveIntent` in eine Sequenz ausführbarer `CurveCommand`s.
pub fn map_intent_to_commands(_state: &EditorState, intent: CurveIntent) -> Vec<CurveCommand> {
    match intent {
        CurveIntent::PrimaryPressed { pos } => vec![CurveCommand::AppendPoint { pos }],
        CurveIntent::SecondaryPressed { pos } => vec![CurveCommand::BeginMovePoint { pos }],
        CurveIntent::TertiaryPressed { pos } => vec![CurveCommand::InsertPoint { pos }],
        CurveIntent::PointerDragged { pos } => vec![CurveCommand::DragActivePoint { pos }],
        CurveIntent::PointerReleased => vec![CurveCommand::ReleaseActivePoint],
        CurveIntent::EscapePressed => vec![CurveCommand::CancelEdit],
        CurveIntent::DeletePressed => vec![CurveCommand::DeleteActivePoint],
        CurveIntent::ClearRequested => vec![CurveCommand::ClearCurve],
        CurveIntent::TensionChanged { tension } => vec![CurveCommand::SetTension { tension }],
        CurveIntent::GrainChanged { grain } => vec![CurveCommand::SetGrain { grain }],
        CurveIntent::ViewportResized { old_size, new_size } => {
            // Skalierung = neu / alt; 0-Größen ergeben ∞/NaN und werden im Use-Case abgelehnt
            vec![CurveCommand::ScaleCurve {
                scale_x: new_size[0] / old_size[0],
                scale_y: new_size[1] / old_size[1],
            }]
        }
        CurveIntent::DisplayModeChanged { mode } => vec![CurveCommand::SetDisplayMode { mode }],
    }
}
