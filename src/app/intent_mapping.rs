//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::ElementKind;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddSourceRequested => vec![AppCommand::AddElement {
            kind: ElementKind::Source,
        }],
        AppIntent::AddSwitchRequested => vec![AppCommand::AddElement {
            // Schalter starten immer geschlossen
            kind: ElementKind::Switch { is_open: false },
        }],
        AppIntent::AddConnectorRequested => vec![AppCommand::AddElement {
            kind: ElementKind::Connector,
        }],
        AppIntent::AddPipelineRequested => vec![AppCommand::AddPipeline],
        AppIntent::PrimaryPressed { position } => vec![AppCommand::BeginDrag {
            position,
            hit_distance: state.options.segment_hit_distance,
        }],
        AppIntent::DragMoved { position } => vec![AppCommand::DragTo { position }],
        AppIntent::Released => vec![AppCommand::EndDrag],
        AppIntent::SecondaryPressed { position } => vec![AppCommand::DeleteAt {
            position,
            hit_distance: state.options.segment_hit_distance,
        }],
        AppIntent::SwitchClicked { element_id } => vec![AppCommand::ToggleSwitch { element_id }],
        AppIntent::UpdateFlowRequested => vec![AppCommand::RunPropagation {
            tolerance: state.options.snap_tolerance,
        }],
    }
}
