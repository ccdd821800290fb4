//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::surface::CanvasSurface;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn CanvasSurface,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, surface, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn CanvasSurface,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::AddElement { kind } => handlers::editing::add_element(state, surface, kind),
            AppCommand::AddPipeline => handlers::editing::add_pipeline(state, surface),
            AppCommand::DeleteAt {
                position,
                hit_distance,
            } => handlers::editing::delete_at(state, surface, position, hit_distance),
            AppCommand::ToggleSwitch { element_id } => {
                handlers::editing::toggle_switch(state, surface, element_id)
            }

            // === Interaktion ===
            AppCommand::BeginDrag {
                position,
                hit_distance,
            } => handlers::interaction::begin_drag(state, surface, position, hit_distance),
            AppCommand::DragTo { position } => {
                handlers::interaction::drag_to(state, surface, position)
            }
            AppCommand::EndDrag => handlers::interaction::end_drag(state),

            // === Simulation ===
            AppCommand::RunPropagation { tolerance } => {
                handlers::flow::run_propagation(state, surface, tolerance)
            }
        }

        Ok(())
    }
}
