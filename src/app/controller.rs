//! Viewer Controller für zentrale Event-Verarbeitung.

use super::{ViewerCommand, ViewerIntent, ViewerState};

/// Orchestriert Szenen-/UI-Events und Handler auf den ViewerState.
#[derive(Default)]
pub struct ViewerController;

impl ViewerController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut ViewerState,
        intent: ViewerIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem ViewerState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut ViewerState,
        command: ViewerCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Daten-Laden ===
            ViewerCommand::LoadHotelData { json } => handlers::data::load_json(state, &json)?,
            ViewerCommand::LoadHotelFile { path } => handlers::data::load_file(state, path)?,

            // === Szene ===
            ViewerCommand::ResolvePickAndSelect { pick } => {
                handlers::picking::resolve_and_select(state, pick)
            }
            ViewerCommand::ResolveHover { handle } => {
                handlers::picking::resolve_and_hover(state, handle)
            }

            // === Selektion ===
            ViewerCommand::SelectRoom { floor_id, room_id } => {
                handlers::selection::select_room(state, &floor_id, &room_id)
            }
            ViewerCommand::HoverRoom { floor_id, room_id } => {
                handlers::selection::hover_room(state, &floor_id, &room_id)
            }
            ViewerCommand::ClearHover => handlers::selection::clear_hover(state),
            ViewerCommand::ClearSelection => handlers::selection::clear_selection(state),
        }

        Ok(())
    }
}
