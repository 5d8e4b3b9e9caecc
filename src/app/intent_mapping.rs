//! Mapping von UI-/Szenen-Intents auf mutierende Viewer-Commands.

use super::{ViewerCommand, ViewerIntent, ViewerState};

/// Übersetzt einen `ViewerIntent` in eine Sequenz ausführbarer `ViewerCommand`s.
pub fn map_intent_to_commands(state: &ViewerState, intent: ViewerIntent) -> Vec<ViewerCommand> {
    match intent {
        ViewerIntent::HotelDataProvided { json } => vec![ViewerCommand::LoadHotelData { json }],
        ViewerIntent::HotelFileSelected { path } => vec![ViewerCommand::LoadHotelFile { path }],
        ViewerIntent::GeometryPicked { pick } => {
            vec![ViewerCommand::ResolvePickAndSelect { pick }]
        }
        ViewerIntent::GeometryHoverMoved { handle } => {
            // Hover auf bereits gehoverte Geometrie erzeugt keinen Command —
            // der Store würde den Übergang ohnehin als No-op verwerfen, aber
            // so bleibt das Command-Log frei von Pointer-Rauschen.
            if let (Some(registry), Some(hovered)) = (state.registry(), state.store.hovered()) {
                if registry.room_by_geometry(&handle) == Some(hovered) {
                    return Vec::new();
                }
            }
            vec![ViewerCommand::ResolveHover { handle }]
        }
        ViewerIntent::PointerLeftScene => vec![ViewerCommand::ClearHover],
        ViewerIntent::SidebarRoomClicked { floor_id, room_id } => {
            vec![ViewerCommand::SelectRoom { floor_id, room_id }]
        }
        ViewerIntent::SidebarRoomHovered { floor_id, room_id } => {
            vec![ViewerCommand::HoverRoom { floor_id, room_id }]
        }
        ViewerIntent::ClearSelectionRequested => vec![ViewerCommand::ClearSelection],
    }
}
