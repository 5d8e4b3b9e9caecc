//! Handler für Selektions-Operationen aus Sidebar und Shortcuts.

use crate::app::ViewerState;

/// Selektiert einen Raum direkt über seine IDs (Sidebar-Klick).
pub fn select_room(state: &mut ViewerState, floor_id: &str, room_id: &str) {
    state.store.select(floor_id, room_id);
}

/// Hovert einen Raum direkt über seine IDs (Sidebar-Hover).
pub fn hover_room(state: &mut ViewerState, floor_id: &str, room_id: &str) {
    state.store.hover(floor_id, room_id);
}

/// Beendet den Hover.
pub fn clear_hover(state: &mut ViewerState) {
    state.store.clear_hover();
}

/// Hebt die aktuelle Selektion auf.
pub fn clear_selection(state: &mut ViewerState) {
    state.store.clear_selection();
}
