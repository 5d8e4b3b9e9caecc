//! Handler für Pick- und Hover-Ereignisse aus der 3D-Szene.

use crate::app::ViewerState;
use crate::core::{GeometryHandle, GeometryPick};

/// Löst einen Pick auf und selektiert den getroffenen Raum.
///
/// Nicht auflösbare Picks (Strukturelement, stale Handle nach Neuladen)
/// werden ignoriert; das Auflösen selbst loggt den Fall.
pub fn resolve_and_select(state: &mut ViewerState, pick: GeometryPick) {
    let Some(registry) = state.store.registry().cloned() else {
        return;
    };
    let resolved = state.view.borrow().resolve_pick(&registry, &pick);
    if let Some(room_ref) = resolved {
        state.store.select(&room_ref.floor_id, &room_ref.room_id);
    }
}

/// Löst ein Hover-Handle auf und hovert den zugehörigen Raum.
///
/// Verlässt der Zeiger die Raum-Geometrie in Richtung eines
/// Strukturelements, wird der Hover beendet statt stehenzulassen.
pub fn resolve_and_hover(state: &mut ViewerState, handle: GeometryHandle) {
    let Some(registry) = state.store.registry().cloned() else {
        return;
    };
    match registry.room_by_geometry(&handle) {
        Some(room_ref) => {
            let room_ref = room_ref.clone();
            state.store.hover(&room_ref.floor_id, &room_ref.room_id);
        }
        None => {
            log::debug!("Hover auf nicht auflösbares Geometrie-Handle {handle}");
            state.store.clear_hover();
        }
    }
}
