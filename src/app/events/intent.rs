use crate::core::{GeometryHandle, GeometryPick};

/// Viewer-Intent Events.
/// Intents sind Eingaben aus UI/Szene/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum ViewerIntent {
    /// Hoteldaten wurden vom Daten-Collaborator geliefert (JSON-String)
    HotelDataProvided { json: String },
    /// Hoteldaten-Datei wurde ausgewählt (Laden über Dateisystem)
    HotelFileSelected { path: String },
    /// Raum-Mesh wurde in der 3D-Szene angeklickt
    GeometryPicked { pick: GeometryPick },
    /// Zeiger bewegt sich über ein Mesh der 3D-Szene
    GeometryHoverMoved { handle: GeometryHandle },
    /// Zeiger hat die Szenen-Geometrie verlassen
    PointerLeftScene,
    /// Raum wurde in der Sidebar angeklickt
    SidebarRoomClicked { floor_id: String, room_id: String },
    /// Raum wird in der Sidebar gehovert
    SidebarRoomHovered { floor_id: String, room_id: String },
    /// Selektion aufheben (Escape, Klick ins Leere)
    ClearSelectionRequested,
}
