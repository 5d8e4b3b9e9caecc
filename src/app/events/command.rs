use crate::core::{GeometryHandle, GeometryPick};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum ViewerCommand {
    /// Hoteldaten aus JSON-String laden und Registry ersetzen
    LoadHotelData { json: String },
    /// Hoteldaten-Datei laden und Registry ersetzen
    LoadHotelFile { path: String },
    /// Pick auflösen und aufgelösten Raum selektieren
    ResolvePickAndSelect { pick: GeometryPick },
    /// Hover-Handle auflösen und aufgelösten Raum hovern
    ResolveHover { handle: GeometryHandle },
    /// Raum direkt selektieren (Sidebar kennt die IDs bereits)
    SelectRoom { floor_id: String, room_id: String },
    /// Raum direkt hovern
    HoverRoom { floor_id: String, room_id: String },
    /// Hover beenden
    ClearHover,
    /// Selektion aufheben
    ClearSelection,
}
