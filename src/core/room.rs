use indexmap::IndexMap;

/// Opakes Handle auf ein pickbares 3D-Mesh.
///
/// Wird vom Rendering-Collaborator vergeben und hier nur als Schlüssel
/// verwendet — nie dereferenziert oder interpretiert.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeometryHandle(pub String);

impl GeometryHandle {
    /// Erstellt ein Handle aus einem beliebigen String-Wert.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Gibt den rohen Handle-Wert zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GeometryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transientes Pick-Ereignis aus der 3D-Szene.
///
/// Wird genau einmal von `ViewBinding::resolve_pick` konsumiert und danach
/// verworfen; die Koordinaten dienen nur der Diagnose.
#[derive(Debug, Clone)]
pub struct GeometryPick {
    /// Geometrie-Handle des getroffenen Meshes
    pub handle: GeometryHandle,
    /// Trefferpunkt in Weltkoordinaten
    pub world_pos: glam::Vec3,
}

impl GeometryPick {
    /// Erstellt ein Pick-Ereignis.
    pub fn new(handle: GeometryHandle, world_pos: glam::Vec3) -> Self {
        Self { handle, world_pos }
    }
}

/// Referenz auf einen Raum als (Etagen-ID, Raum-ID)-Paar.
///
/// Invariante für committete Referenzen: beide IDs existieren in der aktuell
/// aktiven Registry und der Raum gehört zu genau dieser Etage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomRef {
    /// ID der Etage
    pub floor_id: String,
    /// ID des Raums innerhalb der Etage
    pub room_id: String,
}

impl RoomRef {
    /// Erstellt eine Raum-Referenz.
    pub fn new(floor_id: impl Into<String>, room_id: impl Into<String>) -> Self {
        Self {
            floor_id: floor_id.into(),
            room_id: room_id.into(),
        }
    }
}

impl std::fmt::Display for RoomRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.floor_id, self.room_id)
    }
}

/// Selektierbare Einheit innerhalb einer Etage.
#[derive(Debug, Clone)]
pub struct Room {
    /// ID, eindeutig innerhalb der Etage
    pub id: String,
    /// ID der zugehörigen Etage
    pub floor_id: String,
    /// Anzeigename für Panel und Sidebar
    pub label: String,
    /// Offene Attribut-Menge (Status, Kapazität, Typ, …), Eingabe-Reihenfolge bleibt erhalten
    pub attributes: IndexMap<String, String>,
    /// Geometrie-Handle des zugehörigen Meshes
    pub geometry: GeometryHandle,
}

impl Room {
    /// Gibt die Referenz dieses Raums zurück.
    pub fn room_ref(&self) -> RoomRef {
        RoomRef::new(self.floor_id.clone(), self.id.clone())
    }

    /// Liest ein einzelnes Attribut (falls vorhanden).
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
