/// Eine Etage des Gebäudes mit geordneter Raumliste.
#[derive(Debug, Clone)]
pub struct Floor {
    /// Stabile, eindeutige Etagen-ID
    pub id: String,
    /// Anzeigename (z.B. "Erdgeschoss")
    pub label: String,
    /// Opake Szenen-Referenz des Rendering-Collaborators (nicht hier besessen)
    pub scene_ref: Option<String>,
    /// Raum-IDs in Eingabe-Reihenfolge der Rohdaten
    pub room_ids: Vec<String>,
}

impl Floor {
    /// Erstellt eine Etage ohne Räume.
    ///
    /// Räume werden beim Registry-Aufbau in Eingabe-Reihenfolge angehängt.
    pub fn new(id: impl Into<String>, label: impl Into<String>, scene_ref: Option<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            scene_ref,
            room_ids: Vec::new(),
        }
    }

    /// Gibt die Anzahl der Räume dieser Etage zurück.
    pub fn room_count(&self) -> usize {
        self.room_ids.len()
    }
}
