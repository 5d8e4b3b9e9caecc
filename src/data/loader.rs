//! Parser für die vom Daten-Collaborator gelieferten Hoteldaten (JSON).
//!
//! Das Schema gehört dem Collaborator; hier wird nur das deserialisiert, was
//! die Registry braucht: Etagenliste, flache Raumliste mit Etagen-Referenz
//! (die Reihenfolge in `rooms` definiert die Raum-Reihenfolge pro Etage),
//! Attribut-Map und Geometrie-Handle pro Raum.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// Vollständige Rohdaten eines Hotels.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHotelData {
    /// Hotelname (optional, nur Anzeige)
    #[serde(default)]
    pub hotel_name: Option<String>,
    /// Alle Etagen in Anzeige-Reihenfolge
    pub floors: Vec<RawFloor>,
    /// Alle Räume; die Reihenfolge definiert die Sidebar-Reihenfolge pro Etage
    pub rooms: Vec<RawRoom>,
}

/// Rohdaten einer Etage.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFloor {
    /// Stabile Etagen-ID
    pub id: String,
    /// Anzeigename
    pub label: String,
    /// Opake Szenen-Referenz des Renderers
    #[serde(default)]
    pub scene_ref: Option<String>,
}

/// Rohdaten eines Raums.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoom {
    /// Raum-ID, eindeutig innerhalb der Etage
    pub id: String,
    /// ID der zugehörigen Etage
    pub floor: String,
    /// Anzeigename
    pub label: String,
    /// Offene Attribut-Menge (status, capacity, type, …)
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    /// Geometrie-Handle des pickbaren Meshes
    pub geometry: String,
}

/// Parsed Hoteldaten aus einem JSON-String.
pub fn parse_hotel_data(json: &str) -> Result<RawHotelData> {
    serde_json::from_str(json).context("Hoteldaten konnten nicht geparst werden")
}
