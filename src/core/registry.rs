//! Die zentrale FloorRegistry: unveränderlicher Katalog aller Etagen und Räume.
//!
//! Die Registry wird pro Ladevorgang vollständig neu aufgebaut und beim
//! Neuladen als Ganzes ersetzt (Arc-Swap im SelectionStore) — nie in-place
//! mutiert. Der Geometrie-Reverse-Index wird beim Aufbau miterzeugt, damit
//! keine Geometrie-Objekte live auf Räume zeigen.

use super::{Floor, GeometryHandle, Room, RoomRef};
use crate::data::RawHotelData;
use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

/// Fehler beim Registry-Aufbau aus Rohdaten.
///
/// Fatal nur für diesen Ladevorgang: der Aufrufer behält die vorherige
/// Registry, der Prozess läuft weiter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedDataError {
    /// Zwei Etagen mit derselben ID
    #[error("Etagen-ID doppelt vergeben: {0}")]
    DuplicateFloor(String),
    /// Zwei Räume mit derselben ID auf einer Etage
    #[error("Raum-ID doppelt vergeben auf Etage {floor_id}: {room_id}")]
    DuplicateRoom { floor_id: String, room_id: String },
    /// Raum referenziert eine Etage, die in den Rohdaten nicht existiert
    #[error("Raum {room_id} referenziert unbekannte Etage {floor_id}")]
    UnknownFloor { floor_id: String, room_id: String },
    /// Zwei Räume teilen sich dasselbe Geometrie-Handle
    #[error("Geometrie-Handle doppelt vergeben: {handle} (Räume {first} und {second})")]
    DuplicateGeometry {
        handle: GeometryHandle,
        first: RoomRef,
        second: RoomRef,
    },
}

/// Unveränderlicher Katalog aller Etagen, Räume und Geometrie-Handles.
#[derive(Debug, Clone, Default)]
pub struct FloorRegistry {
    /// Alle Etagen in Eingabe-Reihenfolge, indexiert nach ID
    floors: IndexMap<String, Floor>,
    /// Alle Räume, indexiert nach (floor_id, room_id) für O(1)-Zugriff
    rooms: HashMap<(String, String), Room>,
    /// Reverse-Index Geometrie-Handle → Raum-Referenz
    geometry_index: HashMap<GeometryHandle, RoomRef>,
}

impl FloorRegistry {
    /// Baut eine Registry aus Rohdaten des Daten-Collaborators auf.
    ///
    /// Validiert ID-Eindeutigkeit und Etagen-Referenzen; die Raum-Reihenfolge
    /// pro Etage entspricht der Reihenfolge in `data.rooms`.
    pub fn load(data: &RawHotelData) -> Result<Self, MalformedDataError> {
        let mut floors: IndexMap<String, Floor> = IndexMap::with_capacity(data.floors.len());
        for raw_floor in &data.floors {
            let floor = Floor::new(
                raw_floor.id.clone(),
                raw_floor.label.clone(),
                raw_floor.scene_ref.clone(),
            );
            if floors.insert(raw_floor.id.clone(), floor).is_some() {
                return Err(MalformedDataError::DuplicateFloor(raw_floor.id.clone()));
            }
        }

        let mut rooms: HashMap<(String, String), Room> = HashMap::with_capacity(data.rooms.len());
        let mut geometry_index: HashMap<GeometryHandle, RoomRef> =
            HashMap::with_capacity(data.rooms.len());

        for raw_room in &data.rooms {
            let Some(floor) = floors.get_mut(&raw_room.floor) else {
                return Err(MalformedDataError::UnknownFloor {
                    floor_id: raw_room.floor.clone(),
                    room_id: raw_room.id.clone(),
                });
            };

            let key = (raw_room.floor.clone(), raw_room.id.clone());
            if rooms.contains_key(&key) {
                return Err(MalformedDataError::DuplicateRoom {
                    floor_id: raw_room.floor.clone(),
                    room_id: raw_room.id.clone(),
                });
            }

            let handle = GeometryHandle::new(raw_room.geometry.clone());
            let room_ref = RoomRef::new(raw_room.floor.clone(), raw_room.id.clone());
            if let Some(existing) = geometry_index.get(&handle) {
                return Err(MalformedDataError::DuplicateGeometry {
                    handle,
                    first: existing.clone(),
                    second: room_ref,
                });
            }

            floor.room_ids.push(raw_room.id.clone());
            geometry_index.insert(handle.clone(), room_ref);
            rooms.insert(
                key,
                Room {
                    id: raw_room.id.clone(),
                    floor_id: raw_room.floor.clone(),
                    label: raw_room.label.clone(),
                    attributes: raw_room.attributes.clone(),
                    geometry: handle,
                },
            );
        }

        Ok(Self {
            floors,
            rooms,
            geometry_index,
        })
    }

    /// Findet eine Etage nach ID.
    pub fn floor(&self, floor_id: &str) -> Option<&Floor> {
        self.floors.get(floor_id)
    }

    /// Findet einen Raum nach (Etagen-ID, Raum-ID) — O(1).
    pub fn room(&self, floor_id: &str, room_id: &str) -> Option<&Room> {
        self.rooms
            .get(&(floor_id.to_string(), room_id.to_string()))
    }

    /// Prüft ob ein Raum existiert — O(1).
    pub fn contains_room(&self, floor_id: &str, room_id: &str) -> bool {
        self.room(floor_id, room_id).is_some()
    }

    /// Gibt die Räume einer Etage in Eingabe-Reihenfolge zurück.
    ///
    /// Unbekannte Etagen-IDs liefern eine leere Liste.
    pub fn rooms_by_floor(&self, floor_id: &str) -> Vec<&Room> {
        let Some(floor) = self.floors.get(floor_id) else {
            return Vec::new();
        };
        floor
            .room_ids
            .iter()
            .filter_map(|room_id| self.room(floor_id, room_id))
            .collect()
    }

    /// Löst ein Geometrie-Handle in die besitzende Raum-Referenz auf.
    pub fn room_by_geometry(&self, handle: &GeometryHandle) -> Option<&RoomRef> {
        self.geometry_index.get(handle)
    }

    /// Iterator über alle Etagen in Eingabe-Reihenfolge.
    pub fn floors(&self) -> impl Iterator<Item = &Floor> {
        self.floors.values()
    }

    /// Gibt die Anzahl der Etagen zurück.
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Gibt die Gesamtzahl der Räume zurück.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
