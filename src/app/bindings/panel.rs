//! PanelBinding: vermittelt zwischen SelectionStore und Detail-Panel/Sidebar.

use crate::app::selection::{SelectionListener, SelectionState};
use crate::core::{FloorRegistry, Room, RoomRef};

/// Anzeigedaten eines Raums für das Detail-Panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCard {
    /// ID der Etage
    pub floor_id: String,
    /// ID des Raums
    pub room_id: String,
    /// Anzeigename des Raums
    pub label: String,
    /// Anzeigename der Etage
    pub floor_label: String,
    /// Attribute in Eingabe-Reihenfolge
    pub attributes: Vec<(String, String)>,
}

impl RoomCard {
    fn from_room(registry: &FloorRegistry, room: &Room) -> Self {
        let floor_label = registry
            .floor(&room.floor_id)
            .map(|floor| floor.label.clone())
            .unwrap_or_default();
        Self {
            floor_id: room.floor_id.clone(),
            room_id: room.id.clone(),
            label: room.label.clone(),
            floor_label,
            attributes: room
                .attributes
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }
}

/// Inhalt des Detail-Panels, abgeleitet aus dem Anzeigezustand.
///
/// Selektion gewinnt über Hover: `Preview` erscheint nur ohne bestehende
/// Selektion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelContent {
    /// Kein Raum aktiv — Panel leer
    #[default]
    Empty,
    /// Leichtgewichtige Vorschau beim Hovern
    Preview(RoomCard),
    /// Volle Detailansicht der committeten Selektion
    Details(RoomCard),
}

/// Eintrag der Sidebar-Raumliste einer Etage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// ID des Raums
    pub room_id: String,
    /// Anzeigename
    pub label: String,
    /// Ob der Raum die aktuelle Selektion ist (Hover zählt nicht)
    pub is_selected: bool,
}

/// Bindung zwischen SelectionStore und den UI-Flächen.
///
/// Hält keinen eigenen fachlichen Zustand: der Panel-Inhalt wird bei jeder
/// Änderung vollständig neu abgeleitet, die Sidebar-Liste wird pull-basiert
/// berechnet und kann deshalb nie von der Quelle abdriften.
#[derive(Default)]
pub struct PanelBinding {
    content: PanelContent,
}

impl PanelBinding {
    /// Erstellt eine Bindung mit leerem Panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt den aktuellen Panel-Inhalt zurück.
    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    /// Berechnet die Sidebar-Raumliste einer Etage.
    ///
    /// Reihenfolge entspricht der Eingabe-Reihenfolge der Rohdaten;
    /// `is_selected` markiert ausschließlich die committete Selektion.
    pub fn list_sidebar_entries(
        registry: &FloorRegistry,
        state: &SelectionState,
        floor_id: &str,
    ) -> Vec<SidebarEntry> {
        let selected: Option<&RoomRef> = match state {
            SelectionState::Selected(room_ref) => Some(room_ref),
            _ => None,
        };
        registry
            .rooms_by_floor(floor_id)
            .into_iter()
            .map(|room| SidebarEntry {
                room_id: room.id.clone(),
                label: room.label.clone(),
                is_selected: selected
                    .is_some_and(|sel| sel.floor_id == room.floor_id && sel.room_id == room.id),
            })
            .collect()
    }

    fn card_for(registry: &FloorRegistry, room_ref: &RoomRef) -> Option<RoomCard> {
        match registry.room(&room_ref.floor_id, &room_ref.room_id) {
            Some(room) => Some(RoomCard::from_room(registry, room)),
            None => {
                log::warn!("Stale Raum-Referenz {room_ref} im Panel — Inhalt wird geleert");
                None
            }
        }
    }
}

impl SelectionListener for PanelBinding {
    fn selection_changed(&mut self, registry: &FloorRegistry, state: &SelectionState) {
        self.content = match state {
            SelectionState::Empty => PanelContent::Empty,
            SelectionState::Hovered(room_ref) => Self::card_for(registry, room_ref)
                .map(PanelContent::Preview)
                .unwrap_or_default(),
            SelectionState::Selected(room_ref) => Self::card_for(registry, room_ref)
                .map(PanelContent::Details)
                .unwrap_or_default(),
        };
    }
}
