//! ViewBinding: vermittelt zwischen SelectionStore und der 3D-Szene.

use crate::app::selection::{SelectionListener, SelectionState};
use crate::core::{FloorRegistry, GeometryHandle, GeometryPick, RoomRef};

/// Visuelle Behandlung eines Highlights.
///
/// Hover und Selektion werden unterschiedlich gerendert; ein Sink darf beide
/// gleich behandeln, verliert dabei aber nur die Abstufung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// Transientes Hover-Highlight
    Hovered,
    /// Committete Selektion
    Selected,
}

/// Highlight-Ausgang zum Rendering-Collaborator.
///
/// Der Viewer-Kern besitzt keine Meshes oder Materialien; er gibt nur
/// Kommandos pro Geometrie-Handle aus.
pub trait HighlightSink {
    /// Setzt das Highlight für ein Handle.
    fn apply_highlight(&mut self, handle: &GeometryHandle, kind: HighlightKind);
    /// Entfernt das Highlight eines Handles.
    fn clear_highlight(&mut self, handle: &GeometryHandle);
}

/// Sink der alle Highlight-Kommandos verwirft (Headless-Betrieb und Tests).
#[derive(Debug, Default)]
pub struct NullHighlightSink;

impl HighlightSink for NullHighlightSink {
    fn apply_highlight(&mut self, _handle: &GeometryHandle, _kind: HighlightKind) {}
    fn clear_highlight(&mut self, _handle: &GeometryHandle) {}
}

/// Bindung zwischen SelectionStore und 3D-Szene.
///
/// Löst Picks über den Reverse-Index der Registry in Raum-Referenzen auf und
/// spiegelt Selektionsänderungen als Highlight-Kommandos in die Szene.
pub struct ViewBinding {
    /// Highlight-Ausgang (Rendering-Collaborator)
    sink: Box<dyn HighlightSink>,
    /// Zuletzt angewendetes Highlight (Idempotenz-Cache)
    applied: Option<(GeometryHandle, HighlightKind)>,
}

impl ViewBinding {
    /// Erstellt eine Bindung mit dem übergebenen Highlight-Ausgang.
    pub fn new(sink: Box<dyn HighlightSink>) -> Self {
        Self {
            sink,
            applied: None,
        }
    }

    /// Löst ein Pick-Ereignis in die besitzende Raum-Referenz auf.
    ///
    /// Nicht auflösbare Handles (Strukturelement, oder stale nach Neuladen)
    /// werden geloggt und ignoriert — Reload-Races sind erwartbar, kein
    /// harter Fehler.
    pub fn resolve_pick(&self, registry: &FloorRegistry, pick: &GeometryPick) -> Option<RoomRef> {
        match registry.room_by_geometry(&pick.handle) {
            Some(room_ref) => Some(room_ref.clone()),
            None => {
                log::debug!(
                    "Pick auf nicht auflösbares Geometrie-Handle {} bei {} ignoriert",
                    pick.handle,
                    pick.world_pos
                );
                None
            }
        }
    }

    /// Gibt das aktuell angewendete Highlight zurück (für Tests und Debug-UI).
    pub fn applied_highlight(&self) -> Option<&(GeometryHandle, HighlightKind)> {
        self.applied.as_ref()
    }

    /// Berechnet das gewünschte Highlight für einen Anzeigezustand.
    fn desired_highlight(
        &self,
        registry: &FloorRegistry,
        state: &SelectionState,
    ) -> Option<(GeometryHandle, HighlightKind)> {
        let (room_ref, kind) = match state {
            SelectionState::Empty => return None,
            SelectionState::Hovered(room_ref) => (room_ref, HighlightKind::Hovered),
            SelectionState::Selected(room_ref) => (room_ref, HighlightKind::Selected),
        };
        match registry.room(&room_ref.floor_id, &room_ref.room_id) {
            Some(room) => Some((room.geometry.clone(), kind)),
            None => {
                // Selektion hat ihre Registry überlebt (Race beim Neuladen).
                log::warn!("Stale Raum-Referenz {room_ref} ohne Geometrie — Highlight entfällt");
                None
            }
        }
    }
}

impl SelectionListener for ViewBinding {
    /// Wendet den Highlight-Diff auf die Szene an.
    ///
    /// Idempotent: derselbe Zustand zweimal erzeugt keine weiteren
    /// Sink-Aufrufe; das alte Highlight wird pro Wechsel genau einmal
    /// entfernt (kein Doppel-Toggle).
    fn selection_changed(&mut self, registry: &FloorRegistry, state: &SelectionState) {
        let desired = self.desired_highlight(registry, state);
        if desired == self.applied {
            return;
        }
        if let Some((old_handle, _)) = self.applied.take() {
            self.sink.clear_highlight(&old_handle);
        }
        if let Some((handle, kind)) = &desired {
            self.sink.apply_highlight(handle, *kind);
        }
        self.applied = desired;
    }
}
