//! SelectionStore: Zustandsmaschine für Hover und Selektion.
//!
//! Genau ein Besitzer pro Session, alle Übergänge laufen auf dem
//! UI-Thread. Listener werden synchron nach jedem committeten Übergang in
//! Registrierungs-Reihenfolge aufgerufen.
//!
//! Hover und Selektion werden unabhängig geführt; für die Anzeige gewinnt
//! eine bestehende Selektion immer über Hover.

use crate::core::{FloorRegistry, RoomRef};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Anzeigezustand der Selektion, wie ihn Listener erhalten.
///
/// `Selected` gewinnt über `Hovered`: solange eine Selektion besteht, wird
/// ein unabhängig geführter Hover hier nicht sichtbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// Ruhezustand: weder Hover noch Selektion
    Empty,
    /// Zeiger über einem Raum, keine committete Selektion
    Hovered(RoomRef),
    /// Committete Selektion (höchstens eine pro Session)
    Selected(RoomRef),
}

/// Handle einer Listener-Registrierung (für idempotentes Abmelden).
pub type ListenerId = u64;

/// Empfänger für Selektionsänderungen (ViewBinding, PanelBinding, …).
pub trait SelectionListener {
    /// Wird synchron nach jedem committeten Übergang aufgerufen.
    ///
    /// `registry` ist die zum Zeitpunkt des Übergangs aktive Registry;
    /// `state` der neue Anzeigezustand.
    fn selection_changed(&mut self, registry: &FloorRegistry, state: &SelectionState);
}

/// Zustandsmaschine für die aktuell gehoverte/selektierte Raum-Referenz.
///
/// Wird als explizites Objekt in die Bindings injiziert statt als globaler
/// Zustand; mehrere unabhängige Viewer-Instanzen bleiben möglich.
#[derive(Default)]
pub struct SelectionStore {
    /// Aktive Registry (None = noch keine Daten geladen)
    registry: Option<Arc<FloorRegistry>>,
    /// Committete Selektion
    selected: Option<RoomRef>,
    /// Transienter Hover-Zustand
    hovered: Option<RoomRef>,
    /// Listener in Registrierungs-Reihenfolge
    listeners: Vec<(ListenerId, Rc<RefCell<dyn SelectionListener>>)>,
    /// Nächste zu vergebende Listener-ID (auto-increment)
    next_listener_id: ListenerId,
}

impl SelectionStore {
    /// Erstellt einen leeren Store ohne Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt die aktive Registry zurück (falls geladen).
    pub fn registry(&self) -> Option<&Arc<FloorRegistry>> {
        self.registry.as_ref()
    }

    /// Ersetzt die Registry atomar (Last-Writer-Wins beim Neuladen).
    ///
    /// Hover und Selektion werden vor der Benachrichtigung gelöscht, damit
    /// kein Listener je einen Zustand gegen eine nicht mehr aktuelle
    /// Registry beobachtet. Listener werden immer benachrichtigt, auch wenn
    /// der Anzeigezustand schon `Empty` war: Panel- und Highlight-Caches
    /// müssen gegen die neuen Daten neu abgeleitet werden.
    pub fn replace_registry(&mut self, registry: Arc<FloorRegistry>) {
        if let Some(stale) = self.selected.take() {
            log::info!("Selektion {stale} nach Registry-Neuladen zurückgesetzt");
        }
        self.hovered = None;
        self.registry = Some(registry);
        self.notify_listeners();
    }

    /// Hovert einen Raum.
    ///
    /// Stiller No-op wenn der Raum in der aktiven Registry fehlt; das fängt
    /// verirrte Pointer-Events nach einem Neuladen ab.
    pub fn hover(&mut self, floor_id: &str, room_id: &str) -> bool {
        if !self.room_exists(floor_id, room_id) {
            log::debug!("Hover auf unbekannten Raum {floor_id}/{room_id} ignoriert");
            return false;
        }
        let target = RoomRef::new(floor_id, room_id);
        if self.hovered.as_ref() == Some(&target) {
            return false;
        }
        self.hovered = Some(target);
        self.notify_listeners();
        true
    }

    /// Committet eine Selektion.
    ///
    /// Gleicher Not-Found-Guard wie `hover`. Eine bestehende Selektion eines
    /// anderen Raums wird ersetzt (höchstens eine Selektion); der
    /// Hover-Zustand wird beim Commit gelöscht.
    pub fn select(&mut self, floor_id: &str, room_id: &str) -> bool {
        if !self.room_exists(floor_id, room_id) {
            log::debug!("Selektion auf unbekannten Raum {floor_id}/{room_id} ignoriert");
            return false;
        }
        let target = RoomRef::new(floor_id, room_id);
        if self.selected.as_ref() == Some(&target) && self.hovered.is_none() {
            return false;
        }
        self.selected = Some(target);
        self.hovered = None;
        self.notify_listeners();
        true
    }

    /// Beendet den Hover (Zeiger hat die Geometrie verlassen).
    /// Eine bestehende Selektion bleibt unberührt.
    pub fn clear_hover(&mut self) {
        if self.hovered.take().is_some() {
            self.notify_listeners();
        }
    }

    /// Hebt die Selektion auf.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.notify_listeners();
        }
    }

    /// Gibt die committete Selektion zurück.
    pub fn selected(&self) -> Option<&RoomRef> {
        self.selected.as_ref()
    }

    /// Gibt den unabhängig geführten Hover-Zustand zurück.
    pub fn hovered(&self) -> Option<&RoomRef> {
        self.hovered.as_ref()
    }

    /// Berechnet den Anzeigezustand (Selected > Hovered > Empty).
    pub fn state(&self) -> SelectionState {
        if let Some(selected) = &self.selected {
            SelectionState::Selected(selected.clone())
        } else if let Some(hovered) = &self.hovered {
            SelectionState::Hovered(hovered.clone())
        } else {
            SelectionState::Empty
        }
    }

    /// Registriert einen Listener und gibt sein Abmelde-Handle zurück.
    pub fn subscribe(&mut self, listener: Rc<RefCell<dyn SelectionListener>>) -> ListenerId {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Meldet einen Listener ab. Idempotent: unbekannte IDs sind ein No-op.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Gibt die Anzahl registrierter Listener zurück.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn room_exists(&self, floor_id: &str, room_id: &str) -> bool {
        self.registry
            .as_ref()
            .is_some_and(|registry| registry.contains_room(floor_id, room_id))
    }

    /// Benachrichtigt alle Listener synchron in Registrierungs-Reihenfolge.
    ///
    /// Die Listener-Liste wird vor dem Dispatch geklont, damit ein Listener
    /// den Store selbst nicht re-entrant mutieren muss.
    fn notify_listeners(&mut self) {
        let Some(registry) = self.registry.clone() else {
            return;
        };
        let state = self.state();
        let listeners: Vec<Rc<RefCell<dyn SelectionListener>>> = self
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener.borrow_mut().selection_changed(&registry, &state);
        }
    }
}
