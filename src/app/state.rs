//! Viewer State — zentrale Datenhaltung einer View-Session.

use super::bindings::{HighlightSink, NullHighlightSink, PanelBinding, SidebarEntry, ViewBinding};
use super::selection::SelectionStore;
use super::CommandLog;
use crate::core::FloorRegistry;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Hauptzustand einer Viewer-Session.
///
/// Der SelectionStore besitzt die aktive Registry; ViewBinding und
/// PanelBinding sind als Listener registriert und bleiben dadurch symmetrisch
/// synchron — sowohl 3D-Picks als auch Sidebar-Klicks laufen über denselben
/// Store.
pub struct ViewerState {
    /// Selektions-Zustandsmaschine inkl. aktiver Registry
    pub store: SelectionStore,
    /// Bindung zur 3D-Szene (Pick-Auflösung, Highlights)
    pub view: Rc<RefCell<ViewBinding>>,
    /// Bindung zu Detail-Panel und Sidebar
    pub panel: Rc<RefCell<PanelBinding>>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Hotelname aus den zuletzt geladenen Rohdaten
    pub hotel_name: Option<String>,
}

impl ViewerState {
    /// Erstellt eine Session ohne Highlight-Ausgang (Headless/Tests).
    pub fn new() -> Self {
        Self::with_sink(Box::new(NullHighlightSink))
    }

    /// Erstellt eine Session mit dem Highlight-Ausgang des Renderers.
    pub fn with_sink(sink: Box<dyn HighlightSink>) -> Self {
        let mut store = SelectionStore::new();
        let view = Rc::new(RefCell::new(ViewBinding::new(sink)));
        let panel = Rc::new(RefCell::new(PanelBinding::new()));
        store.subscribe(view.clone());
        store.subscribe(panel.clone());
        Self {
            store,
            view,
            panel,
            command_log: CommandLog::new(),
            hotel_name: None,
        }
    }

    /// Gibt die aktive Registry zurück (None = noch keine Daten geladen).
    pub fn registry(&self) -> Option<&Arc<FloorRegistry>> {
        self.store.registry()
    }

    /// Gibt die Anzahl der Etagen zurück (für UI-Anzeige).
    pub fn floor_count(&self) -> usize {
        self.registry().map_or(0, |registry| registry.floor_count())
    }

    /// Gibt die Gesamtzahl der Räume zurück (für UI-Anzeige).
    pub fn room_count(&self) -> usize {
        self.registry().map_or(0, |registry| registry.room_count())
    }

    /// Berechnet die Sidebar-Raumliste einer Etage (pull-basiert).
    pub fn sidebar_entries(&self, floor_id: &str) -> Vec<SidebarEntry> {
        let Some(registry) = self.registry() else {
            return Vec::new();
        };
        PanelBinding::list_sidebar_entries(registry, &self.store.state(), floor_id)
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}
