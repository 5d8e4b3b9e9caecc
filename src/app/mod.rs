//! Application-Layer: Controller, State, Events, Bindings und SelectionStore.

pub mod bindings;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// SelectionStore und Listener-Schnittstelle
///
/// Dieses Modul verwaltet die Zustandsmaschine für Hover/Selektion und die
/// synchrone, geordnete Listener-Benachrichtigung.
pub mod selection;
pub mod state;

pub use bindings::{
    HighlightKind, HighlightSink, NullHighlightSink, PanelBinding, PanelContent, RoomCard,
    SidebarEntry, ViewBinding,
};
pub use command_log::CommandLog;
pub use controller::ViewerController;
pub use events::{ViewerCommand, ViewerIntent};
pub use selection::{ListenerId, SelectionListener, SelectionState, SelectionStore};
pub use state::ViewerState;
