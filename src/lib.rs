//! Hotel Floor Viewer Core.
//! Interaktions- und Zustandskern als Library exportiert für Tests und Hosts
//! (3D-Szene, Detail-Panel und Sidebar docken über die Bindings an).

pub mod app;
pub mod core;
pub mod data;

pub use app::{
    CommandLog, HighlightKind, HighlightSink, ListenerId, NullHighlightSink, PanelBinding,
    PanelContent, RoomCard, SelectionListener, SelectionState, SelectionStore, SidebarEntry,
    ViewBinding, ViewerCommand, ViewerController, ViewerIntent, ViewerState,
};
pub use core::{Floor, FloorRegistry, GeometryHandle, GeometryPick, MalformedDataError, Room, RoomRef};
pub use data::{parse_hotel_data, RawFloor, RawHotelData, RawRoom};
