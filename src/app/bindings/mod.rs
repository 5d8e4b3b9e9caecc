//! Bindings zwischen SelectionStore und den externen Oberflächen.
//!
//! `view` vermittelt zur 3D-Szene (Pick-Auflösung, Highlights),
//! `panel` zu Detail-Panel und Sidebar. Beide halten keinen eigenen
//! fachlichen Zustand über Rendering-Caches hinaus — alles wird aus
//! FloorRegistry + SelectionStore abgeleitet.

pub mod panel;
pub mod view;

pub use panel::{PanelBinding, PanelContent, RoomCard, SidebarEntry};
pub use view::{HighlightKind, HighlightSink, NullHighlightSink, ViewBinding};
