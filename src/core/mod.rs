//! Core-Domänentypen: Etagen, Räume, Geometrie-Handles, FloorRegistry.

pub mod floor;
/// Core-Datenmodelle für den Etagenplan-Viewer
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - FloorRegistry: unveränderlicher Katalog aller Etagen und Räume pro Ladevorgang
/// - Floor: Etage mit geordneter Raumliste
/// - Room: selektierbare Einheit mit Attributen und Geometrie-Handle
pub mod registry;
pub mod room;

pub use floor::Floor;
pub use registry::{FloorRegistry, MalformedDataError};
pub use room::{GeometryHandle, GeometryPick, Room, RoomRef};
