//! Rohdaten-Schicht: Schema und Parser für die gelieferten Hoteldaten.

pub mod loader;

pub use loader::{parse_hotel_data, RawFloor, RawHotelData, RawRoom};
