//! Handler für das Laden der Hoteldaten.

use crate::app::ViewerState;
use crate::core::FloorRegistry;
use anyhow::Context;
use std::sync::Arc;

/// Lädt Hoteldaten aus einer Datei und ersetzt die Registry.
pub fn load_file(state: &mut ViewerState, path: String) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Hoteldaten-Datei {path} konnte nicht gelesen werden"))?;
    load_json(state, &json)
}

/// Lädt Hoteldaten aus einem JSON-String und ersetzt die Registry.
///
/// Schlägt der Aufbau fehl, bleibt die vorherige Registry aktiv — der Swap
/// passiert erst nach erfolgreicher Validierung (atomar aus Konsumentensicht,
/// Last-Writer-Wins bei konkurrierenden Reloads).
pub fn load_json(state: &mut ViewerState, json: &str) -> anyhow::Result<()> {
    let raw = crate::data::parse_hotel_data(json)?;
    let registry = FloorRegistry::load(&raw).context("Hoteldaten sind inkonsistent")?;

    log::info!(
        "Registry geladen: {} Etagen, {} Räume",
        registry.floor_count(),
        registry.room_count()
    );

    state.hotel_name = raw.hotel_name;
    state.store.replace_registry(Arc::new(registry));
    Ok(())
}
