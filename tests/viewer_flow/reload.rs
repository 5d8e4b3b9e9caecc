use crate::common::{session_with_fixture, SinkCommand};
use hotel_floor_viewer::{
    GeometryHandle, GeometryPick, PanelContent, RoomRef, SelectionState, ViewerIntent,
};

/// Neuladen-Fixture: L1 ohne R1, L2 entfällt komplett.
const HOTEL_REDUCED: &str = r#"{
    "hotel_name": "Hotel Seeblick",
    "floors": [ { "id": "L1", "label": "Erdgeschoss" } ],
    "rooms": [
        { "id": "R2", "floor": "L1", "label": "Zimmer 102", "geometry": "mesh-l1-r2" },
        { "id": "R3", "floor": "L1", "label": "Zimmer 103", "geometry": "mesh-l1-r3" }
    ]
}"#;

#[test]
fn test_reload_clears_selection_of_removed_room() {
    let (mut controller, mut state, log) = session_with_fixture();

    controller
        .handle_intent(
            &mut state,
            ViewerIntent::GeometryPicked {
                pick: GeometryPick::new(GeometryHandle::new("mesh-l1-r1"), glam::Vec3::ZERO),
            },
        )
        .unwrap();
    assert_eq!(
        state.store.state(),
        SelectionState::Selected(RoomRef::new("L1", "R1"))
    );

    controller
        .handle_intent(
            &mut state,
            ViewerIntent::HotelDataProvided {
                json: HOTEL_REDUCED.to_string(),
            },
        )
        .expect("Neuladen sollte funktionieren");

    // Selektion zurückgesetzt, Panel geleert, Highlight entfernt.
    assert_eq!(state.store.state(), SelectionState::Empty);
    assert_eq!(*state.panel.borrow().content(), PanelContent::Empty);
    assert_eq!(
        log.borrow().last(),
        Some(&SinkCommand::Clear(GeometryHandle::new("mesh-l1-r1")))
    );

    // Alte Referenz ist ungültig, neue Daten sind selektierbar.
    assert!(!state.store.select("L1", "R1"));
    assert!(state.store.select("L1", "R2"));
}

#[test]
fn test_stale_pick_after_reload_is_ignored() {
    let (mut controller, mut state, _log) = session_with_fixture();

    controller
        .handle_intent(
            &mut state,
            ViewerIntent::HotelDataProvided {
                json: HOTEL_REDUCED.to_string(),
            },
        )
        .unwrap();

    // In-flight Pick gegen die alte Registry (L2 existiert nicht mehr).
    controller
        .handle_intent(
            &mut state,
            ViewerIntent::GeometryPicked {
                pick: GeometryPick::new(GeometryHandle::new("mesh-l2-r1"), glam::Vec3::ZERO),
            },
        )
        .expect("Stale Pick darf kein Fehler sein");

    assert_eq!(state.store.state(), SelectionState::Empty);
}

#[test]
fn test_failed_reload_keeps_previous_registry_and_selection() {
    let (mut controller, mut state, _log) = session_with_fixture();

    controller
        .handle_intent(
            &mut state,
            ViewerIntent::SidebarRoomClicked {
                floor_id: "L1".to_string(),
                room_id: "R2".to_string(),
            },
        )
        .unwrap();

    // Doppelte Raum-ID → MalformedDataError, Swap findet nicht statt.
    let malformed = r#"{
        "floors": [ { "id": "L1", "label": "Erdgeschoss" } ],
        "rooms": [
            { "id": "R1", "floor": "L1", "label": "A", "geometry": "m1" },
            { "id": "R1", "floor": "L1", "label": "B", "geometry": "m2" }
        ]
    }"#;
    let result = controller.handle_intent(
        &mut state,
        ViewerIntent::HotelDataProvided {
            json: malformed.to_string(),
        },
    );
    assert!(result.is_err(), "Inkonsistente Daten müssen den Ladevorgang abbrechen");

    // Vorherige Registry und Selektion bleiben aktiv.
    assert_eq!(state.floor_count(), 2);
    assert_eq!(state.room_count(), 4);
    assert_eq!(state.store.selected(), Some(&RoomRef::new("L1", "R2")));
}

#[test]
fn test_second_reload_wins_over_first() {
    let (mut controller, mut state, _log) = session_with_fixture();

    // Last-Writer-Wins: das zuletzt eintreffende Ergebnis bestimmt die Registry.
    controller
        .handle_intent(
            &mut state,
            ViewerIntent::HotelDataProvided {
                json: HOTEL_REDUCED.to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            ViewerIntent::HotelDataProvided {
                json: crate::common::HOTEL_SMALL.to_string(),
            },
        )
        .unwrap();

    assert_eq!(state.floor_count(), 2);
    assert!(state.registry().unwrap().contains_room("L2", "R1"));
}

#[test]
fn test_hotel_name_follows_latest_load() {
    let (_controller, state, _log) = session_with_fixture();
    assert_eq!(state.hotel_name.as_deref(), Some("Hotel Seeblick"));
}
