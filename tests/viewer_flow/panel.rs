use crate::common::session_with_fixture;
use hotel_floor_viewer::{GeometryHandle, GeometryPick, PanelContent, ViewerIntent};

fn pick(handle: &str) -> ViewerIntent {
    ViewerIntent::GeometryPicked {
        pick: GeometryPick::new(GeometryHandle::new(handle), glam::Vec3::ZERO),
    }
}

#[test]
fn test_selected_room_renders_details_with_attribute_order() {
    let (mut controller, mut state, _log) = session_with_fixture();

    controller.handle_intent(&mut state, pick("mesh-l1-r1")).unwrap();

    let panel = state.panel.borrow();
    match panel.content() {
        PanelContent::Details(card) => {
            assert_eq!(card.room_id, "R1");
            assert_eq!(card.label, "Zimmer 101");
            assert_eq!(card.floor_label, "Erdgeschoss");
            let keys: Vec<&str> = card.attributes.iter().map(|(k, _)| k.as_str()).collect();
            assert_eq!(keys, vec!["status", "capacity", "type"]);
            assert_eq!(card.attributes[0].1, "frei");
        }
        other => panic!("Unerwarteter Panel-Inhalt: {other:?}"),
    }
}

#[test]
fn test_hover_without_selection_renders_preview() {
    let (mut controller, mut state, _log) = session_with_fixture();

    controller
        .handle_intent(
            &mut state,
            ViewerIntent::GeometryHoverMoved {
                handle: GeometryHandle::new("mesh-l1-r2"),
            },
        )
        .unwrap();

    let panel = state.panel.borrow();
    match panel.content() {
        PanelContent::Preview(card) => assert_eq!(card.room_id, "R2"),
        other => panic!("Unerwarteter Panel-Inhalt: {other:?}"),
    }
}

#[test]
fn test_selection_wins_over_hover_for_panel_content() {
    let (mut controller, mut state, _log) = session_with_fixture();

    controller.handle_intent(&mut state, pick("mesh-l1-r1")).unwrap();
    controller
        .handle_intent(
            &mut state,
            ViewerIntent::SidebarRoomHovered {
                floor_id: "L1".to_string(),
                room_id: "R3".to_string(),
            },
        )
        .unwrap();

    let panel = state.panel.borrow();
    match panel.content() {
        PanelContent::Details(card) => assert_eq!(card.room_id, "R1"),
        other => panic!("Hover darf die Detailansicht nicht verdrängen: {other:?}"),
    }
}

#[test]
fn test_clearing_selection_empties_panel() {
    let (mut controller, mut state, _log) = session_with_fixture();

    controller.handle_intent(&mut state, pick("mesh-l1-r1")).unwrap();
    controller
        .handle_intent(&mut state, ViewerIntent::ClearSelectionRequested)
        .unwrap();

    assert_eq!(*state.panel.borrow().content(), PanelContent::Empty);
}

#[test]
fn test_clearing_selection_falls_back_to_hover_preview() {
    let (mut controller, mut state, _log) = session_with_fixture();

    controller.handle_intent(&mut state, pick("mesh-l1-r1")).unwrap();
    controller
        .handle_intent(
            &mut state,
            ViewerIntent::SidebarRoomHovered {
                floor_id: "L1".to_string(),
                room_id: "R2".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, ViewerIntent::ClearSelectionRequested)
        .unwrap();

    // Hover wird unabhängig geführt und kommt nach dem Aufheben zum Vorschein.
    let panel = state.panel.borrow();
    match panel.content() {
        PanelContent::Preview(card) => assert_eq!(card.room_id, "R2"),
        other => panic!("Unerwarteter Panel-Inhalt: {other:?}"),
    }
}
