//! Gemeinsame Helfer für die Viewer-Flow-Tests.

use hotel_floor_viewer::{
    GeometryHandle, HighlightKind, HighlightSink, ViewerController, ViewerIntent, ViewerState,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Fixture mit zwei Etagen (L1: R1..R3, L2: R1).
pub const HOTEL_SMALL: &str = include_str!("../fixtures/hotel_small.json");

/// Aufgezeichnetes Highlight-Kommando des Test-Sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCommand {
    Apply(GeometryHandle, HighlightKind),
    Clear(GeometryHandle),
}

/// Highlight-Sink, der alle Kommandos in ein geteiltes Log schreibt.
pub struct RecordingSink {
    log: Rc<RefCell<Vec<SinkCommand>>>,
}

impl RecordingSink {
    pub fn new(log: Rc<RefCell<Vec<SinkCommand>>>) -> Self {
        Self { log }
    }
}

impl HighlightSink for RecordingSink {
    fn apply_highlight(&mut self, handle: &GeometryHandle, kind: HighlightKind) {
        self.log
            .borrow_mut()
            .push(SinkCommand::Apply(handle.clone(), kind));
    }

    fn clear_highlight(&mut self, handle: &GeometryHandle) {
        self.log.borrow_mut().push(SinkCommand::Clear(handle.clone()));
    }
}

/// Erstellt Controller + Session mit Recording-Sink und geladenem Fixture.
pub fn session_with_fixture() -> (
    ViewerController,
    ViewerState,
    Rc<RefCell<Vec<SinkCommand>>>,
) {
    let _ = env_logger::builder().is_test(true).try_init();

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut state = ViewerState::with_sink(Box::new(RecordingSink::new(Rc::clone(&log))));
    let mut controller = ViewerController::new();

    controller
        .handle_intent(
            &mut state,
            ViewerIntent::HotelDataProvided {
                json: HOTEL_SMALL.to_string(),
            },
        )
        .expect("Fixture sollte laden");
    log.borrow_mut().clear();

    (controller, state, log)
}

/// Zählt Sink-Kommandos, die ein bestimmtes Handle betreffen.
pub fn clears_for(log: &Rc<RefCell<Vec<SinkCommand>>>, handle: &str) -> usize {
    let handle = GeometryHandle::new(handle);
    log.borrow()
        .iter()
        .filter(|cmd| matches!(cmd, SinkCommand::Clear(h) if *h == handle))
        .count()
}
