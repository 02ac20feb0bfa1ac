use std::cell::RefCell;
use std::rc::Rc;

use satval_core::{
    ColorCoordinate, DragEvent, DragPhase, FieldGeometry, GestureEvent, GestureState,
    PickerError, PickerSink, PickerSinks, PressInput, SessionController, SinkResult,
    ValueAxisReference,
};

const EPSILON: f32 = 1e-6;

type Log = Rc<RefCell<Vec<(&'static str, ColorCoordinate)>>>;

/// Sinks subscribed to every event, each tagging its entries with its name.
fn recording_sinks() -> (PickerSinks, Log) {
    let log: Log = Rc::default();
    let press = Rc::clone(&log);
    let start = Rc::clone(&log);
    let moved = Rc::clone(&log);
    let end = Rc::clone(&log);
    let terminate = Rc::clone(&log);
    let sinks = PickerSinks::new()
        .with_press(move |e| {
            press.borrow_mut().push(("press", e.coordinate));
            Ok(())
        })
        .with_drag_start(move |e| {
            start.borrow_mut().push(("start", e.coordinate));
            Ok(())
        })
        .with_drag_move(move |e| {
            moved.borrow_mut().push(("move", e.coordinate));
            Ok(())
        })
        .with_drag_end(move |e| {
            end.borrow_mut().push(("end", e.coordinate));
            Ok(())
        })
        .with_drag_terminate(move |e| {
            terminate.borrow_mut().push(("terminate", e.coordinate));
            Ok(())
        });
    (sinks, log)
}

fn controller() -> (SessionController<PickerSinks>, Log) {
    let (sinks, log) = recording_sinks();
    let ctl = SessionController::new(FieldGeometry::new(200.0, 256.0), ValueAxisReference::Height)
        .with_sinks(sinks);
    (ctl, log)
}

fn close(a: ColorCoordinate, b: ColorCoordinate) -> bool {
    (a.saturation - b.saturation).abs() < EPSILON && (a.value - b.value).abs() < EPSILON
}

fn labels(log: &Log) -> Vec<&'static str> {
    log.borrow().iter().map(|(label, _)| *label).collect()
}

#[test]
fn taps_map_corners_and_center() {
    let (mut ctl, log) = controller();
    let top_left = ctl.press(PressInput::at(0.0, 0.0)).unwrap();
    let bottom_right = ctl.press(PressInput::at(200.0, 256.0)).unwrap();
    let center = ctl.press(PressInput::at(100.0, 128.0)).unwrap();

    assert!(close(top_left, ColorCoordinate::new(0.0, 1.0)));
    assert!(close(bottom_right, ColorCoordinate::new(1.0, 0.0)));
    assert!(close(center, ColorCoordinate::new(0.5, 0.5)));
    assert_eq!(labels(&log), ["press", "press", "press"]);
}

#[test]
fn press_sink_receives_raw_payload() {
    let seen = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&seen);
    let mut ctl =
        SessionController::new(FieldGeometry::new(200.0, 256.0), ValueAxisReference::Height)
            .with_sinks(PickerSinks::new().with_press(move |e| {
                *slot.borrow_mut() = Some(*e);
                Ok(())
            }));

    let input = PressInput {
        location: satval_core::Vec2::new(50.0, 64.0),
        page_location: Some(satval_core::Vec2::new(550.0, 364.0)),
    };
    ctl.press(input).unwrap();

    let event = seen.borrow().expect("press sink not called");
    assert_eq!(event.input, input);
    assert!(close(event.coordinate, ColorCoordinate::new(0.25, 0.75)));
}

#[test]
fn drag_scenario_clamps_and_keeps_value() {
    let (mut ctl, log) = controller();
    let origin = ColorCoordinate::new(0.5, 0.5);

    let start = ctl.drag_start(origin, GestureState::default()).unwrap();
    assert_eq!(start, origin);

    let right = ctl.drag_move(GestureState::from_displacement(100.0, 0.0)).unwrap();
    assert!(close(right, ColorCoordinate::new(1.0, 0.5)));

    let far_left = ctl.drag_move(GestureState::from_displacement(-200.0, 0.0)).unwrap();
    assert!(close(far_left, ColorCoordinate::new(0.0, 0.5)));

    assert_eq!(labels(&log), ["start", "move", "move"]);
}

#[test]
fn end_and_terminate_reach_distinct_sinks() {
    let gesture = GestureState::from_displacement(30.0, -40.0);

    let (mut ended, end_log) = controller();
    ended.drag_start(ColorCoordinate::new(0.5, 0.5), GestureState::default()).unwrap();
    let moved = ended.drag_move(gesture).unwrap();
    let finished = ended.drag_end(gesture).unwrap();
    assert_eq!(moved, finished);
    assert_eq!(labels(&end_log), ["start", "move", "end"]);

    let (mut cancelled, term_log) = controller();
    cancelled
        .drag_start(ColorCoordinate::new(0.5, 0.5), GestureState::default())
        .unwrap();
    cancelled.drag_move(gesture).unwrap();
    let abandoned = cancelled.drag_terminate(gesture).unwrap();
    assert_eq!(abandoned, finished);
    assert_eq!(labels(&term_log), ["start", "move", "terminate"]);
}

#[test]
fn second_session_starts_from_its_own_origin() {
    let (mut ctl, log) = controller();

    ctl.drag_start(ColorCoordinate::new(0.5, 0.5), GestureState::default()).unwrap();
    ctl.drag_end(GestureState::from_displacement(100.0, 128.0)).unwrap();

    let fresh = ColorCoordinate::new(0.1, 0.9);
    let start = ctl.drag_start(fresh, GestureState::default()).unwrap();
    assert_eq!(start, fresh);
    assert_eq!(ctl.drag_origin(), Some(fresh));

    let moved = ctl.drag_move(GestureState::from_displacement(20.0, 0.0)).unwrap();
    assert!(close(moved, ColorCoordinate::new(0.2, 0.9)));

    let log = log.borrow();
    assert_eq!(log[1].0, "end");
    assert!(close(log[1].1, ColorCoordinate::new(1.0, 0.0)));
}

#[test]
fn moves_after_end_are_rejected_without_emitting() {
    let (mut ctl, log) = controller();
    ctl.drag_start(ColorCoordinate::default(), GestureState::default()).unwrap();
    ctl.drag_end(GestureState::default()).unwrap();

    let err = ctl
        .handle(GestureEvent::Move(GestureState::from_displacement(5.0, 5.0)))
        .unwrap_err();
    assert!(matches!(err, PickerError::NotDragging { phase: DragPhase::Move }));
    assert_eq!(labels(&log), ["start", "end"]);
}

#[test]
fn unsubscribed_events_are_silent() {
    let mut ctl =
        SessionController::new(FieldGeometry::new(200.0, 256.0), ValueAxisReference::Width)
            .with_sinks(PickerSinks::new());
    ctl.press(PressInput::at(10.0, 10.0)).unwrap();
    ctl.drag_start(ColorCoordinate::default(), GestureState::default()).unwrap();
    ctl.drag_move(GestureState::from_displacement(-10.0, 10.0)).unwrap();
    ctl.drag_terminate(GestureState::default()).unwrap();
    assert!(!ctl.is_dragging());
}

#[test]
fn value_axis_variants_differ_only_vertically() {
    let gesture = GestureState::from_displacement(40.0, 100.0);
    let origin = ColorCoordinate::new(0.5, 0.9);

    let mut by_height =
        SessionController::new(FieldGeometry::new(200.0, 256.0), ValueAxisReference::Height);
    by_height.drag_start(origin, GestureState::default()).unwrap();
    let h = by_height.drag_move(gesture).unwrap();

    let mut by_width =
        SessionController::new(FieldGeometry::new(200.0, 256.0), ValueAxisReference::Width);
    by_width.drag_start(origin, GestureState::default()).unwrap();
    let w = by_width.drag_move(gesture).unwrap();

    assert!((h.saturation - w.saturation).abs() < EPSILON);
    assert!((h.value - (0.9 - 100.0 / 256.0)).abs() < EPSILON);
    assert!((w.value - (0.9 - 100.0 / 200.0)).abs() < EPSILON);
}

/// Sink that only overrides the combined drag handler.
#[derive(Default)]
struct PhaseRecorder {
    phases: Vec<DragPhase>,
}

impl PickerSink for PhaseRecorder {
    fn on_drag(&mut self, event: &DragEvent) -> SinkResult {
        self.phases.push(event.phase);
        Ok(())
    }
}

#[test]
fn sink_lent_by_reference_sees_every_drag_phase() {
    let mut recorder = PhaseRecorder::default();
    {
        let mut ctl =
            SessionController::new(FieldGeometry::new(200.0, 256.0), ValueAxisReference::Height)
                .with_sinks(&mut recorder);
        ctl.drag_start(ColorCoordinate::new(0.5, 0.5), GestureState::default()).unwrap();
        ctl.drag_move(GestureState::from_displacement(10.0, 0.0)).unwrap();
        ctl.drag_end(GestureState::from_displacement(10.0, 0.0)).unwrap();
    }
    assert_eq!(recorder.phases, [DragPhase::Start, DragPhase::Move, DragPhase::End]);
}
