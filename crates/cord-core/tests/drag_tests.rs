// Press/drag/release state machine in isolation.

use cord_core::drag::outcome_for;
use cord_core::{DragController, DragPhase, Effect, Prop, Step, Target, TugOutcome};
use glam::Vec2;

const REST: Vec2 = Vec2::new(98.0, 380.0);

#[test]
fn press_records_start_and_parks_tug_point() {
    let mut drag = DragController::new(REST);
    let reset = drag.press(Vec2::new(5.0, 5.0));
    assert_eq!(drag.phase(), DragPhase::Pressing);
    assert_eq!(reset.target, Target::Proxy);
    assert_eq!(reset.props.as_slice(), &[Prop::X(98.0), Prop::Y(380.0)]);
    assert_eq!(drag.tug_point().position, REST);
}

#[test]
fn drag_moves_the_dummy_cord_end() {
    let mut drag = DragController::new(REST);
    assert!(drag.drag(Vec2::new(1.0, 2.0)).is_none(), "no press yet");

    drag.press(Vec2::ZERO);
    let end = drag.drag(Vec2::new(110.0, 430.0)).expect("pressed");
    assert_eq!(end.target, Target::DummyCordLine);
    assert_eq!(end.props.as_slice(), &[Prop::EndX(110.0), Prop::EndY(430.0)]);
    assert_eq!(drag.phase(), DragPhase::Dragging);
    assert_eq!(drag.tug_point().position, Vec2::new(110.0, 430.0));
}

#[test]
fn release_measures_euclidean_distance_from_press() {
    let mut drag = DragController::new(REST);
    drag.press(Vec2::new(10.0, 10.0));
    let (travelled, spring) = drag.release(Vec2::new(13.0, 14.0)).expect("pressed");
    assert!((travelled - 5.0).abs() < 1e-6);
    assert_eq!(drag.phase(), DragPhase::Settling);

    let Step::Tween(tween) = &spring.steps[0].step else {
        panic!("expected tween");
    };
    assert_eq!(tween.duration, 0.1);
    assert_eq!(
        tween.targets[0].props.as_slice(),
        &[Prop::EndX(98.0), Prop::EndY(380.0)]
    );
    assert_eq!(tween.on_complete, vec![Effect::TugSettled { travelled }]);
}

#[test]
fn release_without_press_is_ignored() {
    let mut drag = DragController::new(REST);
    assert!(drag.release(Vec2::new(100.0, 100.0)).is_none());
    assert_eq!(drag.phase(), DragPhase::Idle);
}

#[test]
fn threshold_is_strictly_greater_than_fifty() {
    assert_eq!(outcome_for(50.0), TugOutcome::Rest);
    assert_eq!(outcome_for(50.001), TugOutcome::Trigger);
    assert_eq!(outcome_for(0.0), TugOutcome::Rest);
}

#[test]
fn settle_returns_to_idle() {
    let mut drag = DragController::new(REST);
    drag.press(Vec2::ZERO);
    drag.release(Vec2::new(0.0, 60.0));
    assert_eq!(drag.settle(60.0), TugOutcome::Trigger);
    assert_eq!(drag.phase(), DragPhase::Idle);
}

#[test]
fn a_new_press_survives_the_previous_settle() {
    let mut drag = DragController::new(REST);
    drag.press(Vec2::ZERO);
    drag.release(Vec2::new(1.0, 1.0));
    drag.press(Vec2::new(2.0, 2.0));
    drag.settle(1.4);
    assert_eq!(drag.phase(), DragPhase::Pressing);
}
