// File: crates/dragchart-core/tests/gesture.rs
// Purpose: Pointer event dispatch through the gesture controller.

use dragchart_core::fixtures::simple_points;
use dragchart_core::{Coordinate, DraggableSeries, GestureController, GestureOutcome, HitPolicy, PointerEvent};

fn simple() -> DraggableSeries {
    DraggableSeries::from_coordinates(simple_points(), HitPolicy::default())
}

#[test]
fn down_move_up_drags_one_point() {
    let mut series = simple();
    let mut gesture = GestureController::new();
    let id = series.points()[4].id();

    assert_eq!(gesture.handle(PointerEvent::down((401.0, 399.0)), &mut series), GestureOutcome::Grabbed(id));
    assert!(gesture.is_pressed());
    assert_eq!(gesture.handle(PointerEvent::moved((420.0, 450.0)), &mut series), GestureOutcome::Moved(id));
    assert_eq!(gesture.handle(PointerEvent::moved((430.0, 470.0)), &mut series), GestureOutcome::Moved(id));
    assert_eq!(gesture.handle(PointerEvent::Up, &mut series), GestureOutcome::Released);

    assert!(!gesture.is_pressed());
    assert!(!series.is_drag_active());
    assert_eq!(series.points()[4].coordinate(), Coordinate::new(430.0, 470.0));
}

#[test]
fn pressed_sweep_picks_up_point_when_reached() {
    let mut series = simple();
    let mut gesture = GestureController::new();
    let id = series.points()[2].id();

    assert_eq!(gesture.handle(PointerEvent::down((150.0, 150.0)), &mut series), GestureOutcome::Ignored);
    assert_eq!(gesture.handle(PointerEvent::moved((180.0, 180.0)), &mut series), GestureOutcome::Ignored);
    assert_eq!(gesture.handle(PointerEvent::moved((195.0, 205.0)), &mut series), GestureOutcome::Grabbed(id));
    // the grabbing move does not relocate the point
    assert_eq!(series.points()[2].coordinate(), Coordinate::new(200.0, 200.0));
    assert_eq!(gesture.handle(PointerEvent::moved((250.0, 260.0)), &mut series), GestureOutcome::Moved(id));
    assert_eq!(series.points()[2].coordinate(), Coordinate::new(250.0, 260.0));
}

#[test]
fn hover_without_press_is_ignored() {
    let mut series = simple();
    let mut gesture = GestureController::new();
    let rev = series.revision();
    assert_eq!(gesture.handle(PointerEvent::moved((0.0, 0.0)), &mut series), GestureOutcome::Ignored);
    assert_eq!(series.revision(), rev);
    assert!(!series.is_drag_active());
}

#[test]
fn repeated_down_keeps_held_point() {
    let mut series = simple();
    let mut gesture = GestureController::new();
    let id = series.points()[0].id();
    assert_eq!(gesture.handle(PointerEvent::down((0.0, 0.0)), &mut series), GestureOutcome::Grabbed(id));
    assert_eq!(gesture.handle(PointerEvent::down((800.0, 800.0)), &mut series), GestureOutcome::Grabbed(id));
    assert_eq!(series.points()[0].coordinate(), Coordinate::new(0.0, 0.0));
}

#[test]
fn up_without_drag_is_released() {
    let mut series = simple();
    let mut gesture = GestureController::new();
    assert_eq!(gesture.handle(PointerEvent::Up, &mut series), GestureOutcome::Released);
    assert!(!series.is_drag_active());
}

#[test]
fn event_coordinates() {
    assert_eq!(PointerEvent::down((1.0, 2.0)).coordinate(), Some(Coordinate::new(1.0, 2.0)));
    assert_eq!(PointerEvent::moved((3.0, 4.0)).coordinate(), Some(Coordinate::new(3.0, 4.0)));
    assert_eq!(PointerEvent::Up.coordinate(), None);
}
