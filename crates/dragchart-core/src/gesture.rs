// File: crates/dragchart-core/src/gesture.rs
// Summary: Pointer-down / move / up dispatch onto a draggable series.

use crate::hit_test::HitTest;
use crate::point::PointId;
use crate::series::DraggableSeries;
use crate::types::Coordinate;

/// Pointer event in data space (values are chart coordinates, not pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { primary: f64, secondary: f64 },
    Move { primary: f64, secondary: f64 },
    Up,
}

impl PointerEvent {
    pub fn down(at: impl Into<Coordinate>) -> Self {
        let c = at.into();
        PointerEvent::Down { primary: c.primary, secondary: c.secondary }
    }

    pub fn moved(to: impl Into<Coordinate>) -> Self {
        let c = to.into();
        PointerEvent::Move { primary: c.primary, secondary: c.secondary }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match *self {
            PointerEvent::Down { primary, secondary } | PointerEvent::Move { primary, secondary } => {
                Some(Coordinate::new(primary, secondary))
            }
            PointerEvent::Up => None,
        }
    }
}

/// What a dispatched event did to the series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A point was picked up.
    Grabbed(PointId),
    /// The held point moved.
    Moved(PointId),
    /// The gesture ended (a point may or may not have been held).
    Released,
    /// Nothing changed.
    Ignored,
}

/// Tracks pointer press state across events.
///
/// While pressed with nothing held, each move retries the hit test so a
/// sweep that reaches a point picks it up. Once a point is held, moves only
/// relocate it.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureController {
    pressed: bool,
}

impl GestureController {
    pub fn new() -> Self { Self::default() }

    pub fn is_pressed(&self) -> bool { self.pressed }

    pub fn handle<H: HitTest>(&mut self, evt: PointerEvent, series: &mut DraggableSeries<H>) -> GestureOutcome {
        match evt {
            PointerEvent::Down { primary, secondary } => {
                self.pressed = true;
                // begin_drag keeps an already-held point
                match series.begin_drag(Coordinate::new(primary, secondary)) {
                    Some(id) => GestureOutcome::Grabbed(id),
                    None => GestureOutcome::Ignored,
                }
            }
            PointerEvent::Move { primary, secondary } => {
                if !self.pressed {
                    return GestureOutcome::Ignored;
                }
                self.grab_or_move(Coordinate::new(primary, secondary), series)
            }
            PointerEvent::Up => {
                self.pressed = false;
                series.end_drag();
                GestureOutcome::Released
            }
        }
    }

    fn grab_or_move<H: HitTest>(&self, at: Coordinate, series: &mut DraggableSeries<H>) -> GestureOutcome {
        if let Some(id) = series.dragged_id() {
            series.update_drag(at);
            return GestureOutcome::Moved(id);
        }
        match series.begin_drag(at) {
            Some(id) => GestureOutcome::Grabbed(id),
            None => GestureOutcome::Ignored,
        }
    }
}
