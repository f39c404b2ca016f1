// File: crates/dragchart-core/src/series.rs
// Summary: Ordered point series with a pointer-driven drag protocol.
// Notes:
// - The nearest point is resolved once, at `begin_drag`. Every following
//   `update_drag` moves that same point until `end_drag`.
// - `update_drag` without an active drag is a no-op that returns `false`.

use tracing::{debug, trace, warn};

use crate::hit_test::{HitPolicy, HitTest};
use crate::point::{DataPoint, PointId};
use crate::types::Coordinate;

/// The point currently held by a drag gesture. Points are never removed, so
/// the cached index stays valid for the lifetime of the series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DragState {
    id: PointId,
    index: usize,
}

/// One entry of the renderer-facing snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPoint {
    pub id: PointId,
    pub coordinate: Coordinate,
    /// True for the point being dragged.
    pub highlighted: bool,
}

#[derive(Clone, Debug)]
pub struct DraggableSeries<H = HitPolicy> {
    points: Vec<DataPoint>,
    hit_test: H,
    drag: Option<DragState>,
    revision: u64,
}

impl<H: HitTest> DraggableSeries<H> {
    /// Take ownership of `points`; insertion order is display order.
    pub fn new(points: Vec<DataPoint>, hit_test: H) -> Self {
        Self { points, hit_test, drag: None, revision: 0 }
    }

    pub fn from_coordinates<I, C>(coords: I, hit_test: H) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let points = coords
            .into_iter()
            .map(|c| {
                let c: Coordinate = c.into();
                DataPoint::from(c)
            })
            .collect();
        Self::new(points, hit_test)
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn hit_test(&self) -> &H { &self.hit_test }

    /// Swap the hit-test strategy. An active drag keeps its point.
    pub fn set_hit_test(&mut self, hit_test: H) {
        self.hit_test = hit_test;
    }

    pub fn get(&self, id: PointId) -> Option<&DataPoint> {
        self.points.iter().find(|p| p.id() == id)
    }

    /// Bumped on every drag begin, coordinate mutation and drag end.
    pub fn revision(&self) -> u64 { self.revision }

    /// Point selected by the configured hit test for `target`. No side effects.
    pub fn nearest_point(&self, target: impl Into<Coordinate>) -> Option<&DataPoint> {
        self.hit_test
            .nearest(&self.points, target.into())
            .and_then(|i| self.points.get(i))
    }

    /// Start dragging the point nearest to `target`.
    ///
    /// While a drag is already active this does not re-resolve and returns
    /// the identity of the point already held.
    pub fn begin_drag(&mut self, target: impl Into<Coordinate>) -> Option<PointId> {
        if let Some(state) = self.drag {
            return Some(state.id);
        }
        let target = target.into();
        let index = match self.hit_test.nearest(&self.points, target) {
            Some(i) if i < self.points.len() => i,
            Some(i) => {
                warn!(index = i, len = self.points.len(), policy = self.hit_test.id(), "hit test returned out-of-range index");
                return None;
            }
            None => {
                debug!(?target, policy = self.hit_test.id(), "no point near drag start");
                return None;
            }
        };
        let id = self.points[index].id();
        self.drag = Some(DragState { id, index });
        self.revision += 1;
        debug!(%id, index, ?target, "drag started");
        Some(id)
    }

    /// Move the dragged point to `to`. Returns `false` when no drag is active.
    pub fn update_drag(&mut self, to: impl Into<Coordinate>) -> bool {
        let Some(state) = self.drag else { return false };
        let to = to.into();
        self.points[state.index].move_to(to);
        self.revision += 1;
        trace!(id = %state.id, ?to, "drag moved");
        true
    }

    /// Release the dragged point, if any.
    pub fn end_drag(&mut self) {
        if let Some(state) = self.drag.take() {
            self.revision += 1;
            debug!(id = %state.id, "drag ended");
        }
    }

    pub fn is_dragging(&self, point: &DataPoint) -> bool {
        self.is_dragging_id(point.id())
    }

    pub fn is_dragging_id(&self, id: PointId) -> bool {
        self.drag.is_some_and(|s| s.id == id)
    }

    pub fn is_drag_active(&self) -> bool { self.drag.is_some() }

    pub fn dragged_id(&self) -> Option<PointId> { self.drag.map(|s| s.id) }

    pub fn dragged(&self) -> Option<&DataPoint> {
        self.drag.and_then(|s| self.points.get(s.index))
    }

    /// Ordered snapshot for drawing: coordinates plus highlight flag.
    pub fn render_points(&self) -> Vec<RenderPoint> {
        let dragged = self.dragged_id();
        self.points
            .iter()
            .map(|p| RenderPoint {
                id: p.id(),
                coordinate: p.coordinate(),
                highlighted: Some(p.id()) == dragged,
            })
            .collect()
    }
}

impl<H: HitTest + Default> Default for DraggableSeries<H> {
    fn default() -> Self { Self::new(Vec::new(), H::default()) }
}
