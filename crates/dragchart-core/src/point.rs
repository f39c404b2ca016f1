// File: crates/dragchart-core/src/point.rs
// Summary: Data point with a stable process-unique identity and mutable coordinates.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::Coordinate;

static NEXT_POINT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque point identity. Unique for the life of the process, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u64);

impl PointId {
    fn next() -> Self {
        Self(NEXT_POINT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One sample of a series.
/// Contract: `id` is fixed at creation; coordinates change only through
/// `DraggableSeries`.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    id: PointId,
    primary: f64,
    secondary: f64,
}

impl DataPoint {
    /// Create a point with a freshly allocated identity.
    pub fn new(primary: f64, secondary: f64) -> Self {
        Self { id: PointId::next(), primary, secondary }
    }

    pub fn id(&self) -> PointId { self.id }
    pub fn primary(&self) -> f64 { self.primary }
    pub fn secondary(&self) -> f64 { self.secondary }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.primary, self.secondary)
    }

    pub(crate) fn move_to(&mut self, to: Coordinate) {
        self.primary = to.primary;
        self.secondary = to.secondary;
    }
}

impl From<Coordinate> for DataPoint {
    fn from(c: Coordinate) -> Self {
        Self::new(c.primary, c.secondary)
    }
}
