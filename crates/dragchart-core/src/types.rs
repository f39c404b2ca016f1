// File: crates/dragchart-core/src/types.rs
// Summary: Shared coordinate type and default hit-test constants.

/// Default maximum distance along the primary axis for a threshold hit.
pub const DEFAULT_MAX_PRIMARY_DELTA: f64 = 15.0;
/// Default maximum distance along the secondary axis for a threshold hit.
pub const DEFAULT_MAX_SECONDARY_DELTA: f64 = 15.0;

/// Default weight of the primary-axis distance in weighted hit testing.
pub const DEFAULT_PRIMARY_WEIGHT: f64 = 0.5;
/// Default weight of the secondary-axis distance in weighted hit testing.
pub const DEFAULT_SECONDARY_WEIGHT: f64 = 0.5;

/// A position in data space (e.g. x/y, or time/temperature).
/// Renderers translate screen pixels into this space before calling the core.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coordinate {
    pub primary: f64,
    pub secondary: f64,
}

impl Coordinate {
    pub const fn new(primary: f64, secondary: f64) -> Self {
        Self { primary, secondary }
    }

    /// Absolute per-axis distance `(|Δprimary|, |Δsecondary|)` to `other`.
    #[inline]
    pub fn abs_delta(&self, other: Coordinate) -> (f64, f64) {
        ((self.primary - other.primary).abs(), (self.secondary - other.secondary).abs())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((primary, secondary): (f64, f64)) -> Self {
        Self { primary, secondary }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.primary, c.secondary)
    }
}
