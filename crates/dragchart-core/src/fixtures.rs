// File: crates/dragchart-core/src/fixtures.rs
// Summary: Seed datasets (plain x/y and hourly time/temperature) for demos and tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::hit_test::ThresholdHitTest;
use crate::types::Coordinate;

/// Number of points in each seed dataset.
pub const FIXTURE_LEN: usize = 9;
/// Spacing between consecutive fixture values.
pub const FIXTURE_STEP: f64 = 100.0;

/// Threshold on the time axis of the timed fixture, in seconds.
pub const TIMED_MAX_TIME_DELTA_SECS: f64 = 1800.0;
/// Threshold on the temperature axis of the timed fixture.
pub const TIMED_MAX_TEMPERATURE_DELTA: f64 = 15.0;

/// `(0,0), (100,100), …, (800,800)`.
pub fn simple_points() -> Vec<Coordinate> {
    (0..FIXTURE_LEN)
        .map(|i| {
            let v = i as f64 * FIXTURE_STEP;
            Coordinate::new(v, v)
        })
        .collect()
}

/// Nine hourly samples starting at `start`, temperatures `0, 100, …, 800`.
/// The time axis is encoded as Unix seconds.
pub fn timed_points(start: DateTime<Utc>) -> Vec<Coordinate> {
    (0..FIXTURE_LEN)
        .map(|i| {
            let t = start + Duration::hours(i as i64);
            Coordinate::new(datetime_to_primary(t), i as f64 * FIXTURE_STEP)
        })
        .collect()
}

/// Hit test scaled for `timed_points`: half an hour by 15 degrees.
pub fn timed_hit_test() -> ThresholdHitTest {
    ThresholdHitTest {
        max_primary_delta: TIMED_MAX_TIME_DELTA_SECS,
        max_secondary_delta: TIMED_MAX_TEMPERATURE_DELTA,
    }
}

pub fn datetime_to_primary(t: DateTime<Utc>) -> f64 {
    t.timestamp() as f64 + f64::from(t.timestamp_subsec_millis()) / 1000.0
}

/// Inverse of `datetime_to_primary`, truncated to milliseconds.
/// `None` when the value is non-finite or out of chrono's range.
pub fn primary_to_datetime(primary: f64) -> Option<DateTime<Utc>> {
    if !primary.is_finite() {
        return None;
    }
    let ms = (primary * 1000.0).round();
    if ms < i64::MIN as f64 || ms > i64::MAX as f64 {
        return None;
    }
    Utc.timestamp_millis_opt(ms as i64).single()
}
