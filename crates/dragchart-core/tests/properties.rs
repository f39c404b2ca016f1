// File: crates/dragchart-core/tests/properties.rs
// Purpose: Randomised checks of hit-test selection and drag isolation.

use dragchart_core::{Coordinate, DataPoint, DraggableSeries, HitPolicy, HitTest, ThresholdHitTest, WeightedHitTest};
use quickcheck_macros::quickcheck;

fn coords(raw: &[(i16, i16)]) -> Vec<Coordinate> {
    raw.iter().map(|&(p, s)| Coordinate::new(f64::from(p), f64::from(s))).collect()
}

#[quickcheck]
fn empty_series_never_hits(p: i32, s: i32, weighted: bool) -> bool {
    let policy = if weighted { HitPolicy::from(WeightedHitTest::default()) } else { HitPolicy::default() };
    let series = DraggableSeries::from_coordinates(Vec::<Coordinate>::new(), policy);
    series.nearest_point((f64::from(p), f64::from(s))).is_none()
}

#[quickcheck]
fn threshold_hit_is_last_qualifying(raw: Vec<(i16, i16)>, target: (i16, i16), dp: u8, ds: u8) -> bool {
    let hit = ThresholdHitTest { max_primary_delta: f64::from(dp), max_secondary_delta: f64::from(ds) };
    let series = DraggableSeries::from_coordinates(coords(&raw), hit);
    let t = Coordinate::new(f64::from(target.0), f64::from(target.1));

    let expected = series
        .points()
        .iter()
        .rev()
        .find(|p| {
            (p.primary() - t.primary).abs() < f64::from(dp) && (p.secondary() - t.secondary).abs() < f64::from(ds)
        })
        .map(|p| p.id());
    series.nearest_point(t).map(|p| p.id()) == expected
}

#[quickcheck]
fn weighted_hit_is_first_minimum(raw: Vec<(i16, i16)>, target: (i16, i16), w1: u8, w2: u8) -> bool {
    let w = WeightedHitTest { primary_weight: f64::from(w1) / 10.0, secondary_weight: f64::from(w2) / 10.0 };
    let points: Vec<DataPoint> = coords(&raw).into_iter().map(DataPoint::from).collect();
    let t = Coordinate::new(f64::from(target.0), f64::from(target.1));
    match w.nearest(&points, t) {
        None => points.is_empty(),
        Some(i) => {
            let best = w.score(&points[i], t);
            points[..i].iter().all(|p| w.score(p, t) > best) && points[i..].iter().all(|p| w.score(p, t) >= best)
        }
    }
}

#[quickcheck]
fn update_touches_only_dragged_point(raw: Vec<(i16, i16)>, pick: usize, to: (i16, i16)) -> bool {
    if raw.is_empty() {
        return true;
    }
    let mut series = DraggableSeries::from_coordinates(coords(&raw), HitPolicy::from(WeightedHitTest::default()));
    let before: Vec<Coordinate> = series.points().iter().map(|p| p.coordinate()).collect();
    let target = before[pick % before.len()];
    let Some(id) = series.begin_drag(target) else { return false };
    let dest = Coordinate::new(f64::from(to.0), f64::from(to.1));
    series.update_drag(dest);

    series.points().iter().zip(&before).all(|(p, &old)| {
        if p.id() == id { p.coordinate() == dest } else { p.coordinate() == old }
    })
}

#[quickcheck]
fn end_drag_clears_every_highlight(raw: Vec<(i16, i16)>, pick: usize) -> bool {
    if raw.is_empty() {
        return true;
    }
    let mut series = DraggableSeries::from_coordinates(coords(&raw), HitPolicy::from(WeightedHitTest::default()));
    let target = series.points()[pick % raw.len()].coordinate();
    series.begin_drag(target);
    series.end_drag();
    series.points().iter().all(|p| !series.is_dragging(p))
}

#[quickcheck]
fn begin_twice_keeps_identity(raw: Vec<(i16, i16)>, a: (i16, i16), b: (i16, i16)) -> bool {
    let mut series = DraggableSeries::from_coordinates(coords(&raw), HitPolicy::from(WeightedHitTest::default()));
    let first = series.begin_drag((f64::from(a.0), f64::from(a.1)));
    let second = series.begin_drag((f64::from(b.0), f64::from(b.1)));
    first == second && series.dragged_id() == first
}
