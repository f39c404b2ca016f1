// File: crates/dragchart-core/src/axis.rs
// Summary: Axis extents over a series and derived label count.

use crate::error::{ChartError, Result};
use crate::hit_test::HitTest;
use crate::point::DataPoint;
use crate::series::DraggableSeries;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Primary,
    Secondary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Extents of one coordinate over `series`. `None` when the series has no
    /// finite values on that axis.
    pub fn fit<H: HitTest>(label: impl Into<String>, series: &DraggableSeries<H>, kind: AxisKind) -> Option<Self> {
        let value = |p: &DataPoint| match kind {
            AxisKind::Primary => p.primary(),
            AxisKind::Secondary => p.secondary(),
        };
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in series.points().iter().map(value).filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        Some(Self::new(label, min, max))
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// `floor((max - min) / step) + 1`.
    pub fn label_count(&self, step: f64) -> Result<usize> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ChartError::InvalidStep(step));
        }
        let n = (self.span().max(0.0) / step).floor();
        // usize::MAX as f64 rounds up, so `>=` also rejects usize::MAX itself
        if !n.is_finite() || n >= usize::MAX as f64 {
            return Err(ChartError::TooManyLabels { span: self.span(), step });
        }
        Ok(n as usize + 1)
    }
}
