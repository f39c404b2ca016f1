// File: crates/demo/src/scale.rs
// Summary: Pixel <-> data mapping for the plot area (the renderer's side of the boundary).

use dragchart_core::{Axis, Coordinate};

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // matches the 15px plot padding around the chart
        Self::new(15, 15, 15, 15)
    }
}

/// Linear map between a data range and a pixel range. `inverted` flips the
/// direction so larger values sit nearer `lo_px` (screen Y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub lo_px: f64,
    pub hi_px: f64,
    pub vmin: f64,
    pub vmax: f64,
    pub inverted: bool,
}

impl LinearScale {
    pub fn new(lo_px: f64, hi_px: f64, vmin: f64, mut vmax: f64, inverted: bool) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { lo_px, hi_px, vmin, vmax, inverted }
    }

    #[inline]
    fn span_px(&self) -> f64 { (self.hi_px - self.lo_px).max(1.0) }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let frac = (v - self.vmin) / (self.vmax - self.vmin);
        if self.inverted {
            self.hi_px - frac * self.span_px()
        } else {
            self.lo_px + frac * self.span_px()
        }
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let frac = if self.inverted {
            (self.hi_px - px) / self.span_px()
        } else {
            (px - self.lo_px) / self.span_px()
        };
        self.vmin + frac * (self.vmax - self.vmin)
    }
}

/// Plot-area mapping for both axes.
#[derive(Clone, Copy, Debug)]
pub struct PlotMapping {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotMapping {
    pub fn new(width: u32, height: u32, insets: Insets, x_axis: &Axis, y_axis: &Axis) -> Self {
        let l = f64::from(insets.left);
        let r = f64::from(width.saturating_sub(insets.right));
        let t = f64::from(insets.top);
        let b = f64::from(height.saturating_sub(insets.bottom));
        Self {
            x: LinearScale::new(l, r, x_axis.min, x_axis.max, false),
            y: LinearScale::new(t, b, y_axis.min, y_axis.max, true),
        }
    }

    pub fn screen_to_data(&self, px: f64, py: f64) -> Coordinate {
        Coordinate::new(self.x.from_px(px), self.y.from_px(py))
    }

    pub fn data_to_screen(&self, c: Coordinate) -> (f64, f64) {
        (self.x.to_px(c.primary), self.y.to_px(c.secondary))
    }
}
