// File: crates/dragchart-core/src/lib.rs
// Summary: Core library entry point; exports the draggable series and its hit-test strategies.

pub mod axis;
pub mod error;
pub mod fixtures;
pub mod gesture;
pub mod point;
pub mod series;
pub mod types;

pub use axis::{Axis, AxisKind};
pub use error::{ChartError, Result};
pub use gesture::{GestureController, GestureOutcome, PointerEvent};
pub use hit_test::{HitPolicy, HitTest, ThresholdHitTest, WeightedHitTest};
pub use point::{DataPoint, PointId};
pub use series::{DraggableSeries, RenderPoint};
pub use types::Coordinate;
