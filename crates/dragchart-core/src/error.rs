// File: crates/dragchart-core/src/error.rs
// Summary: Error type for configuration that cannot be represented as absence.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

/// Configuration errors. Lookups that find nothing return `None` instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// A hit-test threshold was negative, NaN or infinite.
    #[error("invalid {axis} threshold: {value} (must be finite and >= 0)")]
    InvalidThreshold { axis: &'static str, value: f64 },

    /// A hit-test weight was negative, NaN or infinite.
    #[error("invalid {axis} weight: {value} (must be finite and >= 0)")]
    InvalidWeight { axis: &'static str, value: f64 },

    /// Axis label step must be strictly positive.
    #[error("invalid axis step: {0} (must be finite and > 0)")]
    InvalidStep(f64),

    /// The axis span divided by the step does not fit a label count.
    #[error("too many axis labels: span {span} with step {step}")]
    TooManyLabels { span: f64, step: f64 },
}
