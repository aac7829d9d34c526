//! # Smooth Math
//!
//! Smoothing and short-horizon forecasting for univariate time series.
//! This crate provides:
//! - Single moving average
//! - Single exponential smoothing
//! - Double exponential smoothing (Holt's linear trend method)
//! - LASP forecasting, a straight-line extrapolation of Holt's fitted trend
//!
//! Every function takes a read-only slice and returns a freshly allocated
//! sequence. Positions that cannot be computed yet are reported as
//! [`Smoothed::Undefined`] rather than NaN.
//!
//! ```
//! use smooth_math::{forecast, moving_average, Smoothed};
//!
//! let averaged = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
//! assert_eq!(averaged[0], Smoothed::Undefined);
//! assert_eq!(averaged[1], Smoothed::Defined(1.5));
//!
//! let ahead = forecast(&[1.0, 2.0, 3.0], 0.5, 0.5, 2).unwrap();
//! assert_eq!(ahead, vec![4.0, 5.0]);
//! ```

use thiserror::Error;

pub mod exponential;
pub mod forecasting;
pub mod moving_averages;
pub mod params;
pub mod smoothed;

mod validation;

pub use crate::exponential::{
    double_exponential_smoothing, exponential_smoothing, fit_holt, HoltFit,
};
pub use crate::forecasting::forecast;
pub use crate::moving_averages::moving_average;
pub use crate::params::{
    ExponentialConfig, ForecastConfig, HoltConfig, MovingAverageConfig, SmoothingFactor,
};
pub use crate::smoothed::{defined_values, Smoothed};

/// Errors that can occur in smoothing and forecasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmoothingError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for smoothing operations
pub type Result<T> = std::result::Result<T, SmoothingError>;
