//! # Smoothing workspace
//!
//! Facade over [`smooth_math`], re-exporting its smoothing and forecasting
//! functions at the workspace root.
//!
//! ## Example
//!
//! ```
//! use smoothing_workspace::{exponential_smoothing, Smoothed};
//!
//! let smoothed = exponential_smoothing(&[10.0, 20.0, 30.0], 0.5).unwrap();
//! assert_eq!(smoothed, vec![Smoothed::Undefined, Smoothed::Defined(10.0), Smoothed::Defined(15.0)]);
//! ```

pub use smooth_math::*;
