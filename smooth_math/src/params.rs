//! Parameter sets for the smoothing methods
//!
//! Each config validates on construction and can be loaded with `serde`.
//! A config only describes how to smooth; it never carries fitted state.

use crate::validation::require_factor;
use crate::{Result, Smoothed, SmoothingError};
use serde::{Deserialize, Serialize};

/// A smoothing constant in (0, 1]
///
/// Higher values weight recent observations more heavily.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SmoothingFactor(f64);

impl SmoothingFactor {
    /// Create a smoothing constant, rejecting values outside (0, 1]
    pub fn new(value: f64) -> Result<Self> {
        require_factor("smoothing factor", value).map(Self)
    }

    /// Get the raw constant
    pub fn get(self) -> f64 {
        self.0
    }

    /// Weight given to the previous estimate, `1 - factor`
    pub fn complement(self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for SmoothingFactor {
    type Error = SmoothingError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SmoothingFactor> for f64 {
    fn from(factor: SmoothingFactor) -> Self {
        factor.0
    }
}

/// Single moving average parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingAverageConfig {
    /// Number of trailing observations averaged
    pub window: usize,
}

impl MovingAverageConfig {
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(SmoothingError::InvalidInput(
                "Window must be greater than zero".to_string(),
            ));
        }

        Ok(Self { window })
    }

    pub fn apply(&self, series: &[f64]) -> Result<Vec<Smoothed>> {
        crate::moving_average(series, self.window)
    }
}

/// Single exponential smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialConfig {
    pub alpha: SmoothingFactor,
}

impl ExponentialConfig {
    pub fn new(alpha: f64) -> Result<Self> {
        Ok(Self {
            alpha: require_factor("alpha", alpha).map(SmoothingFactor)?,
        })
    }

    pub fn apply(&self, series: &[f64]) -> Result<Vec<Smoothed>> {
        crate::exponential_smoothing(series, self.alpha.get())
    }
}

/// Holt's double exponential smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoltConfig {
    /// Level smoothing constant
    pub alpha: SmoothingFactor,
    /// Trend smoothing constant
    pub gamma: SmoothingFactor,
}

impl HoltConfig {
    pub fn new(alpha: f64, gamma: f64) -> Result<Self> {
        Ok(Self {
            alpha: require_factor("alpha", alpha).map(SmoothingFactor)?,
            gamma: require_factor("gamma", gamma).map(SmoothingFactor)?,
        })
    }

    /// Smooth the series, returning the fitted level
    pub fn apply(&self, series: &[f64]) -> Result<Vec<f64>> {
        crate::double_exponential_smoothing(series, self.alpha.get(), self.gamma.get())
    }

    /// Fit the series, keeping both level and trend
    pub fn fit(&self, series: &[f64]) -> Result<crate::HoltFit> {
        crate::fit_holt(series, self.alpha.get(), self.gamma.get())
    }
}

/// LASP forecast parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(flatten)]
    pub holt: HoltConfig,
    /// Number of future steps to produce
    pub periods: usize,
}

impl ForecastConfig {
    pub fn new(alpha: f64, gamma: f64, periods: usize) -> Result<Self> {
        Ok(Self {
            holt: HoltConfig::new(alpha, gamma)?,
            periods,
        })
    }

    pub fn apply(&self, series: &[f64]) -> Result<Vec<f64>> {
        crate::forecast(
            series,
            self.holt.alpha.get(),
            self.holt.gamma.get(),
            self.periods,
        )
    }
}
