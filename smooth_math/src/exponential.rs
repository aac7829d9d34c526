//! Exponential smoothing implementations
//!
//! Contains:
//! - Single exponential smoothing
//! - Double exponential smoothing (Holt's linear trend method)
//!
//! Both weight past observations with exponentially decreasing weights.
//! Holt's method also carries a trend estimate, which lets it follow
//! sustained movement that single smoothing lags behind.

use crate::validation::{require_factor, require_finite, require_len, MIN_EXPONENTIAL_LEN};
use crate::{Result, Smoothed};

/// Smooth a series with single exponential smoothing.
///
/// Position 0 is [`Smoothed::Undefined`] and position 1 is seeded with
/// `series[0]`. From position 2 on, each output smooths the *previous*
/// observation into the previous output:
///
/// `output[i] = alpha * series[i - 1] + (1 - alpha) * output[i - 1]`
///
/// Requires at least two observations and `alpha` in (0, 1].
pub fn exponential_smoothing(series: &[f64], alpha: f64) -> Result<Vec<Smoothed>> {
    let alpha = require_factor("alpha", alpha)?;
    require_len("exponential smoothing", series, MIN_EXPONENTIAL_LEN)?;
    require_finite("exponential smoothing", series)?;
    tracing::debug!(len = series.len(), alpha, "computing exponential smoothing");

    let mut smoothed = Vec::with_capacity(series.len());
    smoothed.push(Smoothed::Undefined);

    // S2 = y1
    let mut current = series[0];
    smoothed.push(Smoothed::Defined(current));

    for &previous in &series[1..series.len() - 1] {
        current = alpha * previous + (1.0 - alpha) * current;
        smoothed.push(Smoothed::Defined(current));
    }

    Ok(smoothed)
}

/// Level and trend sequences fitted by Holt's method
#[derive(Debug, Clone, PartialEq)]
pub struct HoltFit {
    level: Vec<f64>,
    trend: Vec<f64>,
}

impl HoltFit {
    /// Smoothed level at every position of the input series
    pub fn level(&self) -> &[f64] {
        &self.level
    }

    /// Smoothed per-step trend at every position of the input series
    pub fn trend(&self) -> &[f64] {
        &self.trend
    }

    /// Level at the last observation
    pub fn final_level(&self) -> f64 {
        // a fit always covers at least two observations
        self.level[self.level.len() - 1]
    }

    /// Trend at the last observation
    pub fn final_trend(&self) -> f64 {
        self.trend[self.trend.len() - 1]
    }

    /// Extend a straight line from `anchor`, stepping by the final trend.
    ///
    /// Step `j` is the previous step plus [`final_trend`](Self::final_trend),
    /// with `anchor` as step 0. The anchor itself is not returned.
    pub fn extrapolate(&self, anchor: f64, periods: usize) -> Vec<f64> {
        let slope = self.final_trend();

        std::iter::successors(Some(anchor), |previous| Some(previous + slope))
            .skip(1)
            .take(periods)
            .collect()
    }

    /// Consume the fit, keeping only the level sequence
    pub fn into_level(self) -> Vec<f64> {
        self.level
    }
}

/// Fit Holt's linear trend method to a series.
///
/// Seeds `level[0] = series[0]` and `trend[0] = series[1] - series[0]`, then
/// for each later position:
///
/// ```text
/// level[i] = alpha * series[i] + (1 - alpha) * (level[i-1] + trend[i-1])
/// trend[i] = gamma * (level[i] - level[i-1]) + (1 - gamma) * trend[i-1]
/// ```
///
/// Requires at least two observations and both constants in (0, 1].
pub fn fit_holt(series: &[f64], alpha: f64, gamma: f64) -> Result<HoltFit> {
    let alpha = require_factor("alpha", alpha)?;
    let gamma = require_factor("gamma", gamma)?;
    require_len("double exponential smoothing", series, MIN_EXPONENTIAL_LEN)?;
    require_finite("double exponential smoothing", series)?;
    tracing::debug!(len = series.len(), alpha, gamma, "fitting holt level and trend");

    let mut level = Vec::with_capacity(series.len());
    let mut trend = Vec::with_capacity(series.len());

    let mut prev_level = series[0];
    let mut prev_trend = series[1] - series[0];
    level.push(prev_level);
    trend.push(prev_trend);

    for &value in &series[1..] {
        let new_level = alpha * value + (1.0 - alpha) * (prev_level + prev_trend);
        let new_trend = gamma * (new_level - prev_level) + (1.0 - gamma) * prev_trend;

        level.push(new_level);
        trend.push(new_trend);
        prev_level = new_level;
        prev_trend = new_trend;
    }

    Ok(HoltFit { level, trend })
}

/// Smooth a series with Holt's double exponential smoothing.
///
/// Returns the fitted level, one value per observation with no undefined
/// positions. See [`fit_holt`] for the recurrence and preconditions.
///
/// ```
/// use smooth_math::double_exponential_smoothing;
///
/// let level = double_exponential_smoothing(&[1.0, 2.0, 3.0], 0.5, 0.5).unwrap();
/// assert_eq!(level, vec![1.0, 2.0, 3.0]);
/// ```
pub fn double_exponential_smoothing(series: &[f64], alpha: f64, gamma: f64) -> Result<Vec<f64>> {
    fit_holt(series, alpha, gamma).map(HoltFit::into_level)
}
