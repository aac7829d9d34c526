//! Fail-fast checks shared by every smoothing entry point.
//!
//! Checks run before any output is allocated and return on the first
//! violation found.

use crate::{Result, SmoothingError};

/// Minimum observations needed by the exponential methods.
pub(crate) const MIN_EXPONENTIAL_LEN: usize = 2;

/// Ensure the series holds at least `required` observations.
pub(crate) fn require_len(method: &str, series: &[f64], required: usize) -> Result<()> {
    if series.len() < required {
        tracing::warn!(method, required, actual = series.len(), "series too short");
        return Err(SmoothingError::InsufficientData(format!(
            "{} needs at least {} values, have {}",
            method,
            required,
            series.len()
        )));
    }

    Ok(())
}

/// Ensure every observation is a finite number.
pub(crate) fn require_finite(method: &str, series: &[f64]) -> Result<()> {
    match series.iter().position(|value| !value.is_finite()) {
        Some(index) => {
            tracing::warn!(method, index, "non-finite observation");
            Err(SmoothingError::InvalidInput(format!(
                "{} received non-finite observation series[{}]={}",
                method, index, series[index]
            )))
        }
        None => Ok(()),
    }
}

/// Ensure a smoothing constant lies in (0, 1].
pub(crate) fn require_factor(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        tracing::warn!(parameter = name, value, "smoothing constant out of range");
        return Err(SmoothingError::InvalidInput(format!(
            "{} must be in (0, 1], got {}",
            name, value
        )));
    }

    Ok(value)
}

/// Ensure a moving-average window fits inside the series.
pub(crate) fn require_window(series: &[f64], window: usize) -> Result<()> {
    if window == 0 {
        tracing::warn!(window, "moving average window is zero");
        return Err(SmoothingError::InvalidInput(
            "Window must be greater than zero".to_string(),
        ));
    }
    if window > series.len() {
        tracing::warn!(window, actual = series.len(), "window longer than series");
        return Err(SmoothingError::InvalidInput(format!(
            "Window {} exceeds series length {}",
            window,
            series.len()
        )));
    }

    Ok(())
}
