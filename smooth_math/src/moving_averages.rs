//! Single moving average
//!
//! Every observation in the trailing window carries equal weight.

use crate::validation::{require_finite, require_window};
use crate::{Result, Smoothed};

/// Smooth a series with a trailing simple moving average.
///
/// The output has the same length as `series`. The first `window - 1`
/// positions are [`Smoothed::Undefined`]; position `i` after that holds the
/// mean of `series[i + 1 - window..=i]`.
///
/// Fails with `InvalidInput` when `window` is zero or longer than the series.
///
/// ```
/// use smooth_math::{moving_average, Smoothed};
///
/// let smoothed = moving_average(&[2.0, 4.0, 6.0, 8.0], 3).unwrap();
/// assert_eq!(
///     smoothed,
///     vec![Smoothed::Undefined, Smoothed::Undefined, Smoothed::Defined(4.0), Smoothed::Defined(6.0)]
/// );
/// ```
pub fn moving_average(series: &[f64], window: usize) -> Result<Vec<Smoothed>> {
    require_window(series, window)?;
    require_finite("moving average", series)?;
    tracing::debug!(len = series.len(), window, "computing moving average");

    let mut smoothed = Vec::with_capacity(series.len());
    smoothed.resize(window - 1, Smoothed::Undefined);
    smoothed.extend(
        series
            .windows(window)
            .map(|values| Smoothed::Defined(values.iter().sum::<f64>() / window as f64)),
    );

    Ok(smoothed)
}
