//! LASP forecasting
//!
//! Fits Holt's linear trend method and extends the last observation along
//! the final fitted trend.

use crate::exponential::fit_holt;
use crate::Result;

/// Forecast `periods` future values with double exponential smoothing.
///
/// The series is fitted exactly as in
/// [`double_exponential_smoothing`](crate::double_exponential_smoothing).
/// Starting from the last observation, each forecast step adds the trend
/// fitted at the last observation, so successive forecasts lie on a straight
/// line. `periods == 0` yields an empty vector.
///
/// ```
/// use smooth_math::forecast;
///
/// assert_eq!(forecast(&[1.0, 2.0, 3.0], 0.5, 0.5, 2).unwrap(), vec![4.0, 5.0]);
/// assert!(forecast(&[1.0, 2.0, 3.0], 0.5, 0.5, 0).unwrap().is_empty());
/// ```
pub fn forecast(series: &[f64], alpha: f64, gamma: f64, periods: usize) -> Result<Vec<f64>> {
    let fit = fit_holt(series, alpha, gamma)?;
    let last = series[series.len() - 1];
    tracing::debug!(periods, anchor = last, slope = fit.final_trend(), "extrapolating forecast");

    Ok(fit.extrapolate(last, periods))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SmoothingError;
    use approx::assert_relative_eq;

    #[test]
    fn test_forecast_linear_series() {
        assert_eq!(forecast(&[1.0, 2.0, 3.0], 0.5, 0.5, 2).unwrap(), vec![4.0, 5.0]);
    }

    #[test]
    fn test_forecast_starts_from_last_observation() {
        let series = [10.0, 12.0, 11.0, 15.0, 14.0];
        let slope = fit_holt(&series, 0.6, 0.4).unwrap().final_trend();
        let ahead = forecast(&series, 0.6, 0.4, 3).unwrap();

        assert_eq!(ahead.len(), 3);
        assert_relative_eq!(ahead[0], 14.0 + slope, epsilon = 1e-12);
        for pair in ahead.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], slope, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_forecast_zero_periods() {
        assert!(forecast(&[3.0, 1.0], 0.2, 0.9, 0).unwrap().is_empty());
    }

    #[test]
    fn test_forecast_requires_two_values() {
        assert!(matches!(
            forecast(&[3.0], 0.5, 0.5, 4),
            Err(SmoothingError::InsufficientData(_))
        ));
        assert!(forecast(&[], 0.5, 0.5, 0).is_err());
    }
}
