use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use rstest::rstest;
use smooth_math::{
    defined_values, double_exponential_smoothing, exponential_smoothing, fit_holt, forecast,
    moving_average, Smoothed,
};

fn create_test_series() -> Vec<f64> {
    vec![100.0, 102.0, 104.0, 103.0, 105.0, 108.0, 107.0, 110.0]
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(5)]
#[case(8)]
fn test_moving_average_shape(#[case] window: usize) {
    let series = create_test_series();
    let smoothed = moving_average(&series, window).unwrap();

    assert_eq!(smoothed.len(), series.len());
    assert!(smoothed[..window - 1].iter().all(|value| value.is_undefined()));
    assert_eq!(defined_values(&smoothed).len(), series.len() - window + 1);

    for i in window - 1..series.len() {
        let expected = series[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
        assert_relative_eq!(smoothed[i].value().unwrap(), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_moving_average_scenario() {
    let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();

    assert_eq!(
        smoothed,
        vec![
            Smoothed::Undefined,
            Smoothed::Defined(1.5),
            Smoothed::Defined(2.5),
            Smoothed::Defined(3.5),
            Smoothed::Defined(4.5),
        ]
    );
}

#[test]
fn test_moving_average_window_one_matches_series() {
    let series = create_test_series();
    let smoothed = moving_average(&series, 1).unwrap();

    assert_eq!(defined_values(&smoothed), series);
}

#[rstest]
#[case(0.1)]
#[case(0.5)]
#[case(0.9)]
#[case(1.0)]
fn test_exponential_smoothing_seed(#[case] alpha: f64) {
    let series = create_test_series();
    let smoothed = exponential_smoothing(&series, alpha).unwrap();

    assert_eq!(smoothed.len(), series.len());
    assert_eq!(smoothed[0], Smoothed::Undefined);
    assert_eq!(smoothed[1], Smoothed::Defined(series[0]));

    for i in 2..series.len() {
        let previous = smoothed[i - 1].value().unwrap();
        let expected = alpha * series[i - 1] + (1.0 - alpha) * previous;
        assert_relative_eq!(smoothed[i].value().unwrap(), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_exponential_smoothing_full_weight() {
    let series = create_test_series();
    let smoothed = exponential_smoothing(&series, 1.0).unwrap();

    assert_eq!(defined_values(&smoothed), series[..series.len() - 1].to_vec());
}

#[test]
fn test_exponential_smoothing_scenario() {
    let smoothed = exponential_smoothing(&[10.0, 20.0, 30.0], 0.5).unwrap();

    assert_eq!(
        smoothed,
        vec![Smoothed::Undefined, Smoothed::Defined(10.0), Smoothed::Defined(15.0)]
    );
}

#[rstest]
#[case(0.2, 0.1)]
#[case(0.5, 0.5)]
#[case(0.8, 0.3)]
#[case(1.0, 1.0)]
fn test_double_exponential_smoothing_shape(#[case] alpha: f64, #[case] gamma: f64) {
    let series = create_test_series();
    let level = double_exponential_smoothing(&series, alpha, gamma).unwrap();

    assert_eq!(level.len(), series.len());
    assert_eq!(level[0], series[0]);
    assert!(level.iter().all(|value| value.is_finite()));
}

#[test]
fn test_double_exponential_smoothing_scenario() {
    let level = double_exponential_smoothing(&[1.0, 2.0, 3.0], 0.5, 0.5).unwrap();
    assert_eq!(level, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_double_exponential_smoothing_matches_fit() {
    let series = create_test_series();
    let fit = fit_holt(&series, 0.4, 0.3).unwrap();
    let level = double_exponential_smoothing(&series, 0.4, 0.3).unwrap();

    assert_eq!(level.as_slice(), fit.level());
    assert_eq!(fit.trend().len(), series.len());
    assert_eq!(fit.trend()[0], series[1] - series[0]);
}

#[test]
fn test_holt_follows_trend_better_than_single_smoothing() {
    let series: Vec<f64> = (0..20).map(|i| 2.0 * i as f64).collect();
    let single = exponential_smoothing(&series, 0.5).unwrap();
    let double = double_exponential_smoothing(&series, 0.5, 0.5).unwrap();

    let last = series.len() - 1;
    let single_gap = (series[last] - single[last].value().unwrap()).abs();
    let double_gap = (series[last] - double[last]).abs();
    assert!(double_gap < single_gap);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(10)]
fn test_forecast_length(#[case] periods: usize) {
    let ahead = forecast(&create_test_series(), 0.5, 0.5, periods).unwrap();
    assert_eq!(ahead.len(), periods);
}

#[test]
fn test_forecast_is_straight_line() {
    let series = create_test_series();
    let slope = fit_holt(&series, 0.7, 0.2).unwrap().final_trend();
    let ahead = forecast(&series, 0.7, 0.2, 6).unwrap();

    assert_relative_eq!(ahead[0], series[series.len() - 1] + slope, epsilon = 1e-9);
    for pair in ahead.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], slope, epsilon = 1e-9);
    }
}

#[test]
fn test_forecast_scenario() {
    assert_eq!(forecast(&[1.0, 2.0, 3.0], 0.5, 0.5, 2).unwrap(), vec![4.0, 5.0]);
}

#[test]
fn test_inputs_are_not_mutated() {
    let series = create_test_series();
    let copy = series.clone();

    moving_average(&series, 3).unwrap();
    exponential_smoothing(&series, 0.3).unwrap();
    double_exponential_smoothing(&series, 0.3, 0.3).unwrap();
    forecast(&series, 0.3, 0.3, 4).unwrap();

    assert_eq!(series, copy);
}
