// Smooths a short demand series with every method and prints the results.
// Run with RUST_LOG=smooth_math=debug to see the library's trace events.
use smoothing_workspace::{
    double_exponential_smoothing, exponential_smoothing, forecast, moving_average, Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smooth_series=info,smooth_math=info".into()),
        )
        .init();

    let demand = [71.0, 70.0, 69.0, 68.0, 64.0, 65.0, 72.0, 78.0, 75.0, 75.0, 75.0, 70.0];
    tracing::info!("smoothing {} observations", demand.len());

    println!("=== Single Moving Average (window=3) ===");
    for (i, value) in moving_average(&demand, 3)?.iter().enumerate() {
        println!("{:>2}: {:>6} -> {}", i, demand[i], value);
    }

    println!("\n=== Single Exponential Smoothing (alpha=0.3) ===");
    for (i, value) in exponential_smoothing(&demand, 0.3)?.iter().enumerate() {
        println!("{:>2}: {:>6} -> {}", i, demand[i], value);
    }

    println!("\n=== Double Exponential Smoothing (alpha=0.5, gamma=0.3) ===");
    for (i, value) in double_exponential_smoothing(&demand, 0.5, 0.3)?
        .iter()
        .enumerate()
    {
        println!("{:>2}: {:>6} -> {:.3}", i, demand[i], value);
    }

    println!("\n=== LASP Forecast (alpha=0.5, gamma=0.3, periods=4) ===");
    for (step, value) in forecast(&demand, 0.5, 0.3, 4)?.iter().enumerate() {
        println!("t+{}: {:.3}", step + 1, value);
    }

    Ok(())
}
