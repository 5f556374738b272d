//! Benchmarks for the indicator and labeling pipeline
//!
//! Run with: cargo bench

use ag_labeling::{compute, label, pipeline, BarSeries, PipelineConfig};
use chrono::{Duration, NaiveDate};

fn main() {
    println!("=== Indicator & Labeling Performance Benchmarks ===\n");

    for days in [1_000usize, 10_000, 100_000] {
        benchmark_series(days);
    }
}

fn synthetic_series(days: usize) -> BarSeries {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let closes = (0..days).map(|i| {
        let price = 100.0 + (i as f64 * 0.01).sin() * 20.0 + (i as f64 * 0.37).cos() * 2.0;
        (start + Duration::days(i as i64), price)
    });
    BarSeries::from_closes("BENCH", closes).unwrap()
}

fn benchmark_series(days: usize) {
    println!("## {} daily bars", days);

    let bars = synthetic_series(days);
    let config = PipelineConfig::default();
    let iterations = 20;

    let start = std::time::Instant::now();
    for _ in 0..iterations {
        let _ = compute(&bars, &config.indicators);
    }
    let elapsed = start.elapsed();
    println!("  Indicators ({} iterations): {:?}", iterations, elapsed);
    println!("  Average: {:?}", elapsed / iterations);

    let start = std::time::Instant::now();
    for _ in 0..iterations {
        let _ = label(&bars, &config.labeling);
    }
    let elapsed = start.elapsed();
    println!("  Labeling ({} iterations): {:?}", iterations, elapsed);
    println!("  Average: {:?}", elapsed / iterations);

    let start = std::time::Instant::now();
    for _ in 0..iterations {
        let _ = pipeline::run(&bars, &config);
    }
    let elapsed = start.elapsed();
    println!("  Full pipeline ({} iterations): {:?}", iterations, elapsed);
    println!("  Average: {:?}", elapsed / iterations);

    println!();
}
