//! Example: labeling several instruments in parallel
//!
//! Generates synthetic daily random walks for a few crypto pairs, runs the
//! indicator and labeling pipeline for each on its own task, and prints the
//! last rows plus the label distribution per instrument.
//!
//! Pass a YAML config path as the first argument to override the defaults.

use ag_labeling::{
    label_instruments, BarSeries, BatchOptions, InMemorySource, LabelSummary, PipelineConfig,
    Signal,
};
use anyhow::Context;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

fn random_walk(symbol: &str, start_price: f64, days: usize, seed: u64) -> anyhow::Result<BarSeries> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).context("invalid start date")?;

    let mut price = start_price;
    let closes = (0..days).map(|i| {
        price *= 1.0 + rng.gen_range(-0.04..0.045);
        (start + Duration::days(i as i64), price)
    });

    Ok(BarSeries::from_closes(symbol, closes)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ag_labeling::init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => PipelineConfig::from_yaml_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => PipelineConfig::default(),
    };

    println!("=== Indicator & Labeling Pipeline ===\n");
    println!("Indicators: {:?}", config.indicators);
    println!("Labeling:   {:?}\n", config.labeling);

    let instruments = [
        ("BTC-USD", 7200.0, 1),
        ("ETH-USD", 130.0, 2),
        ("SOL-USD", 1.5, 3),
    ];

    let mut source = InMemorySource::new();
    for (symbol, price, seed) in instruments {
        source.insert(random_walk(symbol, price, 400, seed)?);
    }

    let symbols: Vec<String> = instruments.iter().map(|(s, _, _)| s.to_string()).collect();
    let options = BatchOptions {
        instrument_timeout: Some(std::time::Duration::from_secs(30)),
    };

    let outcomes = label_instruments(Arc::new(source), &symbols, &config, &options).await;

    for outcome in outcomes {
        let rows = match outcome.result {
            Ok(rows) => rows,
            Err(e) => {
                println!("{}: failed: {}\n", outcome.symbol, e);
                continue;
            }
        };

        println!("{} ({} labeled rows)", outcome.symbol, rows.len());
        println!(
            "  {:<10} {:>12} {:>12} {:>8} {:>10} {:>9} {:>6}",
            "date", "close", "sma", "rsi", "macd_hist", "fwd_ret", "signal"
        );
        for row in rows.iter().rev().take(5).rev() {
            let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |x| format!("{:.2}", x));
            println!(
                "  {:<10} {:>12.2} {:>12} {:>8} {:>10} {:>8.2}% {:>6}",
                row.timestamp,
                row.labeled.bar.close,
                fmt(row.indicators.moving_average),
                fmt(row.indicators.oscillator),
                fmt(row.indicators.convergence_histogram),
                row.labeled.future_return * 100.0,
                row.labeled.signal,
            );
        }

        let summary = LabelSummary::from_rows(&rows);
        println!(
            "  BUY {:.1}%  SELL {:.1}%  HOLD {:.1}%  mean forward return {:.3}%\n",
            summary.fraction(Signal::Buy) * 100.0,
            summary.fraction(Signal::Sell) * 100.0,
            summary.fraction(Signal::Hold) * 100.0,
            summary.mean_future_return.unwrap_or(0.0) * 100.0,
        );
    }

    Ok(())
}
