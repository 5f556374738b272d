//! # ag-labeling: Indicator & Labeling Engine
//!
//! Derives technical indicators and forward-looking trade labels from a daily
//! bar series, producing a labeled dataset for later analysis or model
//! training.
//!
//! ## Core Components
//!
//! - **Indicator Calculator**: moving average, Wilder RSI and MACD, aligned
//!   one row per input bar with warm-up rows left empty
//! - **Signal Labeler**: forward return over a holding period classified into
//!   BUY / SELL / HOLD; bars without a full horizon are dropped
//! - **Pipeline**: inner join of both outputs by timestamp
//! - **Batch driver**: independent per-instrument runs over a [`BarSource`]
//!
//! ## Example Usage
//!
//! ```rust
//! use ag_labeling::{pipeline, BarSeries, PipelineConfig, Signal};
//! use chrono::{Duration, NaiveDate};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let closes = [100.0, 102.0, 98.0, 110.0, 90.0];
//! let bars = BarSeries::from_closes(
//!     "BTC-USD",
//!     closes.iter().enumerate().map(|(i, &c)| (start + Duration::days(i as i64), c)),
//! )
//! .unwrap();
//!
//! let yaml = r#"
//! indicators:
//!   sma_window: 2
//!   rsi_window: 2
//!   macd_fast: 1
//!   macd_slow: 2
//!   macd_signal: 2
//! labeling:
//!   holding_period: 2
//! "#;
//! let config = PipelineConfig::from_yaml(yaml).unwrap();
//!
//! let rows = pipeline::run(&bars, &config).unwrap();
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[1].labeled.signal, Signal::Buy);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod labeler;
pub mod pipeline;
pub mod series;
pub mod summary;
pub mod types;

// Indicator implementations live next to src/
#[path = "../indicators/mod.rs"]
pub mod indicators;

// Re-export main types
pub use batch::{label_instruments, BarSource, BatchOptions, InMemorySource, InstrumentOutcome};
pub use config::{IndicatorParams, LabelingParams, PipelineConfig};
pub use error::{LabelingError, LabelingResult};
pub use indicators::compute;
pub use labeler::label;
pub use pipeline::run;
pub use series::{Bar, BarSeries};
pub use summary::LabelSummary;
pub use types::{IndicatorRow, IndicatorSeries, LabeledBar, LabeledRow, Signal};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing subscriber (for examples and tests)
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ag_labeling=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .init();
}
