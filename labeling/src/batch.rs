//! Per-instrument batch driver
//!
//! Fetches each instrument from a [`BarSource`] and runs the pipeline for it
//! on the blocking pool, one task per instrument. Instruments never share
//! state, and a failure is reported for that instrument only.

use crate::config::PipelineConfig;
use crate::error::{LabelingError, LabelingResult};
use crate::pipeline;
use crate::series::BarSeries;
use crate::summary::LabelSummary;
use crate::types::LabeledRow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Supplier of daily bar series, e.g. a market-data provider client
#[async_trait]
pub trait BarSource: Send + Sync {
    /// Fetch the full bar series for `symbol`
    ///
    /// # Returns
    /// * `Ok(BarSeries)` - Validated, ascending series
    /// * `Err(LabelingError)` - The instrument could not be loaded
    async fn fetch(&self, symbol: &str) -> LabelingResult<BarSeries>;
}

/// Bar source backed by series already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    series: HashMap<String, BarSeries>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series under its own symbol
    pub fn insert(&mut self, series: BarSeries) {
        self.series.insert(series.symbol().to_string(), series);
    }

    pub fn with_series(mut self, series: BarSeries) -> Self {
        self.insert(series);
        self
    }
}

#[async_trait]
impl BarSource for InMemorySource {
    async fn fetch(&self, symbol: &str) -> LabelingResult<BarSeries> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| LabelingError::SourceError {
                symbol: symbol.to_string(),
                message: "no data loaded".to_string(),
            })
    }
}

/// Batch driver options
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Upper bound on fetch plus pipeline time for a single instrument
    pub instrument_timeout: Option<Duration>,
}

/// Result of running the pipeline for one instrument
#[derive(Debug)]
pub struct InstrumentOutcome {
    pub symbol: String,
    pub result: LabelingResult<Vec<LabeledRow>>,
}

impl InstrumentOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Label distribution for a successful instrument
    pub fn summary(&self) -> Option<LabelSummary> {
        self.result.as_ref().ok().map(|rows| LabelSummary::from_rows(rows))
    }
}

/// Run the pipeline for every symbol, one task per instrument
///
/// Outcomes are returned in the order of `symbols`.
pub async fn label_instruments(
    source: Arc<dyn BarSource>,
    symbols: &[String],
    config: &PipelineConfig,
    options: &BatchOptions,
) -> Vec<InstrumentOutcome> {
    let handles: Vec<_> = symbols
        .iter()
        .map(|symbol| {
            let source = Arc::clone(&source);
            let symbol = symbol.clone();
            let config = config.clone();
            let timeout = options.instrument_timeout;

            tokio::spawn(async move {
                let work = label_one(source, symbol.clone(), config);
                match timeout {
                    Some(limit) => match tokio::time::timeout(limit, work).await {
                        Ok(result) => result,
                        Err(_) => Err(LabelingError::TaskFailed(format!(
                            "{} timed out after {:?}",
                            symbol, limit
                        ))),
                    },
                    None => work.await,
                }
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(symbols.len());
    for (symbol, handle) in symbols.iter().zip(handles) {
        let result = match handle.await {
            Ok(result) => result,
            Err(join_err) => Err(LabelingError::from(join_err)),
        };

        match &result {
            Ok(rows) => {
                let summary = LabelSummary::from_rows(rows);
                info!(
                    symbol = %symbol,
                    rows = rows.len(),
                    buy = summary.buy,
                    sell = summary.sell,
                    hold = summary.hold,
                    "instrument labeled"
                );
            }
            Err(e) => warn!(symbol = %symbol, error = %e, "instrument failed"),
        }

        outcomes.push(InstrumentOutcome {
            symbol: symbol.clone(),
            result,
        });
    }

    outcomes
}

async fn label_one(
    source: Arc<dyn BarSource>,
    symbol: String,
    config: PipelineConfig,
) -> LabelingResult<Vec<LabeledRow>> {
    let bars = source.fetch(&symbol).await?;
    tokio::task::spawn_blocking(move || pipeline::run(&bars, &config)).await?
}
