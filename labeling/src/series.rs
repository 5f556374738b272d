//! Daily OHLCV bars and the validated, ordered series the engine consumes

use crate::error::{LabelingError, LabelingResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One OHLCV observation for a single trading day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trading day
    pub timestamp: NaiveDate,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    pub volume: f64,
}

impl Bar {
    /// Bar with all four prices set to `close`, for synthetic series
    pub fn flat(timestamp: NaiveDate, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open: close,
            high: close,
            low: close,
            close,
            volume,
        }
    }
}

/// Ordered bar sequence for one instrument
///
/// Timestamps are strictly increasing. Missing trading days stay missing;
/// the series never interpolates a gap. Construction is the only place the
/// ordering invariant is checked, so every `BarSeries` in circulation is
/// already valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBarSeries")]
pub struct BarSeries {
    symbol: String,
    bars: Vec<Bar>,
}

#[derive(Deserialize)]
struct RawBarSeries {
    symbol: String,
    bars: Vec<Bar>,
}

impl TryFrom<RawBarSeries> for BarSeries {
    type Error = LabelingError;

    fn try_from(raw: RawBarSeries) -> Result<Self, Self::Error> {
        BarSeries::new(raw.symbol, raw.bars)
    }
}

impl BarSeries {
    /// Validate and wrap a bar sequence
    ///
    /// # Errors
    /// `InvalidInput` if the sequence is empty, timestamps are not strictly
    /// increasing, any price or volume is non-finite, or volume is negative.
    pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> LabelingResult<Self> {
        let symbol = symbol.into();

        if bars.is_empty() {
            return Err(LabelingError::InvalidInput(format!(
                "empty bar sequence for {}",
                symbol
            )));
        }

        for bar in &bars {
            let prices = [bar.open, bar.high, bar.low, bar.close, bar.volume];
            if prices.iter().any(|v| !v.is_finite()) {
                return Err(LabelingError::InvalidInput(format!(
                    "non-finite value in bar at {}",
                    bar.timestamp
                )));
            }
            if bar.volume < 0.0 {
                return Err(LabelingError::InvalidInput(format!(
                    "negative volume {} at {}",
                    bar.volume, bar.timestamp
                )));
            }
        }

        if let Some(pair) = bars.windows(2).find(|w| w[1].timestamp <= w[0].timestamp) {
            return Err(LabelingError::InvalidInput(format!(
                "timestamps not strictly increasing: {} followed by {}",
                pair[0].timestamp, pair[1].timestamp
            )));
        }

        Ok(Self { symbol, bars })
    }

    /// Build a series from `(date, close)` pairs with flat OHLC and zero volume
    pub fn from_closes(
        symbol: impl Into<String>,
        closes: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> LabelingResult<Self> {
        let bars = closes
            .into_iter()
            .map(|(timestamp, close)| Bar::flat(timestamp, close, 0.0))
            .collect();
        Self::new(symbol, bars)
    }

    /// Parse a series handed over as JSON (`{"symbol": .., "bars": [..]}`)
    pub fn from_json(json: &str) -> LabelingResult<Self> {
        let raw: RawBarSeries = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Instrument symbol (e.g. "BTC-USD")
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Close prices in bar order
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn timestamps(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.timestamp).collect()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Earliest trading day in the series
    pub fn start(&self) -> Option<NaiveDate> {
        self.bars.first().map(|b| b.timestamp)
    }

    /// Latest trading day in the series
    pub fn end(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.timestamp)
    }
}
