//! Output types: aligned indicator rows, signals and labeled bars

use crate::config::LabelingParams;
use crate::series::Bar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Indicator values for one timestamp
///
/// A `None` marks a row inside the warm-up window of that indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    /// Trading day
    pub timestamp: NaiveDate,
    /// Simple moving average of close
    pub moving_average: Option<f64>,
    /// Wilder RSI, in [0, 100]
    pub oscillator: Option<f64>,
    /// MACD line (fast EMA minus slow EMA)
    pub convergence_line: Option<f64>,
    /// EMA of the MACD line
    pub convergence_signal: Option<f64>,
    /// MACD line minus signal line
    pub convergence_histogram: Option<f64>,
}

impl IndicatorRow {
    /// Row with every indicator still warming up
    pub fn empty(timestamp: NaiveDate) -> Self {
        Self {
            timestamp,
            moving_average: None,
            oscillator: None,
            convergence_line: None,
            convergence_signal: None,
            convergence_histogram: None,
        }
    }

    /// True once every indicator has left its warm-up window
    pub fn is_complete(&self) -> bool {
        self.moving_average.is_some()
            && self.oscillator.is_some()
            && self.convergence_line.is_some()
            && self.convergence_signal.is_some()
            && self.convergence_histogram.is_some()
    }
}

/// Indicator rows aligned one-to-one with the input bar series
pub type IndicatorSeries = Vec<IndicatorRow>;

/// Forward-looking trade label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Classify a forward return against the labeling thresholds
    ///
    /// BUY is checked first, then SELL; both boundaries are inclusive.
    pub fn classify(future_return: f64, params: &LabelingParams) -> Self {
        if future_return >= params.buy_return() {
            Signal::Buy
        } else if future_return <= params.sell_return() {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }

    /// Numeric encoding: 1 for BUY, -1 for SELL, 0 for HOLD
    pub fn as_i8(&self) -> i8 {
        match self {
            Signal::Buy => 1,
            Signal::Sell => -1,
            Signal::Hold => 0,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        };
        f.pad(label)
    }
}

/// Bar with its realized forward return and derived signal
///
/// Only produced when the full holding horizon exists, so the forward
/// return is always defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledBar {
    /// Source bar
    pub bar: Bar,
    /// Close price `holding_period` bars ahead
    pub future_close: f64,
    /// `(future_close - close) / close`
    pub future_return: f64,
    /// Label derived from `future_return`
    pub signal: Signal,
}

impl LabeledBar {
    pub fn timestamp(&self) -> NaiveDate {
        self.bar.timestamp
    }
}

/// Joined pipeline output for one timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledRow {
    pub timestamp: NaiveDate,
    pub labeled: LabeledBar,
    pub indicators: IndicatorRow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(buy: f64, sell: f64) -> LabelingParams {
        LabelingParams {
            holding_period: 1,
            buy_threshold_pct: buy,
            sell_threshold_pct: sell,
        }
    }

    #[test]
    fn test_buy_boundary_inclusive() {
        let p = params(5.0, 5.0);
        assert_eq!(Signal::classify(0.05, &p), Signal::Buy);
        assert_eq!(Signal::classify(0.0499, &p), Signal::Hold);
    }

    #[test]
    fn test_sell_boundary_inclusive() {
        let p = params(5.0, 5.0);
        assert_eq!(Signal::classify(-0.05, &p), Signal::Sell);
        assert_eq!(Signal::classify(-0.0499, &p), Signal::Hold);
    }

    #[test]
    fn test_asymmetric_bands() {
        let p = params(10.0, 2.0);
        assert_eq!(Signal::classify(0.05, &p), Signal::Hold);
        assert_eq!(Signal::classify(-0.03, &p), Signal::Sell);
        assert_eq!(Signal::classify(0.10, &p), Signal::Buy);
    }

    #[test]
    fn test_signal_encoding() {
        assert_eq!(Signal::Buy.as_i8(), 1);
        assert_eq!(Signal::Sell.as_i8(), -1);
        assert_eq!(Signal::Hold.as_i8(), 0);
        assert_eq!(Signal::Sell.to_string(), "SELL");
    }

    #[test]
    fn test_indicator_row_completeness() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut row = IndicatorRow::empty(day);
        assert!(!row.is_complete());

        row.moving_average = Some(1.0);
        row.oscillator = Some(50.0);
        row.convergence_line = Some(0.1);
        row.convergence_signal = Some(0.05);
        row.convergence_histogram = Some(0.05);
        assert!(row.is_complete());
    }
}
