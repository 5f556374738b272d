//! Indicator calculator
//!
//! Drives the incremental indicators over a bar series and records one
//! aligned row per bar. Rows are never added or dropped: a value still
//! inside its warm-up window is reported as `None`.

pub mod macd;
pub mod moving_average;
pub mod rsi;

pub use macd::{MacdValue, MovingAverageConvergenceDivergence};
pub use moving_average::{ema_series, sma_series, ExponentialMovingAverage, SimpleMovingAverage};
pub use rsi::{rsi_series, RelativeStrengthIndex};

use crate::config::IndicatorParams;
use crate::error::{LabelingError, LabelingResult};
use crate::series::BarSeries;
use crate::types::{IndicatorRow, IndicatorSeries};
use tracing::debug;

/// Compute moving average, RSI and MACD for every bar
///
/// # Errors
/// `InvalidParameter` if a window is zero or `macd_fast >= macd_slow`,
/// `InvalidInput` if the series is empty.
pub fn compute(bars: &BarSeries, params: &IndicatorParams) -> LabelingResult<IndicatorSeries> {
    params.validate()?;
    if bars.is_empty() {
        return Err(LabelingError::InvalidInput(
            "cannot compute indicators on an empty bar series".to_string(),
        ));
    }

    let mut sma = SimpleMovingAverage::new(params.sma_window);
    let mut rsi = RelativeStrengthIndex::new(params.rsi_window);
    let mut macd =
        MovingAverageConvergenceDivergence::new(params.macd_fast, params.macd_slow, params.macd_signal);

    let rows: IndicatorSeries = bars
        .bars()
        .iter()
        .map(|bar| {
            sma.update(bar.close);
            rsi.update(bar.close);
            macd.update(bar.close);

            let m = macd.value();
            IndicatorRow {
                timestamp: bar.timestamp,
                moving_average: sma.value(),
                oscillator: rsi.value(),
                convergence_line: m.line,
                convergence_signal: m.signal,
                convergence_histogram: m.histogram,
            }
        })
        .collect();

    debug!(
        symbol = bars.symbol(),
        rows = rows.len(),
        complete = rows.iter().filter(|r| r.is_complete()).count(),
        "computed indicators"
    );

    Ok(rows)
}
