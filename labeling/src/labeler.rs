//! Forward-return signal labeler
//!
//! Each bar is labeled with the return realized `holding_period` bars later.
//! Bars whose horizon runs past the end of the series are dropped rather
//! than emitted with a missing outcome.

use crate::config::LabelingParams;
use crate::error::{LabelingError, LabelingResult};
use crate::series::{Bar, BarSeries};
use crate::types::{LabeledBar, Signal};
use tracing::debug;

/// Label every bar that has a full holding horizon ahead of it
///
/// # Errors
/// - `InvalidParameter` for a zero holding period or non-positive thresholds
/// - `InvalidInput` for an empty series or a negative close in a return
/// - `ArithmeticDegeneracy` when a zero close would be the return denominator
pub fn label(bars: &BarSeries, params: &LabelingParams) -> LabelingResult<Vec<LabeledBar>> {
    params.validate()?;
    if bars.is_empty() {
        return Err(LabelingError::InvalidInput(
            "cannot label an empty bar series".to_string(),
        ));
    }

    let h = params.holding_period;
    let labeled = bars
        .bars()
        .iter()
        .zip(bars.bars().iter().skip(h))
        .map(|(bar, future)| label_bar(bar, future, params))
        .collect::<LabelingResult<Vec<_>>>()?;

    debug!(
        symbol = bars.symbol(),
        bars = bars.len(),
        labeled = labeled.len(),
        dropped = bars.len() - labeled.len(),
        "labeled bars"
    );

    Ok(labeled)
}

fn label_bar(bar: &Bar, future: &Bar, params: &LabelingParams) -> LabelingResult<LabeledBar> {
    let future_return = forward_return(bar, future)?;
    Ok(LabeledBar {
        bar: *bar,
        future_close: future.close,
        future_return,
        signal: Signal::classify(future_return, params),
    })
}

/// `(future.close - bar.close) / bar.close`
pub fn forward_return(bar: &Bar, future: &Bar) -> LabelingResult<f64> {
    if bar.close == 0.0 {
        return Err(LabelingError::ArithmeticDegeneracy {
            timestamp: bar.timestamp,
        });
    }
    for b in [bar, future] {
        if b.close < 0.0 {
            return Err(LabelingError::InvalidInput(format!(
                "negative close {} at {}",
                b.close, b.timestamp
            )));
        }
    }

    Ok((future.close - bar.close) / bar.close)
}
