//! Pipeline orchestrator
//!
//! Runs the indicator calculator and the labeler over the same series and
//! inner-joins their outputs by timestamp. Owns no state; a failure in
//! either stage is returned unchanged.

use crate::config::{IndicatorParams, LabelingParams, PipelineConfig};
use crate::error::LabelingResult;
use crate::indicators;
use crate::labeler;
use crate::series::BarSeries;
use crate::types::{IndicatorRow, LabeledBar, LabeledRow};
use std::cmp::Ordering;
use tracing::debug;

/// Compute indicators and labels for one instrument
pub fn run(bars: &BarSeries, config: &PipelineConfig) -> LabelingResult<Vec<LabeledRow>> {
    run_with(bars, &config.indicators, &config.labeling)
}

/// Same as [`run`] with the two parameter groups passed separately
pub fn run_with(
    bars: &BarSeries,
    indicator_params: &IndicatorParams,
    labeling_params: &LabelingParams,
) -> LabelingResult<Vec<LabeledRow>> {
    let indicator_rows = indicators::compute(bars, indicator_params)?;
    let labeled = labeler::label(bars, labeling_params)?;

    let rows = join_by_timestamp(&indicator_rows, &labeled);

    debug!(
        symbol = bars.symbol(),
        indicator_rows = indicator_rows.len(),
        labeled = labeled.len(),
        joined = rows.len(),
        "pipeline complete"
    );

    Ok(rows)
}

/// Inner join of two ascending sequences on timestamp
fn join_by_timestamp(indicator_rows: &[IndicatorRow], labeled: &[LabeledBar]) -> Vec<LabeledRow> {
    let mut joined = Vec::with_capacity(labeled.len().min(indicator_rows.len()));
    let mut ind = indicator_rows.iter().peekable();
    let mut lab = labeled.iter().peekable();

    while let (Some(i), Some(l)) = (ind.peek().copied(), lab.peek().copied()) {
        match i.timestamp.cmp(&l.timestamp()) {
            Ordering::Less => {
                ind.next();
            }
            Ordering::Greater => {
                lab.next();
            }
            Ordering::Equal => {
                joined.push(LabeledRow {
                    timestamp: l.timestamp(),
                    labeled: *l,
                    indicators: *i,
                });
                ind.next();
                lab.next();
            }
        }
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabelingError;
    use crate::series::Bar;
    use crate::types::Signal;
    use chrono::{Duration, NaiveDate};

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap() + Duration::days(offset)
    }

    fn config(holding_period: usize) -> PipelineConfig {
        PipelineConfig::new(
            IndicatorParams {
                sma_window: 2,
                rsi_window: 2,
                macd_fast: 1,
                macd_slow: 2,
                macd_signal: 2,
            },
            LabelingParams {
                holding_period,
                buy_threshold_pct: 5.0,
                sell_threshold_pct: 5.0,
            },
        )
    }

    #[test]
    fn test_join_drops_rows_without_horizon() {
        let bars = BarSeries::from_closes(
            "BTC-USD",
            [100.0, 102.0, 98.0, 110.0, 90.0]
                .into_iter()
                .enumerate()
                .map(|(i, c)| (day(i as i64), c)),
        )
        .unwrap();

        let rows = run(&bars, &config(2)).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.labeled.signal).collect::<Vec<_>>(),
            vec![Signal::Hold, Signal::Buy, Signal::Sell]
        );

        for row in &rows {
            assert_eq!(row.timestamp, row.indicators.timestamp);
            assert_eq!(row.timestamp, row.labeled.timestamp());
        }
        // SMA(2) is absent on the first row but the row is still joined
        assert!(rows[0].indicators.moving_average.is_none());
        assert_eq!(rows[1].indicators.moving_average, Some(101.0));
    }

    #[test]
    fn test_join_skips_unmatched_timestamps() {
        let ind = vec![
            IndicatorRow::empty(day(0)),
            IndicatorRow::empty(day(2)),
            IndicatorRow::empty(day(3)),
        ];
        let bar = |d| LabeledBar {
            bar: Bar::flat(day(d), 1.0, 0.0),
            future_close: 1.0,
            future_return: 0.0,
            signal: Signal::Hold,
        };
        let lab = vec![bar(1), bar(2), bar(3)];

        let joined = join_by_timestamp(&ind, &lab);
        assert_eq!(
            joined.iter().map(|r| r.timestamp).collect::<Vec<_>>(),
            vec![day(2), day(3)]
        );
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let bars = BarSeries::from_closes("X", vec![(day(0), 0.0), (day(1), 5.0)]).unwrap();
        let err = run(&bars, &config(1)).unwrap_err();
        assert!(matches!(err, LabelingError::ArithmeticDegeneracy { .. }));

        let mut bad = config(1);
        bad.indicators.macd_fast = 3;
        let err = run(&bars, &bad).unwrap_err();
        assert!(matches!(err, LabelingError::InvalidParameter(_)));
    }
}
