//! Label distribution for a labeled dataset

use crate::types::{LabeledBar, LabeledRow, Signal};
use serde::{Deserialize, Serialize};

/// Signal counts and mean forward return over a labeled sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelSummary {
    /// Number of BUY labels
    pub buy: usize,
    /// Number of SELL labels
    pub sell: usize,
    /// Number of HOLD labels
    pub hold: usize,
    /// Mean forward return, `None` for an empty sequence
    pub mean_future_return: Option<f64>,
}

impl LabelSummary {
    pub fn from_labeled(labeled: &[LabeledBar]) -> Self {
        Self::accumulate(labeled.iter())
    }

    pub fn from_rows(rows: &[LabeledRow]) -> Self {
        Self::accumulate(rows.iter().map(|r| &r.labeled))
    }

    fn accumulate<'a>(labeled: impl Iterator<Item = &'a LabeledBar>) -> Self {
        let mut summary = Self::default();
        let mut sum = 0.0;

        for bar in labeled {
            match bar.signal {
                Signal::Buy => summary.buy += 1,
                Signal::Sell => summary.sell += 1,
                Signal::Hold => summary.hold += 1,
            }
            sum += bar.future_return;
        }

        let total = summary.total();
        if total > 0 {
            summary.mean_future_return = Some(sum / total as f64);
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.buy + self.sell + self.hold
    }

    /// Share of rows carrying `signal`, 0.0 for an empty summary
    pub fn fraction(&self, signal: Signal) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let count = match signal {
            Signal::Buy => self.buy,
            Signal::Sell => self.sell,
            Signal::Hold => self.hold,
        };
        count as f64 / total as f64
    }
}
