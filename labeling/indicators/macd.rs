//! MACD (Moving Average Convergence Divergence)

use super::moving_average::ExponentialMovingAverage;

/// One MACD observation; each part is `None` inside its own warm-up window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacdValue {
    pub line: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

/// MACD indicator
///
/// The signal EMA only starts consuming once the line exists, so the
/// histogram first appears after `slow + signal - 1` prices.
#[derive(Debug, Clone)]
pub struct MovingAverageConvergenceDivergence {
    fast_ema: ExponentialMovingAverage,
    slow_ema: ExponentialMovingAverage,
    signal_ema: ExponentialMovingAverage,
    line: Option<f64>,
}

impl MovingAverageConvergenceDivergence {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_ema: ExponentialMovingAverage::new(fast_period),
            slow_ema: ExponentialMovingAverage::new(slow_period),
            signal_ema: ExponentialMovingAverage::new(signal_period),
            line: None,
        }
    }

    pub fn update(&mut self, price: f64) {
        self.fast_ema.update(price);
        self.slow_ema.update(price);

        if let (Some(fast), Some(slow)) = (self.fast_ema.value(), self.slow_ema.value()) {
            let line = fast - slow;
            self.line = Some(line);
            self.signal_ema.update(line);
        }
    }

    pub fn value(&self) -> MacdValue {
        let signal = self.signal_ema.value();
        let histogram = match (self.line, signal) {
            (Some(line), Some(signal)) => Some(line - signal),
            _ => None,
        };
        MacdValue {
            line: self.line,
            signal,
            histogram,
        }
    }
}
