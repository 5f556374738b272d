//! Simple and exponential moving averages

use std::collections::VecDeque;

/// Simple Moving Average indicator
///
/// Arithmetic mean of the trailing `period` prices, current price included.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    prices: VecDeque<f64>,
}

impl SimpleMovingAverage {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            prices: VecDeque::with_capacity(period),
        }
    }

    pub fn update(&mut self, price: f64) {
        self.prices.push_back(price);
        if self.prices.len() > self.period {
            self.prices.pop_front();
        }
    }

    pub fn value(&self) -> Option<f64> {
        if self.period == 0 || self.prices.len() < self.period {
            return None;
        }
        Some(self.prices.iter().sum::<f64>() / self.period as f64)
    }
}

/// Exponential Moving Average indicator
///
/// Smoothing factor `2 / (period + 1)`. The first value is the simple
/// average of the first `period` inputs; nothing is reported before that.
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    period: usize,
    alpha: f64,
    seed: Vec<f64>,
    ema: Option<f64>,
}

impl ExponentialMovingAverage {
    pub fn new(period: usize) -> Self {
        let alpha = 2.0 / (period as f64 + 1.0);
        Self {
            period,
            alpha,
            seed: Vec::with_capacity(period),
            ema: None,
        }
    }

    pub fn update(&mut self, price: f64) {
        match self.ema {
            Some(prev) => {
                self.ema = Some(self.alpha * price + (1.0 - self.alpha) * prev);
            }
            None => {
                self.seed.push(price);
                if self.period > 0 && self.seed.len() == self.period {
                    self.ema = Some(self.seed.iter().sum::<f64>() / self.period as f64);
                    self.seed.clear();
                }
            }
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.ema
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

/// Aligned SMA over a price slice; `None` for the first `period - 1` entries
pub fn sma_series(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut sma = SimpleMovingAverage::new(period);
    prices
        .iter()
        .map(|&p| {
            sma.update(p);
            sma.value()
        })
        .collect()
}

/// Aligned EMA over a price slice; `None` for the first `period - 1` entries
pub fn ema_series(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut ema = ExponentialMovingAverage::new(period);
    prices
        .iter()
        .map(|&p| {
            ema.update(p);
            ema.value()
        })
        .collect()
}
