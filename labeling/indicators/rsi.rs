//! Relative Strength Index with Wilder smoothing
//!
//! Average gain and loss are seeded with the simple mean of the first
//! `period` close-to-close changes, then smoothed as
//! `avg = (prev * (period - 1) + x) / period`.

/// Relative Strength Index indicator
#[derive(Debug, Clone)]
pub struct RelativeStrengthIndex {
    period: usize,
    prev_price: Option<f64>,
    deltas_seen: usize,
    sum_gain: f64,
    sum_loss: f64,
    avg_gain: Option<f64>,
    avg_loss: Option<f64>,
}

impl RelativeStrengthIndex {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            prev_price: None,
            deltas_seen: 0,
            sum_gain: 0.0,
            sum_loss: 0.0,
            avg_gain: None,
            avg_loss: None,
        }
    }

    pub fn update(&mut self, price: f64) {
        if let Some(prev) = self.prev_price {
            let change = price - prev;
            let gain = change.max(0.0);
            let loss = (-change).max(0.0);
            let n = self.period as f64;

            match (self.avg_gain, self.avg_loss) {
                (Some(avg_gain), Some(avg_loss)) => {
                    self.avg_gain = Some((avg_gain * (n - 1.0) + gain) / n);
                    self.avg_loss = Some((avg_loss * (n - 1.0) + loss) / n);
                }
                _ => {
                    self.sum_gain += gain;
                    self.sum_loss += loss;
                    self.deltas_seen += 1;
                    if self.period > 0 && self.deltas_seen == self.period {
                        self.avg_gain = Some(self.sum_gain / n);
                        self.avg_loss = Some(self.sum_loss / n);
                    }
                }
            }
        }
        self.prev_price = Some(price);
    }

    /// RSI in [0, 100], or `None` until `period` changes have been seen
    pub fn value(&self) -> Option<f64> {
        let avg_gain = self.avg_gain?;
        let avg_loss = self.avg_loss?;

        // No downward movement (flat windows included) pins to the upper bound
        if avg_loss == 0.0 {
            return Some(100.0);
        }

        let rs = avg_gain / avg_loss;
        Some((100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0))
    }
}

/// Aligned RSI over a price slice; `None` for the first `period` entries
pub fn rsi_series(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut rsi = RelativeStrengthIndex::new(period);
    prices
        .iter()
        .map(|&p| {
            rsi.update(p);
            rsi.value()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rsi_warm_up() {
        let prices: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let out = rsi_series(&prices, 14);
        assert!(out[..14].iter().all(Option::is_none));
        assert!(out[14..].iter().all(Option::is_some));
    }

    #[test]
    fn test_rsi_all_gains() {
        let prices: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        for v in rsi_series(&prices, 14).into_iter().flatten() {
            assert_relative_eq!(v, 100.0);
        }
    }

    #[test]
    fn test_rsi_all_losses() {
        let prices: Vec<f64> = (1..=30).rev().map(|x| x as f64).collect();
        for v in rsi_series(&prices, 14).into_iter().flatten() {
            assert_relative_eq!(v, 0.0);
        }
    }

    #[test]
    fn test_rsi_flat_market_is_upper_bound() {
        let prices = vec![100.0; 30];
        for v in rsi_series(&prices, 14).into_iter().flatten() {
            assert_eq!(v, 100.0);
        }
    }

    #[test]
    fn test_rsi_wilder_smoothing() {
        // period 2: deltas +2, -1 seed avg_gain 1.0, avg_loss 0.5
        // next delta +3: avg_gain (1.0 + 3) / 2 = 2.0, avg_loss (0.5 + 0) / 2 = 0.25
        let mut rsi = RelativeStrengthIndex::new(2);
        for p in [10.0, 12.0, 11.0] {
            rsi.update(p);
        }
        assert_relative_eq!(rsi.value().unwrap(), 100.0 - 100.0 / 3.0, epsilon = 1e-12);

        rsi.update(14.0);
        assert_relative_eq!(rsi.value().unwrap(), 100.0 - 100.0 / 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rsi_range_check() {
        let prices = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
        ];
        for v in rsi_series(&prices, 14).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&v), "RSI {v} out of range");
        }
    }
}
