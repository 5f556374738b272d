//! Indicator and labeling parameters

use crate::error::{LabelingError, LabelingResult};
use serde::{Deserialize, Serialize};

/// Full pipeline configuration, passed by value into the orchestrator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Indicator tuning
    #[serde(default)]
    pub indicators: IndicatorParams,

    /// Labeling tuning
    #[serde(default)]
    pub labeling: LabelingParams,
}

/// Indicator window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    /// Simple moving average window
    #[serde(default = "default_sma_window")]
    pub sma_window: usize,

    /// RSI window (Wilder smoothing factor is `1 / rsi_window`)
    #[serde(default = "default_rsi_window")]
    pub rsi_window: usize,

    /// MACD fast EMA window
    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,

    /// MACD slow EMA window, must exceed `macd_fast`
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,

    /// MACD signal line EMA window
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,
}

impl IndicatorParams {
    /// Check every window is at least one bar and `macd_fast < macd_slow`
    pub fn validate(&self) -> LabelingResult<()> {
        let windows = [
            ("sma_window", self.sma_window),
            ("rsi_window", self.rsi_window),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(LabelingError::InvalidParameter(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }

        if self.macd_fast >= self.macd_slow {
            return Err(LabelingError::InvalidParameter(format!(
                "macd_fast ({}) must be less than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }

        Ok(())
    }
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_window: default_sma_window(),
            rsi_window: default_rsi_window(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
        }
    }
}

/// Forward-return labeling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelingParams {
    /// Bars ahead used to evaluate the outcome
    #[serde(default = "default_holding_period")]
    pub holding_period: usize,

    /// Minimum forward return for BUY, in percent
    #[serde(default = "default_buy_threshold_pct")]
    pub buy_threshold_pct: f64,

    /// Minimum forward drop for SELL, in percent (positive number)
    #[serde(default = "default_sell_threshold_pct")]
    pub sell_threshold_pct: f64,
}

impl LabelingParams {
    /// Check the holding period is at least one bar and both thresholds are positive
    pub fn validate(&self) -> LabelingResult<()> {
        if self.holding_period == 0 {
            return Err(LabelingError::InvalidParameter(
                "holding_period must be at least 1".to_string(),
            ));
        }

        let thresholds = [
            ("buy_threshold_pct", self.buy_threshold_pct),
            ("sell_threshold_pct", self.sell_threshold_pct),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value <= 0.0 {
                return Err(LabelingError::InvalidParameter(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// BUY boundary as a fractional return
    pub fn buy_return(&self) -> f64 {
        self.buy_threshold_pct / 100.0
    }

    /// SELL boundary as a (negative) fractional return
    pub fn sell_return(&self) -> f64 {
        -self.sell_threshold_pct / 100.0
    }
}

impl Default for LabelingParams {
    fn default() -> Self {
        Self {
            holding_period: default_holding_period(),
            buy_threshold_pct: default_buy_threshold_pct(),
            sell_threshold_pct: default_sell_threshold_pct(),
        }
    }
}

// Default value functions
fn default_sma_window() -> usize {
    50
}

fn default_rsi_window() -> usize {
    14
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_holding_period() -> usize {
    5
}

fn default_buy_threshold_pct() -> f64 {
    5.0
}

fn default_sell_threshold_pct() -> f64 {
    5.0
}

impl PipelineConfig {
    pub fn new(indicators: IndicatorParams, labeling: LabelingParams) -> Self {
        Self {
            indicators,
            labeling,
        }
    }

    /// Validate both parameter groups
    pub fn validate(&self) -> LabelingResult<()> {
        self.indicators.validate()?;
        self.labeling.validate()
    }

    /// Load configuration from YAML file
    pub fn from_yaml_file(path: &str) -> LabelingResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> LabelingResult<Self> {
        let config: PipelineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn to_yaml_file(&self, path: &str) -> LabelingResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}
