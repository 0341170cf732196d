use crate::models::indicators::{BollingerIndicator, MacdIndicator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-state directional call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl Trend {
    /// +1 for bullish, -1 for bearish, 0 for neutral
    pub fn sign(&self) -> f64 {
        match self {
            Trend::Bullish => 1.0,
            Trend::Bearish => -1.0,
            Trend::Neutral => 0.0,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Bullish => "bullish",
            Trend::Bearish => "bearish",
            Trend::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Signed contribution of each scoring factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub trend: f64,
    pub momentum: f64,
    pub oscillator: f64,
    pub regression: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.trend + self.momentum + self.oscillator + self.regression
    }
}

/// One line of a signal explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
    pub weight: f64,
}

/// Per-instrument output record, replaced wholesale on every update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub symbol: String,
    pub price: f64,
    pub predicted_price: f64,
    pub confidence: f64,
    pub trend: Trend,
    pub rsi: f64,
    pub macd: MacdIndicator,
    pub bollinger: BollingerIndicator,
    pub atr: f64,
    pub ema12: f64,
    pub ema26: f64,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub regression_slope: f64,
    pub r_squared: f64,
    pub observations: usize,
    pub timestamp: DateTime<Utc>,
}
