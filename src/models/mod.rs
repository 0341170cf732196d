//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod observation;
pub mod signal;
pub mod trade;

pub use indicators::{BollingerIndicator, MacdIndicator, RegressionModel};
pub use observation::{Observation, Quote};
pub use signal::{Prediction, ScoreBreakdown, SignalReason, Trend};
pub use trade::{RiskSettings, TradeAction, TradeLevels, TradeRecommendation};
