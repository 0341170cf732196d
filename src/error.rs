//! Error types for the edges of the engine
//!
//! Indicator math never fails; these only cover rejected inputs.

use thiserror::Error;

/// Reasons an observation is not applied to an instrument
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid price {price} for {symbol}")]
    InvalidPrice { symbol: String, price: f64 },

    #[error("observation for {symbol} is older than the last recorded one")]
    OutOfOrder { symbol: String },
}

/// Invalid user risk settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("account balance must be positive, got {0}")]
    InvalidAccountBalance(f64),

    #[error("risk percent must be in (0, 100], got {0}")]
    InvalidRiskPercent(f64),

    #[error("risk/reward ratio must be positive, got {0}")]
    InvalidRiskReward(f64),

    #[error("manual lot size must be positive, got {0}")]
    InvalidLotSize(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },

    #[error("{0}")]
    Invalid(String),
}
