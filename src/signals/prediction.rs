//! Prediction assembly
//!
//! Packages the indicator outputs and the score into one record per
//! instrument and nudges the regression projection by volatility in the
//! direction of the resolved trend.

use crate::models::indicators::{BollingerIndicator, MacdIndicator, RegressionModel};
use crate::models::signal::{Prediction, ScoreBreakdown, Trend};
use crate::signals::scoring::ScoreResult;
use chrono::{DateTime, Utc};

/// Fraction of the ATR proxy added in the trend direction
pub const ATR_ADJUSTMENT: f64 = 0.5;

/// Indicator values computed for one update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSnapshot {
    pub price: f64,
    pub rsi: f64,
    pub macd: MacdIndicator,
    pub bollinger: BollingerIndicator,
    pub atr: f64,
    pub ema12: f64,
    pub ema26: f64,
}

/// Regression projection one step ahead, or the last price without a fit
pub fn base_projection(regression: &RegressionModel, price: f64) -> f64 {
    if regression.is_fitted() {
        regression.predict(1)
    } else {
        price
    }
}

/// Shift by half the ATR proxy toward the trend; unchanged when neutral
pub fn adjust_for_volatility(projection: f64, atr: f64, trend: Trend) -> f64 {
    projection + trend.sign() * ATR_ADJUSTMENT * atr
}

/// Build the record. `score` is `None` during warm-up, which yields a
/// neutral, zero-confidence prediction.
pub fn assemble_prediction(
    symbol: &str,
    snapshot: &IndicatorSnapshot,
    regression: &RegressionModel,
    score: Option<&ScoreResult>,
    observations: usize,
    timestamp: DateTime<Utc>,
) -> Prediction {
    let (breakdown, total, confidence, trend) = match score {
        Some(result) => (result.breakdown, result.score, result.confidence, result.trend),
        None => (ScoreBreakdown::default(), 0.0, 0.0, Trend::Neutral),
    };

    let projection = base_projection(regression, snapshot.price);

    Prediction {
        symbol: symbol.to_string(),
        price: snapshot.price,
        predicted_price: adjust_for_volatility(projection, snapshot.atr, trend),
        confidence,
        trend,
        rsi: snapshot.rsi,
        macd: snapshot.macd,
        bollinger: snapshot.bollinger,
        atr: snapshot.atr,
        ema12: snapshot.ema12,
        ema26: snapshot.ema26,
        score: total,
        breakdown,
        regression_slope: regression.slope,
        r_squared: regression.r_squared,
        observations,
        timestamp,
    }
}
