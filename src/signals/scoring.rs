//! Multi-factor scoring and hysteresis
//!
//! Four independent signals each add a signed weight to the score: EMA trend
//! filter, MACD momentum, a trend-conditioned RSI filter and regression
//! slope confirmation. The score maps to a bounded confidence and, through a
//! dead zone around zero, to a three-state trend.

use crate::models::signal::{ScoreBreakdown, Trend};
use crate::signals::categories::{RsiThresholds, ScoreWeights};
use serde::{Deserialize, Serialize};

/// Indicator values the policy reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringInput {
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub macd_histogram: f64,
    pub rsi: f64,
    pub regression_slope: f64,
    /// Trend resolved on the previous update for this instrument
    pub current_trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub breakdown: ScoreBreakdown,
    pub score: f64,
    pub confidence: f64,
    pub trend: Trend,
}

pub fn trend_score(ema_fast: f64, ema_slow: f64) -> f64 {
    if ema_fast > ema_slow {
        ScoreWeights::TREND
    } else {
        -ScoreWeights::TREND
    }
}

pub fn momentum_score(histogram: f64) -> f64 {
    if histogram > 0.0 {
        ScoreWeights::MOMENTUM
    } else {
        -ScoreWeights::MOMENTUM
    }
}

/// RSI read against the current trend; no opinion while neutral
pub fn oscillator_score(rsi: f64, current_trend: Trend) -> f64 {
    match current_trend {
        Trend::Bullish => {
            if rsi < RsiThresholds::BULLISH_DIP {
                ScoreWeights::OSCILLATOR_REVERSAL
            } else if rsi > RsiThresholds::BULLISH_OVEREXTENDED {
                -ScoreWeights::OSCILLATOR_CAUTION
            } else {
                ScoreWeights::OSCILLATOR_CONTINUATION
            }
        }
        Trend::Bearish => {
            if rsi > RsiThresholds::BEARISH_RALLY {
                -ScoreWeights::OSCILLATOR_REVERSAL
            } else if rsi < RsiThresholds::BEARISH_OVEREXTENDED {
                ScoreWeights::OSCILLATOR_CAUTION
            } else {
                -ScoreWeights::OSCILLATOR_CONTINUATION
            }
        }
        Trend::Neutral => 0.0,
    }
}

pub fn regression_score(slope: f64) -> f64 {
    if slope.abs() <= ScoreWeights::REGRESSION_DEAD_BAND {
        0.0
    } else if slope > 0.0 {
        ScoreWeights::REGRESSION
    } else {
        -ScoreWeights::REGRESSION
    }
}

/// `|score| / 8 * 100`, clamped to [10, 99]
pub fn calculate_confidence(score: f64) -> f64 {
    (score.abs() / ScoreWeights::MAX_SCORE * 100.0)
        .clamp(ScoreWeights::MIN_CONFIDENCE, ScoreWeights::MAX_CONFIDENCE)
}

pub fn resolve_trend(score: f64) -> Trend {
    if score > ScoreWeights::TREND_THRESHOLD {
        Trend::Bullish
    } else if score < -ScoreWeights::TREND_THRESHOLD {
        Trend::Bearish
    } else {
        Trend::Neutral
    }
}

pub fn score_signal(input: &ScoringInput) -> ScoreResult {
    let breakdown = ScoreBreakdown {
        trend: trend_score(input.ema_fast, input.ema_slow),
        momentum: momentum_score(input.macd_histogram),
        oscillator: oscillator_score(input.rsi, input.current_trend),
        regression: regression_score(input.regression_slope),
    };
    let score = breakdown.total();

    ScoreResult {
        breakdown,
        score,
        confidence: calculate_confidence(score),
        trend: resolve_trend(score),
    }
}
