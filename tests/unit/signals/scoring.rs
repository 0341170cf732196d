//! Unit tests for the scoring and hysteresis policy

use fxsignal::models::Trend;
use fxsignal::signals::scoring::*;

fn input(ema_fast: f64, ema_slow: f64, histogram: f64, rsi: f64, slope: f64, trend: Trend) -> ScoringInput {
    ScoringInput {
        ema_fast,
        ema_slow,
        macd_histogram: histogram,
        rsi,
        regression_slope: slope,
        current_trend: trend,
    }
}

#[test]
fn test_trend_and_momentum_weights() {
    assert_eq!(trend_score(1.2, 1.1), 3.0);
    assert_eq!(trend_score(1.1, 1.2), -3.0);
    assert_eq!(trend_score(1.1, 1.1), -3.0);
    assert_eq!(momentum_score(0.0001), 2.0);
    assert_eq!(momentum_score(0.0), -2.0);
}

#[test]
fn test_oscillator_conditioned_on_bullish_trend() {
    assert_eq!(oscillator_score(25.0, Trend::Bullish), 2.0);
    assert_eq!(oscillator_score(85.0, Trend::Bullish), -1.0);
    assert_eq!(oscillator_score(55.0, Trend::Bullish), 1.0);
}

#[test]
fn test_oscillator_conditioned_on_bearish_trend() {
    assert_eq!(oscillator_score(75.0, Trend::Bearish), -2.0);
    assert_eq!(oscillator_score(15.0, Trend::Bearish), 1.0);
    assert_eq!(oscillator_score(45.0, Trend::Bearish), -1.0);
}

#[test]
fn test_oscillator_silent_while_neutral() {
    for rsi in [0.0, 15.0, 50.0, 85.0, 100.0] {
        assert_eq!(oscillator_score(rsi, Trend::Neutral), 0.0);
    }
}

#[test]
fn test_regression_dead_band() {
    assert_eq!(regression_score(0.00005), 0.0);
    assert_eq!(regression_score(-0.00004), 0.0);
    assert_eq!(regression_score(0.0005), 2.0);
    assert_eq!(regression_score(-0.0005), -2.0);
}

#[test]
fn test_confidence_bounds() {
    assert_eq!(calculate_confidence(0.0), 10.0);
    assert_eq!(calculate_confidence(7.0), 87.5);
    assert_eq!(calculate_confidence(-7.0), 87.5);
    assert_eq!(calculate_confidence(9.0), 99.0);
    for score in [-9.0, -6.0, -2.5, -1.0, 0.0, 1.0, 3.0, 8.0, 9.0] {
        let confidence = calculate_confidence(score);
        assert!((10.0..=99.0).contains(&confidence));
    }
}

#[test]
fn test_dead_zone_resolves_neutral() {
    for score in [-2.5, -2.0, -1.0, 0.0, 1.0, 2.0, 2.5] {
        assert_eq!(resolve_trend(score), Trend::Neutral, "score {}", score);
    }
    assert_eq!(resolve_trend(3.0), Trend::Bullish);
    assert_eq!(resolve_trend(-3.0), Trend::Bearish);
}

#[test]
fn test_small_scores_are_neutral_whatever_the_source() {
    // +3 trend, -2 momentum, no oscillator, flat regression => +1
    let a = score_signal(&input(1.2, 1.1, -0.1, 50.0, 0.0, Trend::Neutral));
    // -3 trend, +2 momentum, +1 bearish caution, flat regression => 0
    let b = score_signal(&input(1.1, 1.2, 0.1, 10.0, 0.0, Trend::Bearish));
    // -3 trend, -2 momentum, +2 dip buy, +2 regression => -1
    let c = score_signal(&input(1.1, 1.2, -0.1, 20.0, 0.001, Trend::Bullish));

    assert_eq!(a.score, 1.0);
    assert_eq!(b.score, 0.0);
    assert_eq!(c.score, -1.0);
    for result in [a, b, c] {
        assert_eq!(result.trend, Trend::Neutral);
    }
}

#[test]
fn test_breakdown_sums_to_score() {
    let result = score_signal(&input(1.2, 1.1, 0.1, 85.0, 0.001, Trend::Bullish));
    assert_eq!(result.breakdown.trend, 3.0);
    assert_eq!(result.breakdown.momentum, 2.0);
    assert_eq!(result.breakdown.oscillator, -1.0);
    assert_eq!(result.breakdown.regression, 2.0);
    assert_eq!(result.score, result.breakdown.total());
    assert_eq!(result.score, 6.0);
    assert_eq!(result.trend, Trend::Bullish);
    assert_eq!(result.confidence, 75.0);
}

#[test]
fn test_full_bearish_alignment() {
    let result = score_signal(&input(1.1, 1.2, -0.1, 45.0, -0.001, Trend::Bearish));
    assert_eq!(result.score, -8.0);
    assert_eq!(result.trend, Trend::Bearish);
    assert_eq!(result.confidence, 99.0);
}
