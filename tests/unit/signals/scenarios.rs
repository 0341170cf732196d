//! End-to-end market scenarios through the engine

use crate::common::{linear_prices, observations, rising_series};
use fxsignal::config::{Config, EngineConfig, InstrumentConfig};
use fxsignal::models::{MacdIndicator, RiskSettings, TradeAction, Trend};
use fxsignal::signals::{Aggregator, SignalEngine, StopLossTakeProfit};

#[test]
fn test_steady_uptrend_is_bullish() {
    let mut engine = SignalEngine::new(EngineConfig::default());
    let mut last = None;
    for observation in observations(&rising_series()) {
        last = Some(engine.update("EUR/USD", observation).unwrap());
    }
    let prediction = last.unwrap();

    assert_eq!(prediction.rsi, 100.0);
    assert!(prediction.ema12 > prediction.ema26);
    assert!(prediction.macd.histogram > 0.0);
    assert!(prediction.regression_slope > 0.00005);

    assert_eq!(prediction.breakdown.trend, 3.0);
    assert_eq!(prediction.breakdown.momentum, 2.0);
    assert_eq!(prediction.breakdown.oscillator, 0.0);
    assert_eq!(prediction.breakdown.regression, 2.0);
    assert!(prediction.score >= 7.0);
    assert_eq!(prediction.trend, Trend::Bullish);
    assert!(prediction.confidence >= 87.0);

    // Regression projection nudged up by half the ATR proxy
    let expected = 1.1075 + 0.5 * 0.0005;
    assert!((prediction.predicted_price - expected).abs() < 1e-9);
}

#[test]
fn test_overextended_uptrend_loses_a_point() {
    let mut engine = SignalEngine::new(EngineConfig::default());
    let prices = linear_prices(16, 1.1000, 0.0005);
    let mut last = None;
    for observation in observations(&prices) {
        last = Some(engine.update("EUR/USD", observation).unwrap());
    }
    let prediction = last.unwrap();

    // Previous call was bullish and RSI is above 80
    assert_eq!(prediction.breakdown.oscillator, -1.0);
    assert_eq!(prediction.score, 6.0);
    assert_eq!(prediction.trend, Trend::Bullish);
    assert_eq!(prediction.confidence, 75.0);
}

#[test]
fn test_steady_downtrend_is_bearish() {
    let mut engine = SignalEngine::new(EngineConfig::default());
    let prices = linear_prices(15, 1.2000, -0.0005);
    let mut last = None;
    for observation in observations(&prices) {
        last = Some(engine.update("GBP/USD", observation).unwrap());
    }
    let prediction = last.unwrap();

    assert_eq!(prediction.rsi, 0.0);
    assert!(prediction.ema12 < prediction.ema26);
    assert!(prediction.score <= -7.0);
    assert_eq!(prediction.trend, Trend::Bearish);
    assert!(prediction.predicted_price < prediction.price);
}

#[test]
fn test_uptrend_to_trade_levels() {
    let mut engine = SignalEngine::new(EngineConfig::default());
    for observation in observations(&rising_series()) {
        engine.update("EUR/USD", observation).unwrap();
    }
    let prediction = engine.prediction("EUR/USD").unwrap();

    let recommendation = StopLossTakeProfit::default()
        .recommend(
            &prediction,
            prediction.price,
            &InstrumentConfig::for_symbol("EUR/USD"),
            &RiskSettings::default(),
        )
        .unwrap();
    assert_eq!(recommendation.action, TradeAction::Buy);
    let levels = recommendation.levels.unwrap();
    assert!(levels.stop_loss < levels.entry);
    assert!(levels.take_profit > levels.entry);

    let reasons = Aggregator::generate_reasons(&prediction);
    assert_eq!(reasons.len(), 3);
    assert_eq!(reasons[0].weight, 3.0);
}

#[test]
fn test_slow_period_warmup_withholds_momentum() {
    let config = Config::from_lookup(|key| (key == "MACD_WARMUP").then(|| "26".to_string())).unwrap();
    assert_eq!(config.engine.macd.warmup, 26);

    let mut engine = SignalEngine::new(config.engine);
    let mut last = None;
    for observation in observations(&rising_series()) {
        last = Some(engine.update("EUR/USD", observation).unwrap());
    }
    let prediction = last.unwrap();

    // No MACD yet, so the momentum factor reads the zero histogram as bearish
    assert_eq!(prediction.macd, MacdIndicator::default());
    assert_eq!(prediction.breakdown.trend, 3.0);
    assert_eq!(prediction.breakdown.momentum, -2.0);
    assert_eq!(prediction.breakdown.regression, 2.0);
    assert_eq!(prediction.score, 3.0);
    assert_eq!(prediction.trend, Trend::Bullish);
    assert_eq!(prediction.confidence, 37.5);
}
