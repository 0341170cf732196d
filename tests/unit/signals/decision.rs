//! Unit tests for trade levels and position sizing

use crate::common::{assert_close, sample_prediction};
use fxsignal::config::InstrumentConfig;
use fxsignal::error::RiskError;
use fxsignal::models::{RiskSettings, TradeAction, Trend};
use fxsignal::signals::decision::*;

fn eur_usd() -> InstrumentConfig {
    InstrumentConfig::new(0.0001, 5)
}

#[test]
fn test_bullish_levels() {
    let prediction = sample_prediction(Trend::Bullish, 1.1, 0.0005);
    let levels = StopLossTakeProfit::default()
        .levels(&prediction, 1.1, &eur_usd(), &RiskSettings::default())
        .unwrap()
        .unwrap();

    assert_eq!(levels.action, TradeAction::Buy);
    // Pip floor (15 pips) beats 2 * ATR (10 pips)
    assert_close(levels.sl_distance, 0.0015, 1e-12);
    assert_close(levels.tp_distance, 0.0030, 1e-12);
    assert_close(levels.entry, 1.1, 1e-9);
    assert_close(levels.stop_loss, 1.0985, 1e-9);
    // Spread buffer of 2 pips widens the target only
    assert_close(levels.take_profit, 1.1032, 1e-9);
    assert_close(levels.risk_amount, 100.0, 1e-9);
    assert_close(levels.lot_size, 100.0 / 150.0, 1e-9);
    assert_close(levels.potential_profit, 200.0, 1e-9);
}

#[test]
fn test_bearish_levels_mirror() {
    let prediction = sample_prediction(Trend::Bearish, 1.1, 0.0005);
    let levels = StopLossTakeProfit::default()
        .levels(&prediction, 1.1, &eur_usd(), &RiskSettings::default())
        .unwrap()
        .unwrap();

    assert_eq!(levels.action, TradeAction::Sell);
    assert_close(levels.stop_loss, 1.1015, 1e-9);
    assert_close(levels.take_profit, 1.0968, 1e-9);
}

#[test]
fn test_volatile_market_uses_atr_stop() {
    let prediction = sample_prediction(Trend::Bullish, 1.1, 0.002);
    let levels = StopLossTakeProfit::default()
        .levels(&prediction, 1.1, &eur_usd(), &RiskSettings::default())
        .unwrap()
        .unwrap();
    assert_close(levels.sl_distance, 0.004, 1e-12);
}

#[test]
fn test_neutral_is_hold_without_levels() {
    let prediction = sample_prediction(Trend::Neutral, 1.1, 0.0005);
    let calculator = StopLossTakeProfit::default();
    let recommendation = calculator
        .recommend(&prediction, 1.1, &eur_usd(), &RiskSettings::default())
        .unwrap();
    assert_eq!(recommendation.action, TradeAction::Hold);
    assert!(recommendation.levels.is_none());
}

#[test]
fn test_lot_size_clamped() {
    // 15 pip stop: raw lot = risk / 150
    assert_close(lot_size(0.45, 0.0015, 0.0001), 0.01, 1e-12);
    assert_close(lot_size(18_000.0, 0.0015, 0.0001), 50.0, 1e-12);
    assert_close(lot_size(15.0, 0.0015, 0.0001), 0.1, 1e-12);
}

#[test]
fn test_manual_lot_size_overrides() {
    let prediction = sample_prediction(Trend::Bullish, 1.1, 0.0005);
    let settings = RiskSettings {
        manual_lot_size: Some(0.25),
        ..RiskSettings::default()
    };
    let levels = StopLossTakeProfit::default()
        .levels(&prediction, 1.1, &eur_usd(), &settings)
        .unwrap()
        .unwrap();
    assert_eq!(levels.lot_size, 0.25);
}

#[test]
fn test_higher_reward_ratio_widens_target() {
    let prediction = sample_prediction(Trend::Bullish, 1.1, 0.0005);
    let calculator = StopLossTakeProfit::default();
    let mut previous = 0.0;
    for ratio in [0.5, 1.0, 1.5, 2.0, 3.0] {
        let settings = RiskSettings {
            risk_reward_ratio: ratio,
            ..RiskSettings::default()
        };
        let levels = calculator
            .levels(&prediction, 1.1, &eur_usd(), &settings)
            .unwrap()
            .unwrap();
        assert!(levels.tp_distance > previous);
        assert_close(levels.sl_distance, 0.0015, 1e-12);
        previous = levels.tp_distance;
    }
}

#[test]
fn test_higher_risk_percent_increases_risk_and_lots() {
    let prediction = sample_prediction(Trend::Bullish, 1.1, 0.0005);
    let calculator = StopLossTakeProfit::default();
    let mut previous = (0.0, 0.0);
    for risk_percent in [0.5, 1.0, 2.0, 5.0] {
        let settings = RiskSettings {
            risk_percent,
            ..RiskSettings::default()
        };
        let levels = calculator
            .levels(&prediction, 1.1, &eur_usd(), &settings)
            .unwrap()
            .unwrap();
        assert!(levels.risk_amount > previous.0);
        assert!(levels.lot_size > previous.1);
        previous = (levels.risk_amount, levels.lot_size);
    }
}

#[test]
fn test_invalid_settings_rejected() {
    let prediction = sample_prediction(Trend::Bullish, 1.1, 0.0005);
    let calculator = StopLossTakeProfit::default();
    let cases = [
        (
            RiskSettings { account_balance: 0.0, ..RiskSettings::default() },
            RiskError::InvalidAccountBalance(0.0),
        ),
        (
            RiskSettings { risk_percent: 150.0, ..RiskSettings::default() },
            RiskError::InvalidRiskPercent(150.0),
        ),
        (
            RiskSettings { risk_reward_ratio: -1.0, ..RiskSettings::default() },
            RiskError::InvalidRiskReward(-1.0),
        ),
        (
            RiskSettings { manual_lot_size: Some(0.0), ..RiskSettings::default() },
            RiskError::InvalidLotSize(0.0),
        ),
    ];
    for (settings, expected) in cases {
        let err = calculator
            .levels(&prediction, 1.1, &eur_usd(), &settings)
            .unwrap_err();
        assert_eq!(err, expected);
    }
}
