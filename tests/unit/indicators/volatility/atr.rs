//! Unit tests for the ATR proxy

use crate::common::{assert_close, rising_series};
use fxsignal::indicators::volatility::{calculate_atr, calculate_atr_default};

#[test]
fn test_atr_insufficient_data_is_zero() {
    assert_eq!(calculate_atr_default(&rising_series()[..14]), 0.0);
    assert_eq!(calculate_atr(&[1.1], 1), 0.0);
}

#[test]
fn test_atr_constant_step() {
    assert_close(calculate_atr_default(&rising_series()), 0.0005, 1e-12);
}

#[test]
fn test_atr_uses_absolute_changes() {
    let prices = [1.0, 1.1, 1.0, 1.2];
    assert_close(calculate_atr(&prices, 3), 0.4 / 3.0, 1e-12);
}

#[test]
fn test_atr_is_never_negative() {
    let prices = [1.3, 1.2, 1.1, 1.0, 0.9];
    assert!(calculate_atr(&prices, 4) >= 0.0);
}
