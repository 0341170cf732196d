//! Unit tests for RSI

use crate::common::{assert_close, rising_series};
use fxsignal::indicators::momentum::{calculate_rsi, calculate_rsi_default, RSI_NEUTRAL};

#[test]
fn test_rsi_insufficient_data_is_neutral() {
    let prices = [1.0, 1.1, 1.2, 1.3];
    assert_eq!(calculate_rsi(&prices, 14), RSI_NEUTRAL);
    assert_eq!(calculate_rsi_default(&rising_series()[..14]), 50.0);
}

#[test]
fn test_rsi_saturates_without_losses() {
    assert_eq!(calculate_rsi_default(&rising_series()), 100.0);
}

#[test]
fn test_rsi_flat_window_is_neutral() {
    let prices = vec![1.1; 20];
    assert_eq!(calculate_rsi(&prices, 14), 50.0);
}

#[test]
fn test_rsi_mixed_changes() {
    // gains = 1.0, losses = 0.5 => RS = 2 => RSI = 66.67
    let prices = [1.0, 2.0, 1.5];
    assert_close(calculate_rsi(&prices, 2), 100.0 - 100.0 / 3.0, 1e-9);
}

#[test]
fn test_rsi_only_uses_trailing_window() {
    // The early drop is outside the 2-change window
    let prices = [5.0, 1.0, 2.0, 3.0];
    assert_eq!(calculate_rsi(&prices, 2), 100.0);
}

#[test]
fn test_rsi_all_losses_is_zero() {
    let prices = [1.3, 1.2, 1.1, 1.0];
    assert_close(calculate_rsi(&prices, 3), 0.0, 1e-12);
}
