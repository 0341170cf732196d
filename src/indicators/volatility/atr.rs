//! ATR proxy
//!
//! Only a single price stream is available, so instead of a true
//! high/low/close range this averages the absolute change between
//! consecutive prices.

use crate::common::math;

/// Mean absolute price change over the trailing `period` changes.
/// Returns 0 with fewer than `period + 1` prices.
pub fn calculate_atr(prices: &[f64], period: usize) -> f64 {
    math::mean_absolute_change(prices, period).unwrap_or(0.0)
}

/// Calculate the ATR proxy with default period (14)
pub fn calculate_atr_default(prices: &[f64]) -> f64 {
    calculate_atr(prices, 14)
}
