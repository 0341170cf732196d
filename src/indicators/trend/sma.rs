//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Mean of the last `period` prices, `None` if fewer are available
pub fn calculate_sma(prices: &[f64], period: usize) -> Option<f64> {
    math::sma(prices, period)
}
