//! Bollinger Bands indicator
//!
//! Middle Band = SMA(period)
//! Upper Band = Middle + (multiplier * population standard deviation)
//! Lower Band = Middle - (multiplier * population standard deviation)

use crate::common::math;
use crate::config::BollingerParams;
use crate::models::indicators::BollingerIndicator;

/// Calculate %B and bandwidth for the last price.
///
/// %B is not clamped: a price above the upper band gives %B > 1.
pub fn calculate_bollinger_bands(prices: &[f64], period: usize, multiplier: f64) -> BollingerIndicator {
    let (Some(middle), Some(std), Some(&last)) = (
        math::sma(prices, period),
        math::standard_deviation(prices, period),
        prices.last(),
    ) else {
        return BollingerIndicator::neutral();
    };

    let upper = middle + (multiplier * std);
    let lower = middle - (multiplier * std);
    let width = upper - lower;

    if width <= 0.0 {
        return BollingerIndicator::neutral();
    }

    BollingerIndicator {
        percent_b: (last - lower) / width,
        bandwidth: math::safe_div(width, middle, 0.0),
    }
}

pub fn calculate_bollinger(prices: &[f64], params: &BollingerParams) -> BollingerIndicator {
    calculate_bollinger_bands(prices, params.period, params.multiplier)
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(prices: &[f64]) -> BollingerIndicator {
    calculate_bollinger(prices, &BollingerParams::default())
}
