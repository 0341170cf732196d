//! Numeric helpers shared by the indicator library
//!
//! Every helper that divides guards its denominator and returns `None` (or a
//! neutral value) instead of producing NaN or infinity.

/// Arithmetic mean of a slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Simple moving average over the last `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    mean(&values[values.len() - period..])
}

/// EMA smoothing constant `k = 2 / (period + 1)`
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Advance an exponential average by one value
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = ema_multiplier(period);
    value * k + previous * (1.0 - k)
}

/// Population standard deviation over the last `period` values
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    let window = trailing(values, period)?;
    let avg = mean(window)?;
    let variance = window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / window.len() as f64;
    Some(variance.sqrt())
}

/// Mean of absolute consecutive differences over the trailing `period` deltas
pub fn mean_absolute_change(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period + 1 {
        return None;
    }
    let window = &values[values.len() - (period + 1)..];
    let total: f64 = window.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    Some(total / period as f64)
}

/// Last `period` values, or `None` if not enough are available
pub fn trailing(values: &[f64], period: usize) -> Option<&[f64]> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(&values[values.len() - period..])
}

/// `value / denominator`, or `fallback` when the denominator is zero or not finite
pub fn safe_div(value: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        fallback
    } else {
        value / denominator
    }
}
