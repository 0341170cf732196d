//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(fast) - EMA(slow)
//! Signal = EMA(signal) of MACD
//! Histogram = MACD - Signal

use crate::config::MacdParams;
use crate::indicators::trend::ema::{EmaLine, EmaLines};
use crate::models::indicators::MacdIndicator;

/// Advance the fast and slow lines with the latest price and derive MACD.
///
/// The fast and slow lines advance on every call so they keep streaming
/// through the warm-up. Until `prices` holds `params.warmup` samples the
/// result is the zero struct and the signal line is left unseeded; the first
/// MACD value after that seeds the signal line, so its histogram is 0.
pub fn calculate_macd(lines: &mut EmaLines, prices: &[f64], params: &MacdParams) -> MacdIndicator {
    let fast = lines.update(EmaLine::Fast, prices, params.fast);
    let slow = lines.update(EmaLine::Slow, prices, params.slow);

    if prices.len() < params.warmup {
        return MacdIndicator::default();
    }

    let (Some(fast), Some(slow)) = (fast, slow) else {
        return MacdIndicator::default();
    };

    let macd = fast - slow;
    let signal = lines.update_value(EmaLine::Signal, macd, params.signal);

    MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
    }
}

