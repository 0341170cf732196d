//! EMA (Exponential Moving Average) indicator
//!
//! EMAs here are streaming state: each line keeps its running value between
//! calls and is advanced by one smoothing step per observation. MACD needs
//! three independent lines for the same instrument, so they live side by
//! side as named fields of [`EmaLines`].

use crate::common::math;
use serde::{Deserialize, Serialize};

/// Which running average an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmaLine {
    Fast,
    Slow,
    Signal,
}

/// Running EMA values for one instrument. `None` until first seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmaLines {
    pub fast: Option<f64>,
    pub slow: Option<f64>,
    pub signal: Option<f64>,
}

impl EmaLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, line: EmaLine) -> Option<f64> {
        match line {
            EmaLine::Fast => self.fast,
            EmaLine::Slow => self.slow,
            EmaLine::Signal => self.signal,
        }
    }

    fn slot_mut(&mut self, line: EmaLine) -> &mut Option<f64> {
        match line {
            EmaLine::Fast => &mut self.fast,
            EmaLine::Slow => &mut self.slow,
            EmaLine::Signal => &mut self.signal,
        }
    }

    /// Advance a price-driven line with the latest price in `prices`.
    ///
    /// The first call seeds the line with the SMA over
    /// `min(period, prices.len())` samples and returns that seed. Later calls
    /// apply `ema = price * k + ema * (1 - k)`. Returns `None` only for an
    /// empty history, leaving the line untouched.
    pub fn update(&mut self, line: EmaLine, prices: &[f64], period: usize) -> Option<f64> {
        let latest = *prices.last()?;
        let slot = self.slot_mut(line);
        let next = match *slot {
            Some(previous) => math::ema_from_previous(latest, previous, period),
            None => {
                let window = period.min(prices.len());
                math::sma(prices, window).unwrap_or(latest)
            }
        };
        *slot = Some(next);
        Some(next)
    }

    /// Advance a line fed by a derived series (the MACD signal line).
    /// The first value seeds the line directly.
    pub fn update_value(&mut self, line: EmaLine, value: f64, period: usize) -> f64 {
        let slot = self.slot_mut(line);
        let next = match *slot {
            Some(previous) => math::ema_from_previous(value, previous, period),
            None => value,
        };
        *slot = Some(next);
        next
    }
}

/// Compare the fast and slow lines: 1 when fast is above, -1 when below,
/// 0 when equal or not yet seeded
pub fn check_ema_cross(lines: &EmaLines) -> i32 {
    match (lines.fast, lines.slow) {
        (Some(fast), Some(slow)) if fast > slow => 1,
        (Some(fast), Some(slow)) if fast < slow => -1,
        _ => 0,
    }
}
