//! Explanation breakdown for a finished prediction
//!
//! Reads the per-factor contributions stored on the prediction; no weight
//! is recomputed here.

use crate::models::signal::{Prediction, SignalReason, Trend};

pub struct Aggregator;

impl Aggregator {
    /// One reason per scoring factor, strongest contribution first.
    /// Factors that contributed nothing are left out.
    pub fn generate_reasons(prediction: &Prediction) -> Vec<SignalReason> {
        let breakdown = &prediction.breakdown;
        let mut reasons = vec![
            SignalReason {
                description: format!(
                    "EMA trend {}: EMA12={:.5}, EMA26={:.5}",
                    direction_label(breakdown.trend),
                    prediction.ema12,
                    prediction.ema26
                ),
                weight: breakdown.trend,
            },
            SignalReason {
                description: format!(
                    "MACD momentum {}: Histogram={:.6}",
                    direction_label(breakdown.momentum),
                    prediction.macd.histogram
                ),
                weight: breakdown.momentum,
            },
            SignalReason {
                description: format!("RSI {}: {:.2}", oscillator_label(prediction), prediction.rsi),
                weight: breakdown.oscillator,
            },
            SignalReason {
                description: format!(
                    "Regression slope {}: {:.6} (R²={:.2})",
                    direction_label(breakdown.regression),
                    prediction.regression_slope,
                    prediction.r_squared
                ),
                weight: breakdown.regression,
            },
        ];

        reasons.retain(|r| r.weight != 0.0);
        reasons.sort_by(|a, b| b.weight.abs().total_cmp(&a.weight.abs()));
        reasons
    }

    /// Sum of bullish and bearish contributions, for split-bar displays
    pub fn bull_bear_totals(prediction: &Prediction) -> (f64, f64) {
        let b = &prediction.breakdown;
        [b.trend, b.momentum, b.oscillator, b.regression]
            .iter()
            .fold((0.0, 0.0), |(bull, bear), &w| {
                if w > 0.0 {
                    (bull + w, bear)
                } else {
                    (bull, bear - w)
                }
            })
    }
}

fn direction_label(weight: f64) -> &'static str {
    if weight > 0.0 {
        "bullish"
    } else {
        "bearish"
    }
}

fn oscillator_label(prediction: &Prediction) -> &'static str {
    let weight = prediction.breakdown.oscillator;
    match (prediction.trend, weight > 0.0) {
        (Trend::Bullish, true) | (Trend::Bearish, false) => "confirms trend",
        _ => "leans against trend",
    }
}
