//! Per-instrument signal engine
//!
//! Owns the history, EMA lines, regression fit and last resolved trend of
//! every instrument. Each observation runs the full pipeline:
//! history → indicators → scoring → prediction.

use crate::config::EngineConfig;
use crate::core::history::PriceHistory;
use crate::error::EngineError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::EmaLines;
use crate::indicators::volatility::{calculate_atr, calculate_bollinger};
use crate::models::indicators::RegressionModel;
use crate::models::observation::{Observation, Quote};
use crate::models::signal::{Prediction, Trend};
use crate::signals::prediction::{assemble_prediction, IndicatorSnapshot};
use crate::signals::scoring::{score_signal, ScoringInput};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything the engine keeps for one instrument
#[derive(Debug, Clone)]
pub struct InstrumentState {
    pub history: PriceHistory,
    pub ema: EmaLines,
    pub regression: RegressionModel,
    pub trend: Trend,
    pub prediction: Option<Arc<Prediction>>,
}

impl InstrumentState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: PriceHistory::new(history_capacity),
            ema: EmaLines::new(),
            regression: RegressionModel::default(),
            trend: Trend::Neutral,
            prediction: None,
        }
    }
}

pub struct SignalEngine {
    config: EngineConfig,
    instruments: HashMap<String, InstrumentState>,
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            instruments: HashMap::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Record an observation and recompute the instrument's prediction.
    ///
    /// Invalid prices and out-of-order timestamps are rejected without
    /// touching any state.
    pub fn update(&mut self, symbol: &str, observation: Observation) -> Result<Arc<Prediction>, EngineError> {
        if !observation.is_valid() {
            return Err(EngineError::InvalidPrice {
                symbol: symbol.to_string(),
                price: observation.price,
            });
        }

        let config = &self.config;
        let state = self
            .instruments
            .entry(symbol.to_string())
            .or_insert_with(|| InstrumentState::new(config.history_capacity));

        if let Some(last) = state.history.latest() {
            if observation.timestamp < last.timestamp {
                return Err(EngineError::OutOfOrder {
                    symbol: symbol.to_string(),
                });
            }
        }

        state.history.push(observation);
        let prices = state.history.prices();

        let macd = calculate_macd(&mut state.ema, prices, &config.macd);
        let snapshot = IndicatorSnapshot {
            price: observation.price,
            rsi: calculate_rsi(prices, config.rsi_period),
            macd,
            bollinger: calculate_bollinger(prices, &config.bollinger),
            atr: calculate_atr(prices, config.atr_period),
            ema12: state.ema.fast.unwrap_or(observation.price),
            ema26: state.ema.slow.unwrap_or(observation.price),
        };

        state.regression.refit(
            state.history.recent_prices(config.regression_window),
            config.regression_min_points,
        );

        let score = if state.history.len() >= config.signal_min_observations {
            let result = score_signal(&ScoringInput {
                ema_fast: snapshot.ema12,
                ema_slow: snapshot.ema26,
                macd_histogram: snapshot.macd.histogram,
                rsi: snapshot.rsi,
                regression_slope: state.regression.slope,
                current_trend: state.trend,
            });
            state.trend = result.trend;
            Some(result)
        } else {
            None
        };

        let prediction = Arc::new(assemble_prediction(
            symbol,
            &snapshot,
            &state.regression,
            score.as_ref(),
            state.history.len(),
            observation.timestamp,
        ));
        state.prediction = Some(prediction.clone());

        debug!(
            symbol = %symbol,
            price = observation.price,
            score = prediction.score,
            trend = %prediction.trend,
            confidence = prediction.confidence,
            observations = prediction.observations,
            "SignalEngine: updated {}",
            symbol
        );

        Ok(prediction)
    }

    /// Apply one polled quote. A missing price or a rejected observation is
    /// a skipped update and returns `None`.
    pub fn apply_quote(&mut self, quote: &Quote) -> Option<Arc<Prediction>> {
        let Some(observation) = quote.observation() else {
            debug!(symbol = %quote.symbol, "SignalEngine: no price for {}, skipping", quote.symbol);
            return None;
        };

        match self.update(&quote.symbol, observation) {
            Ok(prediction) => Some(prediction),
            Err(e) => {
                warn!(symbol = %quote.symbol, error = %e, "SignalEngine: skipped update");
                None
            }
        }
    }

    pub fn prediction(&self, symbol: &str) -> Option<Arc<Prediction>> {
        self.instruments.get(symbol).and_then(|s| s.prediction.clone())
    }

    pub fn state(&self, symbol: &str) -> Option<&InstrumentState> {
        self.instruments.get(symbol)
    }

    pub fn history(&self, symbol: &str) -> Option<&PriceHistory> {
        self.instruments.get(symbol).map(|s| &s.history)
    }

    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.instruments.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    pub fn instrument_count(&self) -> usize {
        self.instruments.len()
    }
}
