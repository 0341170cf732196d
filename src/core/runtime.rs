//! Update pass: poll every instrument, then apply the quotes in order
//!
//! Fetches for one pass run concurrently and are all awaited before any
//! engine state changes. Quotes are then applied one after another under
//! the engine lock, and each new prediction is published as an `Arc` so
//! readers always see a whole record.

use crate::config::{Config, InstrumentConfig};
use crate::error::RiskError;
use crate::metrics::Metrics;
use crate::models::signal::Prediction;
use crate::models::trade::{RiskSettings, TradeRecommendation};
use crate::services::market_data::QuoteSource;
use crate::signals::decision::StopLossTakeProfit;
use crate::signals::engine::SignalEngine;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// Configuration for the update loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub evaluation_interval_seconds: u64,
    pub symbols: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            evaluation_interval_seconds: 5,
            symbols: vec![
                "EUR/USD".to_string(),
                "GBP/USD".to_string(),
                "USD/JPY".to_string(),
                "XAU/USD".to_string(),
            ],
        }
    }
}

/// Outcome of one update pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub applied: usize,
    pub skipped: usize,
    /// The pass did not run because another one was still in flight
    pub overlapped: bool,
}

pub struct SignalRuntime {
    config: Config,
    source: Arc<dyn QuoteSource>,
    engine: Mutex<SignalEngine>,
    predictions: RwLock<HashMap<String, Arc<Prediction>>>,
    cycle_guard: Mutex<()>,
    metrics: Option<Arc<Metrics>>,
}

impl SignalRuntime {
    pub fn new(config: Config, source: Arc<dyn QuoteSource>) -> Self {
        let engine = SignalEngine::new(config.engine.clone());
        Self {
            config,
            source,
            engine: Mutex::new(engine),
            predictions: RwLock::new(HashMap::new()),
            cycle_guard: Mutex::new(()),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn symbols(&self) -> &[String] {
        &self.config.runtime.symbols
    }

    /// Run one update pass over every configured symbol.
    ///
    /// If a previous pass is still running this returns immediately with
    /// `overlapped` set and changes nothing.
    pub async fn run_cycle(&self) -> CycleReport {
        let Ok(_guard) = self.cycle_guard.try_lock() else {
            debug!("SignalRuntime: previous cycle still in flight, skipping");
            return CycleReport {
                overlapped: true,
                ..CycleReport::default()
            };
        };

        let start = Instant::now();
        let quotes = join_all(self.symbols().iter().map(|s| self.source.fetch_quote(s))).await;

        let mut report = CycleReport::default();
        let mut published = Vec::new();
        let instrument_count = {
            let mut engine = self.engine.lock().await;
            for quote in &quotes {
                match engine.apply_quote(quote) {
                    Some(prediction) => {
                        report.applied += 1;
                        published.push(prediction);
                    }
                    None => report.skipped += 1,
                }
            }
            engine.instrument_count()
        };

        {
            let mut predictions = self.predictions.write().await;
            for prediction in published {
                predictions.insert(prediction.symbol.clone(), prediction);
            }
        }

        if let Some(ref metrics) = self.metrics {
            metrics.updates_total.inc_by(report.applied as u64);
            metrics.updates_skipped_total.inc_by(report.skipped as u64);
            metrics.instruments_tracked.set(instrument_count as f64);
            metrics
                .cycle_duration_seconds
                .observe(start.elapsed().as_secs_f64());
        }

        info!(
            applied = report.applied,
            skipped = report.skipped,
            "SignalRuntime: cycle complete ({} applied, {} skipped)",
            report.applied,
            report.skipped
        );

        report
    }

    /// Latest published prediction for a symbol
    pub async fn prediction(&self, symbol: &str) -> Option<Arc<Prediction>> {
        self.predictions.read().await.get(symbol).cloned()
    }

    /// Snapshot of every published prediction
    pub async fn predictions(&self) -> HashMap<String, Arc<Prediction>> {
        self.predictions.read().await.clone()
    }

    /// Most recent `chart_window` prices for display
    pub async fn chart_prices(&self, symbol: &str) -> Vec<f64> {
        let engine = self.engine.lock().await;
        let window = engine.config().chart_window;
        engine
            .history(symbol)
            .map(|h| h.recent_prices(window).to_vec())
            .unwrap_or_default()
    }

    pub fn instrument(&self, symbol: &str) -> InstrumentConfig {
        self.config.instrument(symbol)
    }

    /// Trade levels for the latest prediction, entering at its price.
    /// `None` until the symbol has a prediction.
    pub async fn trade_recommendation(
        &self,
        symbol: &str,
        settings: &RiskSettings,
    ) -> Option<Result<TradeRecommendation, RiskError>> {
        let prediction = self.prediction(symbol).await?;
        let calculator = StopLossTakeProfit::from_config(&self.config.engine);
        Some(calculator.recommend(
            &prediction,
            prediction.price,
            &self.instrument(symbol),
            settings,
        ))
    }
}
