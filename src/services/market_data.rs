//! Quote source interface.
//!
//! Sources poll whatever upstream they wrap and report either a price or a
//! distinguishable absence for a failed fetch. Retries belong to the source,
//! not to the engine.

use crate::models::observation::Quote;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::Mutex;

#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Latest price for a symbol, `None` if it could not be fetched this cycle
    async fn latest_price(&self, symbol: &str) -> Option<f64>;

    async fn fetch_quote(&self, symbol: &str) -> Quote {
        let price = self.latest_price(symbol).await;
        Quote::new(symbol, price, Utc::now())
    }
}

/// Replays scripted per-symbol price sequences, one value per poll.
///
/// A `None` entry stands for a failed fetch. Once a sequence is exhausted
/// every further poll reports no price.
pub struct ReplayQuoteSource {
    series: HashMap<String, Vec<Option<f64>>>,
    cursors: Mutex<HashMap<String, usize>>,
}

impl ReplayQuoteSource {
    pub fn new(series: HashMap<String, Vec<Option<f64>>>) -> Self {
        Self {
            series,
            cursors: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_prices(symbol: impl Into<String>, prices: &[f64]) -> Self {
        let mut series = HashMap::new();
        series.insert(symbol.into(), prices.iter().copied().map(Some).collect());
        Self::new(series)
    }

    /// Parse `{ "EUR/USD": [1.1, null, 1.1002], ... }`
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let series: HashMap<String, Vec<Option<f64>>> = serde_json::from_str(json)?;
        Ok(Self::new(series))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::from_json_str(&raw)?)
    }

    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.series.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    /// True once every sequence has been fully replayed
    pub async fn is_exhausted(&self) -> bool {
        let cursors = self.cursors.lock().await;
        self.series
            .iter()
            .all(|(symbol, values)| cursors.get(symbol).copied().unwrap_or(0) >= values.len())
    }
}

#[async_trait]
impl QuoteSource for ReplayQuoteSource {
    async fn latest_price(&self, symbol: &str) -> Option<f64> {
        let values = self.series.get(symbol)?;
        let mut cursors = self.cursors.lock().await;
        let cursor = cursors.entry(symbol.to_string()).or_insert(0);
        let value = values.get(*cursor).copied().flatten();
        if *cursor < values.len() {
            *cursor += 1;
        }
        value
    }
}
