use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded price for one instrument
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub price: f64,
    pub timestamp: DateTime<Utc>,
}

impl Observation {
    pub fn new(price: f64, timestamp: DateTime<Utc>) -> Self {
        Self { price, timestamp }
    }

    /// Finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }
}

/// Result of polling a quote source for one instrument in one cycle.
///
/// `price` is `None` when the fetch failed; that is distinct from a zero
/// price and means "skip this instrument for this cycle".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, price: Option<f64>, timestamp: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            timestamp,
        }
    }

    pub fn missing(symbol: impl Into<String>) -> Self {
        Self::new(symbol, None, Utc::now())
    }

    pub fn observation(&self) -> Option<Observation> {
        self.price.map(|price| Observation::new(price, self.timestamp))
    }
}
