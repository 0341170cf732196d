//! Fixed-capacity price history per instrument

use crate::models::observation::Observation;
use std::collections::VecDeque;

/// Insertion-ordered observations, oldest evicted first once full
#[derive(Debug, Clone)]
pub struct PriceHistory {
    capacity: usize,
    observations: VecDeque<Observation>,
    prices: VecDeque<f64>,
}

impl PriceHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            observations: VecDeque::with_capacity(capacity),
            prices: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an observation, evicting the oldest on overflow.
    /// Returns the evicted observation, if any.
    pub fn push(&mut self, observation: Observation) -> Option<Observation> {
        let evicted = if self.observations.len() == self.capacity {
            self.prices.pop_front();
            self.observations.pop_front()
        } else {
            None
        };
        self.observations.push_back(observation);
        self.prices.push_back(observation.price);
        // Keep the price ring in one slice so readers can borrow it directly
        self.prices.make_contiguous();
        evicted
    }

    /// Prices in insertion order
    pub fn prices(&self) -> &[f64] {
        self.prices.as_slices().0
    }

    /// Prices of the most recent `n` observations
    pub fn recent_prices(&self, n: usize) -> &[f64] {
        let prices = self.prices();
        &prices[prices.len().saturating_sub(n)..]
    }

    /// The most recent `n` observations, oldest first (chart window)
    pub fn window(&self, n: usize) -> Vec<Observation> {
        let skip = self.observations.len().saturating_sub(n);
        self.observations.iter().skip(skip).copied().collect()
    }

    pub fn latest(&self) -> Option<&Observation> {
        self.observations.back()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }
}
