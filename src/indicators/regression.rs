//! Linear regression over the recent price window
//!
//! Prices are the dependent variable, their index `0..n` the independent one.
//! The model is refitted in full whenever new data arrives.

use crate::common::math;
use crate::models::indicators::RegressionModel;

/// Default minimum number of prices for a fit
pub const MIN_REGRESSION_POINTS: usize = 5;

impl RegressionModel {
    /// Fit a fresh model, or `None` with fewer than `min_points` prices
    pub fn fit(prices: &[f64], min_points: usize) -> Option<Self> {
        if prices.len() < min_points.max(1) {
            return None;
        }

        let n = prices.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = math::mean(prices)?;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (i, &y) in prices.iter().enumerate() {
            let dx = i as f64 - mean_x;
            numerator += dx * (y - mean_y);
            denominator += dx * dx;
        }

        let slope = math::safe_div(numerator, denominator, 0.0);
        let intercept = mean_y - slope * mean_x;

        let mut ss_res = 0.0;
        let mut ss_tot = 0.0;
        for (i, &y) in prices.iter().enumerate() {
            let fitted = slope * i as f64 + intercept;
            ss_res += (y - fitted).powi(2);
            ss_tot += (y - mean_y).powi(2);
        }
        let r_squared = if ss_tot == 0.0 { 0.0 } else { 1.0 - ss_res / ss_tot };

        Some(Self {
            slope,
            intercept,
            r_squared,
            data_points: prices.to_vec(),
        })
    }

    /// Refit in place; a no-op returning `false` when there are too few prices
    pub fn refit(&mut self, prices: &[f64], min_points: usize) -> bool {
        match Self::fit(prices, min_points) {
            Some(model) => {
                *self = model;
                true
            }
            None => false,
        }
    }

    pub fn is_fitted(&self) -> bool {
        !self.data_points.is_empty()
    }

    /// Extrapolate the fitted line `steps` samples past the last one
    pub fn predict(&self, steps: usize) -> f64 {
        let x = (self.data_points.len() + steps) as f64 - 1.0;
        self.slope * x + self.intercept
    }

    /// Goodness of fit as a 0-100 confidence
    pub fn confidence(&self) -> f64 {
        (self.r_squared * 100.0).clamp(0.0, 100.0)
    }
}
