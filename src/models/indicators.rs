use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerIndicator {
    /// Position of the last price within the bands; outside [0, 1] when the
    /// price is beyond a band
    pub percent_b: f64,
    pub bandwidth: f64,
}

impl BollingerIndicator {
    /// Midpoint of the bands with zero width
    pub fn neutral() -> Self {
        Self {
            percent_b: 0.5,
            bandwidth: 0.0,
        }
    }
}

impl Default for BollingerIndicator {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Least-squares line over the recent price window, `x` being the sample index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub data_points: Vec<f64>,
}
