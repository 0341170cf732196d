//! Score weights and thresholds for the scoring policy

/// Signed weight each factor contributes to the score
pub struct ScoreWeights;

impl ScoreWeights {
    /// EMA fast/slow alignment; dominant so trend outranks oscillators
    pub const TREND: f64 = 3.0;
    pub const MOMENTUM: f64 = 2.0;
    /// RSI against the trend (buy the dip / sell the rally)
    pub const OSCILLATOR_REVERSAL: f64 = 2.0;
    pub const OSCILLATOR_CONTINUATION: f64 = 1.0;
    /// RSI at an extreme in the direction of the trend
    pub const OSCILLATOR_CAUTION: f64 = 1.0;
    pub const REGRESSION: f64 = 2.0;

    /// Normalizer for confidence
    pub const MAX_SCORE: f64 = 8.0;
    /// Slopes within this band are treated as flat
    pub const REGRESSION_DEAD_BAND: f64 = 0.00005;
    /// Scores within (-THRESHOLD, THRESHOLD) resolve to neutral
    pub const TREND_THRESHOLD: f64 = 2.5;

    pub const MIN_CONFIDENCE: f64 = 10.0;
    pub const MAX_CONFIDENCE: f64 = 99.0;
}

/// RSI levels used by the trend-conditioned oscillator filter
pub struct RsiThresholds;

impl RsiThresholds {
    pub const BULLISH_DIP: f64 = 30.0;
    pub const BULLISH_OVEREXTENDED: f64 = 80.0;
    pub const BEARISH_RALLY: f64 = 70.0;
    pub const BEARISH_OVEREXTENDED: f64 = 20.0;
}
