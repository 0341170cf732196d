//! RSI (Relative Strength Index) indicator

/// Value returned while the history is too short, and for a flat window
pub const RSI_NEUTRAL: f64 = 50.0;

/// Calculate RSI over the trailing `period` price changes
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = sum of gains / sum of losses
///
/// Returns 50 with fewer than `period + 1` prices. A window with gains and
/// no losses saturates at exactly 100; a window with neither is neutral.
pub fn calculate_rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return RSI_NEUTRAL;
    }

    let window = &prices[prices.len() - (period + 1)..];
    let mut gains = 0.0;
    let mut losses = 0.0;

    for pair in window.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains += change;
        } else {
            losses += change.abs();
        }
    }

    if losses == 0.0 {
        return if gains == 0.0 { RSI_NEUTRAL } else { 100.0 };
    }

    let rs = gains / losses;
    100.0 - (100.0 / (1.0 + rs))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> f64 {
    calculate_rsi(prices, 14)
}
