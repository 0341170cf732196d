//! Stop-loss, take-profit and position sizing from a prediction

use crate::config::{EngineConfig, InstrumentConfig};
use crate::error::RiskError;
use crate::models::signal::Prediction;
use crate::models::trade::{RiskSettings, TradeAction, TradeLevels, TradeRecommendation};

pub const MIN_LOT_SIZE: f64 = 0.01;
pub const MAX_LOT_SIZE: f64 = 50.0;
/// Account currency value of one pip on one standard lot
pub const PIP_VALUE_PER_LOT: f64 = 10.0;

/// Stop distance: the larger of the pip floor and twice the ATR proxy
pub fn stop_distance(pip_value: f64, atr: f64, floor_pips: f64) -> f64 {
    (pip_value * floor_pips).max(atr * 2.0)
}

/// Lot size risking `risk_amount` over `sl_distance`, clamped to [0.01, 50]
pub fn lot_size(risk_amount: f64, sl_distance: f64, pip_value: f64) -> f64 {
    let pips_at_risk = if pip_value > 0.0 { sl_distance / pip_value } else { 0.0 };
    let denominator = pips_at_risk * PIP_VALUE_PER_LOT;
    if denominator <= 0.0 {
        return MIN_LOT_SIZE;
    }
    (risk_amount / denominator).clamp(MIN_LOT_SIZE, MAX_LOT_SIZE)
}

/// Trade level calculator for one engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopLossTakeProfit {
    pub stop_floor_pips: f64,
    pub spread_buffer_pips: f64,
}

impl Default for StopLossTakeProfit {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl StopLossTakeProfit {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            stop_floor_pips: config.stop_floor_pips,
            spread_buffer_pips: config.spread_buffer_pips,
        }
    }

    /// Levels for a directional prediction, `None` when the trend is neutral
    pub fn levels(
        &self,
        prediction: &Prediction,
        current_price: f64,
        instrument: &InstrumentConfig,
        settings: &RiskSettings,
    ) -> Result<Option<TradeLevels>, RiskError> {
        settings.validate()?;

        let action = TradeAction::from(prediction.trend);
        let direction = match action {
            TradeAction::Buy => 1.0,
            TradeAction::Sell => -1.0,
            TradeAction::Hold => return Ok(None),
        };

        let pip_value = instrument.pip_value;
        let sl_distance = stop_distance(pip_value, prediction.atr, self.stop_floor_pips);
        let tp_distance = sl_distance * settings.risk_reward_ratio;
        let spread_buffer = pip_value * self.spread_buffer_pips;

        let entry = current_price;
        let stop_loss = entry - direction * sl_distance;
        let take_profit = entry + direction * (tp_distance + spread_buffer);

        let risk_amount = settings.account_balance * settings.risk_percent / 100.0;
        let lots = settings
            .manual_lot_size
            .unwrap_or_else(|| lot_size(risk_amount, sl_distance, pip_value));

        Ok(Some(TradeLevels {
            action,
            entry: instrument.round_price(entry),
            stop_loss: instrument.round_price(stop_loss),
            take_profit: instrument.round_price(take_profit),
            sl_distance,
            tp_distance,
            lot_size: lots,
            risk_amount,
            potential_profit: risk_amount * settings.risk_reward_ratio,
        }))
    }

    pub fn recommend(
        &self,
        prediction: &Prediction,
        current_price: f64,
        instrument: &InstrumentConfig,
        settings: &RiskSettings,
    ) -> Result<TradeRecommendation, RiskError> {
        let levels = self.levels(prediction, current_price, instrument, settings)?;
        Ok(TradeRecommendation {
            symbol: prediction.symbol.clone(),
            action: TradeAction::from(prediction.trend),
            levels,
        })
    }
}
