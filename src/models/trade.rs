use crate::error::RiskError;
use crate::models::signal::Trend;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl From<Trend> for TradeAction {
    fn from(trend: Trend) -> Self {
        match trend {
            Trend::Bullish => TradeAction::Buy,
            Trend::Bearish => TradeAction::Sell,
            Trend::Neutral => TradeAction::Hold,
        }
    }
}

/// User-adjustable risk settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSettings {
    pub account_balance: f64,
    pub risk_percent: f64,
    pub risk_reward_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub manual_lot_size: Option<f64>,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            account_balance: 10_000.0,
            risk_percent: 1.0,
            risk_reward_ratio: 2.0,
            manual_lot_size: None,
        }
    }
}

impl RiskSettings {
    pub fn validate(&self) -> Result<(), RiskError> {
        if !(self.account_balance > 0.0) || !self.account_balance.is_finite() {
            return Err(RiskError::InvalidAccountBalance(self.account_balance));
        }
        if !(self.risk_percent > 0.0 && self.risk_percent <= 100.0) {
            return Err(RiskError::InvalidRiskPercent(self.risk_percent));
        }
        if !(self.risk_reward_ratio > 0.0) || !self.risk_reward_ratio.is_finite() {
            return Err(RiskError::InvalidRiskReward(self.risk_reward_ratio));
        }
        if let Some(lot) = self.manual_lot_size {
            if !(lot > 0.0) || !lot.is_finite() {
                return Err(RiskError::InvalidLotSize(lot));
            }
        }
        Ok(())
    }
}

/// Entry, stop and target for a directional trade; never stored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeLevels {
    pub action: TradeAction,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub sl_distance: f64,
    pub tp_distance: f64,
    pub lot_size: f64,
    pub risk_amount: f64,
    pub potential_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecommendation {
    pub symbol: String,
    pub action: TradeAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<TradeLevels>,
}
