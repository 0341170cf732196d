//! Engine, instrument and runtime configuration
//!
//! All indicator periods and capacities are plain overridable constants.
//! `Config::from_env` layers environment variables (and `.env`) over the
//! defaults. Per-instrument pip settings are read from
//! `PIP_VALUE_<SYMBOL>` / `PIP_DIGITS_<SYMBOL>` with the symbol's
//! non-alphanumerics replaced by `_` (`PIP_VALUE_EUR_USD`).

use crate::core::runtime::RuntimeConfig;
use crate::core::scheduler::interval_to_cron;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::str::FromStr;

/// Deployment environment name (`APP_ENV`), lowercased, defaulting to `sandbox`
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .unwrap_or_else(|_| "sandbox".to_string())
        .to_lowercase()
}

/// MACD line periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
    /// Observations required before the MACD line and signal line are produced
    pub warmup: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
            warmup: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    pub period: usize,
    pub multiplier: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

/// Indicator periods, window sizes and risk constants shared by every instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub history_capacity: usize,
    pub chart_window: usize,
    pub regression_window: usize,
    pub regression_min_points: usize,
    /// Observations required before trend/confidence resolution runs
    pub signal_min_observations: usize,
    pub rsi_period: usize,
    pub macd: MacdParams,
    pub bollinger: BollingerParams,
    pub atr_period: usize,
    pub stop_floor_pips: f64,
    pub spread_buffer_pips: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: 100,
            chart_window: 50,
            regression_window: 100,
            regression_min_points: 5,
            signal_min_observations: 15,
            rsi_period: 14,
            macd: MacdParams::default(),
            bollinger: BollingerParams::default(),
            atr_period: 14,
            stop_floor_pips: 15.0,
            spread_buffer_pips: 2.0,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("history_capacity", self.history_capacity),
            ("chart_window", self.chart_window),
            ("regression_window", self.regression_window),
            ("rsi_period", self.rsi_period),
            ("macd.fast", self.macd.fast),
            ("macd.slow", self.macd.slow),
            ("macd.signal", self.macd.signal),
            ("bollinger.period", self.bollinger.period),
            ("atr_period", self.atr_period),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{} must be greater than 0", name)));
            }
        }
        if self.regression_min_points < 2 {
            return Err(ConfigError::Invalid(
                "regression_min_points must be at least 2".to_string(),
            ));
        }
        if self.regression_window < self.regression_min_points {
            return Err(ConfigError::Invalid(format!(
                "regression_window ({}) must hold at least regression_min_points ({})",
                self.regression_window, self.regression_min_points
            )));
        }
        if self.macd.fast >= self.macd.slow {
            return Err(ConfigError::Invalid(format!(
                "macd.fast ({}) must be below macd.slow ({})",
                self.macd.fast, self.macd.slow
            )));
        }
        if !(self.bollinger.multiplier > 0.0) {
            return Err(ConfigError::Invalid(
                "bollinger.multiplier must be positive".to_string(),
            ));
        }
        if self.stop_floor_pips < 0.0 || self.spread_buffer_pips < 0.0 {
            return Err(ConfigError::Invalid(
                "pip distances must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-instrument pip size and display precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    pub pip_value: f64,
    pub pip_digits: u32,
}

impl InstrumentConfig {
    pub fn new(pip_value: f64, pip_digits: u32) -> Self {
        Self {
            pip_value,
            pip_digits,
        }
    }

    /// Fallback guess from the symbol when no explicit entry is configured
    pub fn for_symbol(symbol: &str) -> Self {
        let upper = symbol.to_uppercase();
        if upper.contains("XAU") {
            Self::new(0.1, 2)
        } else if upper.contains("JPY") {
            Self::new(0.01, 3)
        } else {
            Self::new(0.0001, 5)
        }
    }

    /// Round a price to the instrument's display precision
    pub fn round_price(&self, price: f64) -> f64 {
        let factor = 10f64.powi(self.pip_digits as i32);
        (price * factor).round() / factor
    }

    pub fn format_price(&self, price: f64) -> String {
        format!("{:.*}", self.pip_digits as usize, price)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub engine: EngineConfig,
    pub instruments: HashMap<String, InstrumentConfig>,
    pub runtime: RuntimeConfig,
}

impl Config {
    /// Instrument settings, falling back to a symbol-based guess
    pub fn instrument(&self, symbol: &str) -> InstrumentConfig {
        self.instruments
            .get(symbol)
            .copied()
            .unwrap_or_else(|| InstrumentConfig::for_symbol(symbol))
    }

    pub fn with_instrument(mut self, symbol: impl Into<String>, instrument: InstrumentConfig) -> Self {
        self.instruments.insert(symbol.into(), instrument);
        self
    }

    /// Load `.env` if present, then read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = EngineConfig::default();
        let macd = MacdParams {
            fast: parse_or(&lookup, "MACD_FAST", defaults.macd.fast)?,
            slow: parse_or(&lookup, "MACD_SLOW", defaults.macd.slow)?,
            signal: parse_or(&lookup, "MACD_SIGNAL", defaults.macd.signal)?,
            warmup: parse_or(&lookup, "MACD_WARMUP", defaults.macd.warmup)?,
        };
        let engine = EngineConfig {
            history_capacity: parse_or(&lookup, "HISTORY_CAPACITY", defaults.history_capacity)?,
            chart_window: parse_or(&lookup, "CHART_WINDOW", defaults.chart_window)?,
            regression_window: parse_or(&lookup, "REGRESSION_WINDOW", defaults.regression_window)?,
            rsi_period: parse_or(&lookup, "RSI_PERIOD", defaults.rsi_period)?,
            macd,
            bollinger: BollingerParams {
                period: parse_or(&lookup, "BOLLINGER_PERIOD", defaults.bollinger.period)?,
                multiplier: parse_or(
                    &lookup,
                    "BOLLINGER_MULTIPLIER",
                    defaults.bollinger.multiplier,
                )?,
            },
            atr_period: parse_or(&lookup, "ATR_PERIOD", defaults.atr_period)?,
            regression_min_points: parse_or(
                &lookup,
                "REGRESSION_MIN_POINTS",
                defaults.regression_min_points,
            )?,
            signal_min_observations: parse_or(
                &lookup,
                "SIGNAL_MIN_OBSERVATIONS",
                defaults.signal_min_observations,
            )?,
            stop_floor_pips: parse_or(&lookup, "STOP_FLOOR_PIPS", defaults.stop_floor_pips)?,
            spread_buffer_pips: parse_or(&lookup, "SPREAD_BUFFER_PIPS", defaults.spread_buffer_pips)?,
        };
        engine.validate()?;

        let runtime_defaults = RuntimeConfig::default();
        let symbols = lookup("SYMBOLS")
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or(runtime_defaults.symbols);
        let runtime = RuntimeConfig {
            evaluation_interval_seconds: parse_or(
                &lookup,
                "EVAL_INTERVAL_SECONDS",
                runtime_defaults.evaluation_interval_seconds,
            )?,
            symbols,
        };

        interval_to_cron(runtime.evaluation_interval_seconds)?;

        let mut instruments = HashMap::new();
        for symbol in &runtime.symbols {
            let fallback = InstrumentConfig::for_symbol(symbol);
            let suffix = instrument_key_suffix(symbol);
            let instrument = InstrumentConfig::new(
                parse_or(&lookup, &format!("PIP_VALUE_{}", suffix), fallback.pip_value)?,
                parse_or(&lookup, &format!("PIP_DIGITS_{}", suffix), fallback.pip_digits)?,
            );
            if !(instrument.pip_value > 0.0) || !instrument.pip_value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    key: format!("PIP_VALUE_{}", suffix),
                    value: instrument.pip_value.to_string(),
                });
            }
            instruments.insert(symbol.clone(), instrument);
        }

        Ok(Self {
            engine,
            instruments,
            runtime,
        })
    }
}

/// Environment key suffix for a symbol: `EUR/USD` becomes `EUR_USD`
pub fn instrument_key_suffix(symbol: &str) -> String {
    symbol
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
