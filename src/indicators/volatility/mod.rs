//! Volatility indicators: Bollinger Bands, ATR proxy

pub mod atr;
pub mod bollinger;

pub use atr::*;
pub use bollinger::*;
