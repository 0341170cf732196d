//! Streaming indicator and prediction engine for currency/commodity quotes.
//!
//! Observations flow through a per-instrument ring buffer into the indicator
//! library, the scoring policy turns those indicators into a stable trend
//! call, and the prediction assembler publishes one record per instrument.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
