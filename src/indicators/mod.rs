//! Streaming indicator library
//!
//! Every calculation degrades to a neutral default when the history is too
//! short instead of failing, so the scoring policy can run from the first
//! observation.

pub mod momentum;
pub mod regression;
pub mod trend;
pub mod volatility;
