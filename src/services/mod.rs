//! Collaborators that supply quotes to the engine

pub mod market_data;

pub use market_data::*;
