//! Shared helpers used across indicator and signal layers

pub mod math;
