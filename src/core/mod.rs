//! Core application primitives (history, update pass, scheduler)

pub mod history;
pub mod runtime;
pub mod scheduler;

pub use history::*;
pub use runtime::*;
pub use scheduler::*;
