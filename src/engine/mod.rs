//! The replacement engine.
//!
//! Simulates a fixed number of frames against a reference string under a
//! chosen replacement policy, recording the resident set after every
//! reference.
//!
//! # Components
//! - [`Engine`] - Validates input and drives a policy over the references
//! - [`FrameSet`] - The resident pages, in policy-defined slot order
//! - [`SimulationResult`] / [`StepSnapshot`] - Fault count and step history
//! - [`RunStats`] - Hit/fault counters derived from the history
//! - [`replacer`] - Policy implementations

mod driver;
mod frame_set;
mod history;
mod policy;
pub mod replacer;
mod stats;

pub use driver::{compare, run_fifo, run_lru, run_optimal, simulate, Comparison, Engine};
pub use frame_set::FrameSet;
pub use history::{SimulationResult, StepSnapshot};
pub use policy::{OptimalStrategy, Policy};
pub use stats::RunStats;
