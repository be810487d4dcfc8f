//! pagesim - A deterministic simulator of page replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Collaborators (input/, render/, config)           │   │
//! │  │   text → Vec<PageId>        SimulationResult → text      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Engine (engine/)                         │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │      Replacers: FIFO | LRU | Optimal            │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Engine + FrameSet + StepSnapshot history            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Capacity, Error, config)
//! - [`engine`] - The replacement engine and policy implementations
//! - [`input`] - Reference string parsing and seeded random strings
//! - [`render`] - Plain-text output
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, PageId, Policy};
//!
//! let refs = PageId::sequence([7, 0, 1, 2, 0, 3, 0, 4]);
//! let result = simulate(&refs, 3, Policy::Optimal).unwrap();
//!
//! assert_eq!(result.fault_count(), 6);
//! assert_eq!(result.history().len(), refs.len());
//! ```

pub mod common;
pub mod engine;
pub mod input;
pub mod render;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimulationConfig, DEFAULT_FRAMES};
pub use common::{Capacity, Error, PageId, Result};

pub use engine::{
    compare, simulate, Comparison, Engine, FrameSet, OptimalStrategy, Policy, RunStats,
    SimulationResult, StepSnapshot,
};
