//! Cycle module for rotary-indexer.
//!
//! The full-revolution relay/step sequencer.

mod engine;
mod phase;

pub use engine::CycleEngine;
pub use phase::{CyclePhase, CycleStatus};
