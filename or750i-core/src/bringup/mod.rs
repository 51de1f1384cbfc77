//! Board bring-up sequence
//!
//! Registers every on-board peripheral exactly once, in dependency
//! order, filling in the Ethernet descriptors from the factory
//! calibration on the way.

pub mod report;
pub mod sequencer;
pub mod step;

#[cfg(test)]
pub(crate) mod mock;

pub use report::{BringUpReport, StepError, StepOutcome};
pub use sequencer::{BringUp, BringUpError};
pub use step::Step;
