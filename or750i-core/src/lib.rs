//! Board bring-up for the Joy-IT JT-OR750i
//!
//! This crate decides what configuration every on-board peripheral gets
//! and in which order it is registered:
//!
//! - Calibration reader over the factory (ART) flash partition
//! - Static LED, button and calibration-offset tables
//! - The bring-up sequence itself
//! - Machine descriptor used by board selection
//!
//! The subsystems that receive the configuration are described by the
//! traits in `or750i-hal`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod board;
pub mod bringup;
pub mod calibration;
pub mod machine;
#[cfg(feature = "serde")]
pub mod snapshot;

pub use bringup::{BringUp, BringUpError, BringUpReport, Step, StepError};
pub use calibration::{CalibrationBlob, CalibrationError};
pub use machine::{find_machine, MachineDescriptor, JT_OR750I};
