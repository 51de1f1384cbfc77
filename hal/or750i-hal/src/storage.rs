//! Persistent storage contract
//!
//! The board boots from SPI NOR flash. The factory calibration (ART)
//! partition lives in the last 64KB of it and is memory-mapped, so the
//! flash must be registered before any calibration data is read.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::RegistrationError;

/// Optional platform data for the SPI NOR driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiFlashConfig {
    /// Force a chip type instead of probing the JEDEC id
    pub chip: Option<&'static str>,
}

/// SPI NOR flash subsystem
pub trait StorageRegistrar {
    /// Register the boot flash
    ///
    /// `None` lets the driver probe the chip and read the partition
    /// layout on its own.
    fn register_storage(
        &mut self,
        config: Option<&SpiFlashConfig>,
    ) -> Result<(), RegistrationError>;
}
