//! Wireless MAC contract

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::error::RegistrationError;

/// Calibration record handed to a radio driver
///
/// Carries both the absolute address the record is mapped at and a view
/// of its bytes. The bytes are passed through uninterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioCalibration<'a> {
    /// Absolute address of the first calibration byte
    pub address: u32,
    pub data: &'a [u8],
}

impl RadioCalibration<'_> {
    /// Length of the calibration record in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check for an empty record
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Serialized as (address, length); the record itself is opaque.
#[cfg(feature = "serde")]
impl Serialize for RadioCalibration<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.address, self.data.len() as u32).serialize(serializer)
    }
}

/// On-SoC wireless MAC
pub trait RadioRegistrar {
    /// Register the wireless MAC
    ///
    /// One argument per radio slot. `None` means the slot is not
    /// populated and must not be registered.
    fn register_radio(
        &mut self,
        cal_2ghz: Option<RadioCalibration<'_>>,
        cal_5ghz: Option<RadioCalibration<'_>>,
    ) -> Result<(), RegistrationError>;
}
