//! Errors signalled by registration contracts

use core::fmt;

/// Errors a subsystem may return when asked to register a peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationError {
    /// Subsystem refused the descriptor
    Rejected,
    /// Underlying hardware is not present
    NoDevice,
    /// Resource (GPIO line, bus index, IRQ) is already claimed
    Busy,
    /// Descriptor contents are inconsistent
    InvalidConfig,
    /// Subsystem could not allocate the device
    OutOfMemory,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RegistrationError::Rejected => "registration rejected",
            RegistrationError::NoDevice => "no such device",
            RegistrationError::Busy => "resource busy",
            RegistrationError::InvalidConfig => "invalid configuration",
            RegistrationError::OutOfMemory => "out of memory",
        };
        f.write_str(msg)
    }
}
