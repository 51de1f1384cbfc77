//! USB host contract

use crate::error::RegistrationError;

/// USB host controller subsystem
pub trait UsbRegistrar {
    /// Register the SoC's USB host controller
    fn register_usb(&mut self) -> Result<(), RegistrationError>;
}
