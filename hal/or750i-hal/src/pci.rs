//! PCI expansion bus contract

use crate::error::RegistrationError;

/// PCI(e) host controller
pub trait ExpansionBusRegistrar {
    /// Bring up the expansion bus
    ///
    /// Devices behind the bus claim interrupts and GPIO lines during
    /// enumeration, so this has to run after every on-board peripheral
    /// has been registered.
    fn register_expansion_bus(&mut self) -> Result<(), RegistrationError>;
}
