//! OR750i peripheral registration contracts
//!
//! This crate defines the contracts between the board bring-up sequence and
//! the subsystems that own the actual peripherals. The bring-up only decides
//! *what* each subsystem receives and *in which order*; the subsystems are
//! implemented by the platform.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Bring-up sequence (or750i-core)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  or750i-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!     ┌───────┬───────┼───────┬───────┐
//!     ▼       ▼       ▼       ▼       ▼
//!  storage  mdio/  gpio-   usb/   pci
//!           eth    leds    wmac
//! ```
//!
//! # Traits
//!
//! - [`storage::StorageRegistrar`] - SPI NOR flash
//! - [`eth::SwitchSetup`], [`eth::MdioRegistrar`], [`eth::EthRegistrar`] - Ethernet
//! - [`gpio::ButtonRegistrar`], [`gpio::LedRegistrar`] - GPIO keys and LEDs
//! - [`usb::UsbRegistrar`] - USB host
//! - [`wmac::RadioRegistrar`] - Wireless MAC
//! - [`pci::ExpansionBusRegistrar`] - PCI expansion bus
//! - [`Platform`] - everything above, as one bound

#![no_std]
#![deny(unsafe_code)]

pub mod error;
pub mod eth;
pub mod gpio;
pub mod pci;
pub mod storage;
pub mod usb;
pub mod wmac;

// Re-export key types at crate root for convenience
pub use error::RegistrationError;
pub use eth::{
    Duplex, EthConfig, EthRegistrar, MacAddress, MdioRegistrar, PhyInterfaceMode, Speed,
    SwitchConfig, SwitchSetup,
};
pub use gpio::{
    ButtonRegistrar, DeviceId, EventType, GpioButton, GpioLed, LedDefaultState, LedRegistrar,
};
pub use pci::ExpansionBusRegistrar;
pub use storage::{SpiFlashConfig, StorageRegistrar};
pub use usb::UsbRegistrar;
pub use wmac::{RadioCalibration, RadioRegistrar};

/// Every collaborator the bring-up talks to
///
/// Platforms usually implement each registrar on one type; the bring-up
/// then only needs a single `&mut impl Platform`.
pub trait Platform:
    StorageRegistrar
    + SwitchSetup
    + MdioRegistrar
    + EthRegistrar
    + ButtonRegistrar
    + LedRegistrar
    + UsbRegistrar
    + RadioRegistrar
    + ExpansionBusRegistrar
{
}

// Blanket implementation for types that implement every registrar
impl<T> Platform for T where
    T: StorageRegistrar
        + SwitchSetup
        + MdioRegistrar
        + EthRegistrar
        + ButtonRegistrar
        + LedRegistrar
        + UsbRegistrar
        + RadioRegistrar
        + ExpansionBusRegistrar
{
}
