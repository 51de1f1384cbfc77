//! Recording platform for tests
//!
//! Implements every registrar, remembers each call with a copy of its
//! arguments and can be told to reject individual steps.

use heapless::Vec;
use or750i_hal::{
    ButtonRegistrar, DeviceId, EthConfig, EthRegistrar, ExpansionBusRegistrar, GpioButton,
    GpioLed, LedRegistrar, MdioRegistrar, RadioCalibration, RadioRegistrar, RegistrationError,
    SpiFlashConfig, StorageRegistrar, SwitchSetup, UsbRegistrar,
};

use super::step::Step;

/// Radio calibration as seen by the radio driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedCal {
    pub address: u32,
    pub len: usize,
    pub first: Option<u8>,
    pub last: Option<u8>,
}

impl From<RadioCalibration<'_>> for RecordedCal {
    fn from(cal: RadioCalibration<'_>) -> Self {
        Self {
            address: cal.address,
            len: cal.len(),
            first: cal.data.first().copied(),
            last: cal.data.last().copied(),
        }
    }
}

/// One registration call and its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Storage(Option<SpiFlashConfig>),
    SwitchQuirks {
        phy_swap: bool,
        phy_addr_swap: bool,
    },
    Mdio {
        index: u8,
        phy_mask: u32,
    },
    Eth {
        index: u8,
        config: EthConfig,
    },
    Buttons {
        id: DeviceId,
        poll_interval_ms: u16,
        buttons: Vec<GpioButton, 4>,
    },
    Leds {
        id: DeviceId,
        leds: Vec<GpioLed, 8>,
    },
    Usb,
    Radio {
        cal_2ghz: Option<RecordedCal>,
        cal_5ghz: Option<RecordedCal>,
    },
    ExpansionBus,
}

impl Call {
    /// Bring-up step this call belongs to
    pub fn step(&self) -> Step {
        match self {
            Call::Storage(_) => Step::Storage,
            Call::SwitchQuirks { .. } => Step::SwitchQuirks,
            Call::Mdio { .. } => Step::Mdio,
            Call::Eth { index: 0, .. } => Step::WanInterface,
            Call::Eth { .. } => Step::LanInterface,
            Call::Buttons { .. } => Step::Buttons,
            Call::Leds { .. } => Step::Leds,
            Call::Usb => Step::Usb,
            Call::Radio { .. } => Step::Radio,
            Call::ExpansionBus => Step::ExpansionBus,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingPlatform {
    calls: std::vec::Vec<Call>,
    rejected: std::vec::Vec<(Step, RegistrationError)>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the registration for `step` fail with `error`
    pub fn reject(&mut self, step: Step, error: RegistrationError) {
        self.rejected.push((step, error));
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Steps in the order they were called
    pub fn steps(&self) -> std::vec::Vec<Step> {
        self.calls.iter().map(Call::step).collect()
    }

    fn push(&mut self, call: Call) -> Result<(), RegistrationError> {
        let step = call.step();
        self.calls.push(call);
        match self.rejected.iter().find(|(s, _)| *s == step) {
            Some((_, error)) => Err(*error),
            None => Ok(()),
        }
    }
}

impl StorageRegistrar for RecordingPlatform {
    fn register_storage(
        &mut self,
        config: Option<&SpiFlashConfig>,
    ) -> Result<(), RegistrationError> {
        self.push(Call::Storage(config.copied()))
    }
}

impl SwitchSetup for RecordingPlatform {
    fn configure_switch_quirks(
        &mut self,
        phy_swap: bool,
        phy_addr_swap: bool,
    ) -> Result<(), RegistrationError> {
        self.push(Call::SwitchQuirks {
            phy_swap,
            phy_addr_swap,
        })
    }
}

impl MdioRegistrar for RecordingPlatform {
    fn register_mdio(&mut self, index: u8, phy_mask: u32) -> Result<(), RegistrationError> {
        self.push(Call::Mdio { index, phy_mask })
    }
}

impl EthRegistrar for RecordingPlatform {
    fn register_eth(&mut self, index: u8, config: EthConfig) -> Result<(), RegistrationError> {
        self.push(Call::Eth { index, config })
    }
}

impl ButtonRegistrar for RecordingPlatform {
    fn register_polled_buttons(
        &mut self,
        id: DeviceId,
        poll_interval_ms: u16,
        buttons: &[GpioButton],
    ) -> Result<(), RegistrationError> {
        let buttons = Vec::from_slice(buttons).map_err(|_| RegistrationError::OutOfMemory)?;
        self.push(Call::Buttons {
            id,
            poll_interval_ms,
            buttons,
        })
    }
}

impl LedRegistrar for RecordingPlatform {
    fn register_leds(&mut self, id: DeviceId, leds: &[GpioLed]) -> Result<(), RegistrationError> {
        let leds = Vec::from_slice(leds).map_err(|_| RegistrationError::OutOfMemory)?;
        self.push(Call::Leds { id, leds })
    }
}

impl UsbRegistrar for RecordingPlatform {
    fn register_usb(&mut self) -> Result<(), RegistrationError> {
        self.push(Call::Usb)
    }
}

impl RadioRegistrar for RecordingPlatform {
    fn register_radio(
        &mut self,
        cal_2ghz: Option<RadioCalibration<'_>>,
        cal_5ghz: Option<RadioCalibration<'_>>,
    ) -> Result<(), RegistrationError> {
        self.push(Call::Radio {
            cal_2ghz: cal_2ghz.map(RecordedCal::from),
            cal_5ghz: cal_5ghz.map(RecordedCal::from),
        })
    }
}

impl ExpansionBusRegistrar for RecordingPlatform {
    fn register_expansion_bus(&mut self) -> Result<(), RegistrationError> {
        self.push(Call::ExpansionBus)
    }
}
