//! GPIO LED and polled GPIO button contracts
//!
//! LEDs and buttons are described by static tables. The GPIO subsystems
//! create one device per table and own the lines afterwards.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::RegistrationError;

/// Input event class (Linux `EV_*` numbering)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum EventType {
    /// Key or button
    Key = 0x01,
    /// Switch (lid, tablet mode, ...)
    Switch = 0x05,
}

impl EventType {
    /// Numeric event class
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Initial state of an LED when its device is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedDefaultState {
    #[default]
    Off,
    On,
    /// Leave the line as the bootloader set it
    Keep,
}

/// Device instance id for subsystems that create platform devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceId {
    /// Let the subsystem pick the next free id
    Auto,
    Fixed(u8),
}

/// One GPIO-driven LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioLed {
    /// `device:color:function`
    pub name: &'static str,
    pub gpio: u16,
    /// LED lights when the line is driven low
    pub active_low: bool,
    pub default_state: LedDefaultState,
}

impl GpioLed {
    /// Active-low LED, off by default
    pub const fn active_low(name: &'static str, gpio: u16) -> Self {
        Self {
            name,
            gpio,
            active_low: true,
            default_state: LedDefaultState::Off,
        }
    }

    /// Active-high LED, off by default
    pub const fn active_high(name: &'static str, gpio: u16) -> Self {
        Self {
            name,
            gpio,
            active_low: false,
            default_state: LedDefaultState::Off,
        }
    }

    /// Same LED with a different initial state
    pub const fn with_default_state(mut self, state: LedDefaultState) -> Self {
        self.default_state = state;
        self
    }
}

/// One polled GPIO button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioButton {
    pub desc: &'static str,
    pub event_type: EventType,
    /// Key code reported on press (Linux `KEY_*` numbering)
    pub code: u16,
    /// Time the line must be stable before a change is reported
    pub debounce_interval_ms: u32,
    pub gpio: u16,
    /// Button reads low when pressed
    pub active_low: bool,
}

/// GPIO LED subsystem
pub trait LedRegistrar {
    /// Create an LED device for every entry of `leds`
    fn register_leds(&mut self, id: DeviceId, leds: &[GpioLed]) -> Result<(), RegistrationError>;
}

/// Polled GPIO keys subsystem
pub trait ButtonRegistrar {
    /// Create one input device that polls every button in `buttons`
    ///
    /// # Arguments
    /// * `id` - Platform device id
    /// * `poll_interval_ms` - Period of the input poll
    /// * `buttons` - Buttons handled by the device
    fn register_polled_buttons(
        &mut self,
        id: DeviceId,
        poll_interval_ms: u16,
        buttons: &[GpioButton],
    ) -> Result<(), RegistrationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_constructors() {
        let led = GpioLed::active_low("board:green:wan", 4);
        assert!(led.active_low);
        assert_eq!(led.default_state, LedDefaultState::Off);

        let led = GpioLed::active_high("board:red:status", 13)
            .with_default_state(LedDefaultState::On);
        assert!(!led.active_low);
        assert_eq!(led.default_state, LedDefaultState::On);
    }

    #[test]
    fn test_event_type_values() {
        assert_eq!(EventType::Key.as_u16(), 0x01);
        assert_eq!(EventType::Switch.as_u16(), 0x05);
    }
}
