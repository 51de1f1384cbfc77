//! JT-OR750i descriptor tables
//!
//! Everything here matches the board's wiring; nothing is discovered at
//! runtime.

#[cfg(feature = "serde")]
use serde::Serialize;

use or750i_hal::{
    EthConfig, EventType, GpioButton, GpioLed, LedDefaultState, MacAddress, SpiFlashConfig,
};

/// Status LED driven by the 5GHz radio's GPIO controller
///
/// Left on by that radio's firmware; together with the inverted red
/// status LED it signals failsafe mode. Not part of [`LEDS`].
pub const GPIO_LED_STATUS_GREEN: u16 = 506;
pub const GPIO_LED_STATUS_RED: u16 = 13;
pub const GPIO_LED_LAN1: u16 = 16;
pub const GPIO_LED_LAN2: u16 = 15;
pub const GPIO_LED_LAN3: u16 = 14;
pub const GPIO_LED_WAN: u16 = 4;

pub const GPIO_BTN_RESET: u16 = 17;

/// `KEY_RESTART` in Linux input numbering
pub const KEY_RESTART: u16 = 0x198;

/// Poll period of the button input device
pub const KEYS_POLL_INTERVAL_MS: u16 = 20;

/// Button debounce for a given poll period
///
/// Three polls; the result cannot overflow for any poll period.
pub const fn debounce_interval_ms(poll_interval_ms: u16) -> u32 {
    3 * poll_interval_ms as u32
}

pub const KEYS_DEBOUNCE_INTERVAL_MS: u32 = debounce_interval_ms(KEYS_POLL_INTERVAL_MS);

/// ART offset of the WAN (GE0) MAC address
pub const WAN_MAC_OFFSET: usize = 0;

/// ART offset of the LAN (GE1) MAC address, right after the WAN one
pub const LAN_MAC_OFFSET: usize = WAN_MAC_OFFSET + MacAddress::LEN;

/// Added to the NIC part of both stored MAC addresses
pub const MAC_ADDRESS_INCREMENT: i32 = 0;

/// ART offset of the on-SoC 2.4GHz radio calibration
pub const WMAC2G_CALDATA_OFFSET: usize = 0x1000;

/// ART offset of the 5GHz radio calibration
///
/// That radio sits behind the PCIe bus and loads its own calibration;
/// the on-SoC radio slot for it stays empty.
pub const WMAC5G_CALDATA_OFFSET: usize = 0x5000;

/// Size of one radio calibration (EEPROM image) record
pub const WMAC_CALDATA_LEN: usize = 0x1000;

/// MDIO controller used for the switch and the WAN PHY
pub const MDIO_BUS_INDEX: u8 = 0;

/// PHY addresses hidden from MDIO probing
pub const MDIO_PHY_MASK: u32 = 0;

/// Switch PHY wired to the WAN MAC
pub const WAN_PHY_ADDR: u32 = 4;

/// Ethernet MAC indices
pub const WAN_ETH_INDEX: u8 = 0;
pub const LAN_ETH_INDEX: u8 = 1;

/// Switch PHY swap strapping: PHY 4 stays on the switch side
pub const SWITCH_PHY_SWAP: bool = false;
pub const SWITCH_PHY_ADDR_SWAP: bool = false;

/// Boot flash is probed, no platform data
pub const STORAGE_CONFIG: Option<&SpiFlashConfig> = None;

/// LED table
pub const LEDS: [GpioLed; 5] = [
    GpioLed::active_low("jt-or750i:green:lan1", GPIO_LED_LAN1),
    GpioLed::active_low("jt-or750i:green:lan2", GPIO_LED_LAN2),
    GpioLed::active_low("jt-or750i:green:lan3", GPIO_LED_LAN3),
    GpioLed::active_low("jt-or750i:green:wan", GPIO_LED_WAN),
    // Inverted on purpose: an always-lit red status LED looks broken
    GpioLed::active_high("jt-or750i:inv_red:status", GPIO_LED_STATUS_RED)
        .with_default_state(LedDefaultState::Off),
];

/// Button table for a given poll period
pub const fn button_table(poll_interval_ms: u16) -> [GpioButton; 1] {
    [GpioButton {
        desc: "reset",
        event_type: EventType::Key,
        code: KEY_RESTART,
        debounce_interval_ms: debounce_interval_ms(poll_interval_ms),
        gpio: GPIO_BTN_RESET,
        active_low: true,
    }]
}

/// Button table
pub const BUTTONS: [GpioButton; 1] = button_table(KEYS_POLL_INTERVAL_MS);

/// The two Ethernet descriptors, filled in once during bring-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NetworkDescriptors {
    /// GE0, WAN PHY
    pub wan: EthConfig,
    /// GE1, built-in switch
    pub lan: EthConfig,
}

impl NetworkDescriptors {
    /// Both descriptors as declared, before calibration data is applied
    pub const fn new() -> Self {
        Self {
            wan: EthConfig::UNSET,
            lan: EthConfig::UNSET,
        }
    }
}

impl Default for NetworkDescriptors {
    fn default() -> Self {
        Self::new()
    }
}
