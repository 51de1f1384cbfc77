//! Ethernet, MDIO and built-in switch contracts
//!
//! The SoC has two Ethernet MACs: GE0 faces the WAN PHY, GE1 is wired to
//! the built-in switch. Both are described by an [`EthConfig`] that the
//! bring-up fills in before handing it over by value.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::RegistrationError;

/// 48-bit hardware (MAC) address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// Length of a MAC address in bytes
    pub const LEN: usize = 6;

    /// All-zero address, used for descriptors that are not filled in yet
    pub const ZERO: Self = Self([0; 6]);

    /// Create an address from its raw bytes
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Copy an address out of the first six bytes of `bytes`
    ///
    /// Returns `None` if fewer than six bytes are available.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; 6] = bytes.get(..Self::LEN)?.try_into().ok()?;
        Some(Self(raw))
    }

    /// Raw bytes of the address
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Check for the all-zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 6]
    }

    /// Check the group (multicast) bit
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// A usable station address: not multicast and not all zero
    pub fn is_valid_unicast(&self) -> bool {
        !self.is_multicast() && !self.is_zero()
    }

    /// Derive a sibling address by adding `offset` to the NIC-specific part
    ///
    /// Only the low 24 bits take part in the addition and wrap around; the
    /// OUI in the first three bytes is never changed. An offset of zero
    /// returns the address unchanged.
    pub fn with_offset(self, offset: i32) -> Self {
        let [a, b, c, d, e, f] = self.0;
        let nic = u32::from_be_bytes([0, d, e, f]).wrapping_add_signed(offset) & 0x00ff_ffff;
        let [_, d, e, f] = nic.to_be_bytes();
        Self([a, b, c, d, e, f])
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MacAddress {
    fn format(&self, f: defmt::Formatter) {
        let [a, b, c, d, e, g] = self.0;
        defmt::write!(
            f,
            "{=u8:02x}:{=u8:02x}:{=u8:02x}:{=u8:02x}:{=u8:02x}:{=u8:02x}",
            a,
            b,
            c,
            d,
            e,
            g
        );
    }
}

/// Link duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    #[default]
    Half,
    Full,
}

/// Signalling mode between a MAC and its PHY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterfaceMode {
    /// Not configured
    #[default]
    Na,
    /// Media Independent Interface (10/100)
    Mii,
    /// Gigabit MII
    Gmii,
    /// Reduced MII
    Rmii,
    /// Reduced gigabit MII
    Rgmii,
}

/// Link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// Negotiated by the PHY
    #[default]
    Auto,
    Mbps10,
    Mbps100,
    Mbps1000,
}

/// Built-in switch settings attached to the switch-facing MAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchConfig {
    /// Route switch PHY 4 to the MAC over MII
    pub phy4_mii_en: bool,
    /// PHY addresses the switch driver polls for link changes
    pub phy_poll_mask: u32,
}

/// Configuration of one Ethernet MAC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EthConfig {
    /// Station address
    pub mac: MacAddress,
    pub duplex: Duplex,
    pub phy_if_mode: PhyInterfaceMode,
    /// Bit `n` selects PHY address `n` on the MDIO bus
    pub phy_mask: u32,
    pub speed: Speed,
    /// Switch settings, only for the MAC wired to the built-in switch
    pub switch: Option<SwitchConfig>,
}

impl EthConfig {
    /// Descriptor before bring-up has filled anything in
    pub const UNSET: Self = Self {
        mac: MacAddress::ZERO,
        duplex: Duplex::Half,
        phy_if_mode: PhyInterfaceMode::Na,
        phy_mask: 0,
        speed: Speed::Auto,
        switch: None,
    };
}

impl Default for EthConfig {
    fn default() -> Self {
        Self::UNSET
    }
}

/// Switch strapping that must be applied before the MDIO bus comes up
pub trait SwitchSetup {
    /// Configure the PHY swap bits of the built-in switch
    ///
    /// # Arguments
    /// * `phy_swap` - Swap PHY 0 and PHY 4 between the MACs
    /// * `phy_addr_swap` - Swap the MDIO addresses of PHY 0 and PHY 4
    fn configure_switch_quirks(
        &mut self,
        phy_swap: bool,
        phy_addr_swap: bool,
    ) -> Result<(), RegistrationError>;
}

/// MDIO bus controller
pub trait MdioRegistrar {
    /// Register the MDIO bus of controller `index`
    ///
    /// `phy_mask` lists PHY addresses the bus must *not* probe.
    fn register_mdio(&mut self, index: u8, phy_mask: u32) -> Result<(), RegistrationError>;
}

/// Ethernet MAC driver
pub trait EthRegistrar {
    /// Register MAC `index` with its final configuration
    fn register_eth(&mut self, index: u8, config: EthConfig) -> Result<(), RegistrationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_from_slice() {
        let bytes = [0x00, 0x03, 0x7f, 0x11, 0x22, 0x33, 0x44];
        let mac = MacAddress::from_slice(&bytes).unwrap();
        assert_eq!(mac.octets(), [0x00, 0x03, 0x7f, 0x11, 0x22, 0x33]);

        assert!(MacAddress::from_slice(&bytes[..5]).is_none());
    }

    #[test]
    fn test_mac_validity() {
        assert!(!MacAddress::ZERO.is_valid_unicast());
        assert!(!MacAddress::new([0x01, 0, 0, 0, 0, 1]).is_valid_unicast());
        assert!(!MacAddress::new([0xff; 6]).is_valid_unicast());
        assert!(MacAddress::new([0x00, 0x03, 0x7f, 0, 0, 1]).is_valid_unicast());
    }

    #[test]
    fn test_mac_with_offset() {
        let mac = MacAddress::new([0x00, 0x03, 0x7f, 0x12, 0x34, 0xfe]);
        assert_eq!(mac.with_offset(0), mac);
        assert_eq!(
            mac.with_offset(2),
            MacAddress::new([0x00, 0x03, 0x7f, 0x12, 0x35, 0x00])
        );
        assert_eq!(
            mac.with_offset(-0xff),
            MacAddress::new([0x00, 0x03, 0x7f, 0x12, 0x33, 0xff])
        );

        // NIC part wraps without touching the OUI
        let top = MacAddress::new([0x00, 0x03, 0x7f, 0xff, 0xff, 0xff]);
        assert_eq!(
            top.with_offset(1),
            MacAddress::new([0x00, 0x03, 0x7f, 0x00, 0x00, 0x00])
        );
    }

    #[test]
    fn test_unset_eth_config() {
        let config = EthConfig::default();
        assert!(config.mac.is_zero());
        assert_eq!(config.duplex, Duplex::Half);
        assert_eq!(config.phy_if_mode, PhyInterfaceMode::Na);
        assert_eq!(config.speed, Speed::Auto);
        assert!(config.switch.is_none());
    }
}
