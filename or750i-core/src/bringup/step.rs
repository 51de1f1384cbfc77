//! Bring-up steps

/// One registration step of the bring-up
///
/// Variants are declared in execution order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Boot flash holding the calibration partition
    Storage,
    /// Switch PHY swap strapping, before MDIO
    SwitchQuirks,
    /// MDIO bus
    Mdio,
    /// GE0 towards the WAN PHY
    WanInterface,
    /// GE1 towards the built-in switch
    LanInterface,
    /// Polled GPIO buttons
    Buttons,
    /// GPIO LEDs
    Leds,
    /// USB host
    Usb,
    /// On-SoC wireless MAC
    Radio,
    /// PCI expansion bus, always last
    ExpansionBus,
}

impl Step {
    /// Number of steps
    pub const COUNT: usize = 10;

    /// Every step in execution order
    pub const ALL: [Step; Self::COUNT] = [
        Step::Storage,
        Step::SwitchQuirks,
        Step::Mdio,
        Step::WanInterface,
        Step::LanInterface,
        Step::Buttons,
        Step::Leds,
        Step::Usb,
        Step::Radio,
        Step::ExpansionBus,
    ];

    /// Short name for logs
    pub const fn name(self) -> &'static str {
        match self {
            Step::Storage => "storage",
            Step::SwitchQuirks => "switch-quirks",
            Step::Mdio => "mdio",
            Step::WanInterface => "eth0-wan",
            Step::LanInterface => "eth1-lan",
            Step::Buttons => "buttons",
            Step::Leds => "leds",
            Step::Usb => "usb",
            Step::Radio => "wmac",
            Step::ExpansionBus => "pci",
        }
    }

    /// Check whether this step reads the calibration partition
    pub const fn needs_calibration(self) -> bool {
        matches!(
            self,
            Step::WanInterface | Step::LanInterface | Step::Radio
        )
    }
}
