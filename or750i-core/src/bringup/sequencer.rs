//! The bring-up sequence
//!
//! Ordering is a hardware contract:
//!
//! ```text
//! storage ─► switch quirks ─► mdio ─► eth0 (WAN) ─► eth1 (LAN)
//!    │                                  ▲            ▲
//!    └──────── ART mapped ──────────────┴────────────┘
//!
//! ─► buttons ─► leds ─► usb ─► wmac (ART) ─► pci
//! ```
//!
//! The switch strapping has to be in place before the MDIO bus probes
//! the PHYs, and PCI goes last because the devices behind it claim
//! interrupts and GPIO lines during enumeration.

use core::fmt;

use or750i_hal::{
    DeviceId, Duplex, MacAddress, PhyInterfaceMode, Platform, RegistrationError, Speed,
};

use super::report::{BringUpReport, StepError};
use super::step::Step;
use crate::board::{self, NetworkDescriptors};
use crate::calibration::{CalibrationBlob, CalibrationError};

/// Bring-up errors
///
/// Rejected registrations end up in the [`BringUpReport`] only. Missing
/// calibration data is reported through [`BringUpReport::into_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpError {
    /// Calibration data needed by `step` could not be read
    Calibration {
        step: Step,
        error: CalibrationError,
    },
}

impl fmt::Display for BringUpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BringUpError::Calibration { step, error } => {
                write!(f, "{}: {}", step.name(), error)
            }
        }
    }
}

/// Single-use bring-up sequencer
///
/// Owns the Ethernet descriptors while they are being filled in.
/// [`BringUp::run`] consumes the sequencer, so every instance registers
/// the board's peripherals at most once.
#[derive(Debug)]
pub struct BringUp {
    net: NetworkDescriptors,
}

impl Default for BringUp {
    fn default() -> Self {
        Self::new()
    }
}

impl BringUp {
    /// Create a sequencer with unset Ethernet descriptors
    pub const fn new() -> Self {
        Self {
            net: NetworkDescriptors::new(),
        }
    }

    /// Ethernet descriptors in their current state
    pub fn descriptors(&self) -> &NetworkDescriptors {
        &self.net
    }

    /// Run the whole sequence against `platform`
    ///
    /// # Arguments
    /// * `platform` - Subsystems receiving the registrations
    /// * `art` - Mapped calibration partition; only read after the boot
    ///   flash has been registered
    ///
    /// # Returns
    /// The outcome of every step. A step whose calibration data cannot be
    /// read is skipped and the sequence goes on; use
    /// [`BringUpReport::into_result`] to turn that into an error.
    pub fn run<P>(mut self, platform: &mut P, art: &CalibrationBlob<'_>) -> BringUpReport
    where
        P: Platform + ?Sized,
    {
        info!("Starting bring-up");
        let mut report = BringUpReport::new(self.net);

        let result = platform.register_storage(board::STORAGE_CONFIG);
        record(&mut report, Step::Storage, result);

        let result =
            platform.configure_switch_quirks(board::SWITCH_PHY_SWAP, board::SWITCH_PHY_ADDR_SWAP);
        record(&mut report, Step::SwitchQuirks, result);

        let result = platform.register_mdio(board::MDIO_BUS_INDEX, board::MDIO_PHY_MASK);
        record(&mut report, Step::Mdio, result);

        match read_mac(art, Step::WanInterface, board::WAN_MAC_OFFSET) {
            Ok(mac) => {
                self.net.wan.mac = mac;
                self.net.wan.duplex = Duplex::Full;
                self.net.wan.phy_if_mode = PhyInterfaceMode::Mii;
                self.net.wan.phy_mask = bit(board::WAN_PHY_ADDR);
                self.net.wan.speed = Speed::Mbps100;
                let result = platform.register_eth(board::WAN_ETH_INDEX, self.net.wan);
                record(&mut report, Step::WanInterface, result);
            }
            Err(error) => skip(&mut report, Step::WanInterface, error),
        }

        match read_mac(art, Step::LanInterface, board::LAN_MAC_OFFSET) {
            Ok(mac) => {
                self.net.lan.mac = mac;
                self.net.lan.duplex = Duplex::Full;
                self.net.lan.phy_if_mode = PhyInterfaceMode::Gmii;
                let mut switch = self.net.lan.switch.unwrap_or_default();
                switch.phy4_mii_en = true;
                switch.phy_poll_mask |= bit(board::WAN_PHY_ADDR);
                self.net.lan.switch = Some(switch);
                let result = platform.register_eth(board::LAN_ETH_INDEX, self.net.lan);
                record(&mut report, Step::LanInterface, result);
            }
            Err(error) => skip(&mut report, Step::LanInterface, error),
        }

        report.set_network(self.net);

        let result = platform.register_polled_buttons(
            DeviceId::Auto,
            board::KEYS_POLL_INTERVAL_MS,
            &board::BUTTONS,
        );
        record(&mut report, Step::Buttons, result);

        let result = platform.register_leds(DeviceId::Auto, &board::LEDS);
        record(&mut report, Step::Leds, result);

        let result = platform.register_usb();
        record(&mut report, Step::Usb, result);

        match art.calibration_ref(board::WMAC2G_CALDATA_OFFSET, board::WMAC_CALDATA_LEN) {
            Ok(cal_2ghz) => {
                debug!("wmac calibration at {=u32:#x}", cal_2ghz.address);
                let result = platform.register_radio(Some(cal_2ghz), None);
                record(&mut report, Step::Radio, result);
            }
            Err(error) => skip(&mut report, Step::Radio, error),
        }

        let result = platform.register_expansion_bus();
        record(&mut report, Step::ExpansionBus, result);

        let failed = report.failures().count();
        if failed == 0 {
            info!("Bring-up complete");
        } else {
            warn!("Bring-up complete, {} peripheral(s) failed", failed);
        }

        report
    }
}

fn record(report: &mut BringUpReport, step: Step, result: Result<(), RegistrationError>) {
    match result {
        Ok(()) => debug!("{=str} registered", step.name()),
        Err(e) => warn!("{=str} registration failed: {}", step.name(), e),
    }
    report.record(step, result.map_err(StepError::from));
}

fn skip(report: &mut BringUpReport, step: Step, error: CalibrationError) {
    warn!("{=str}: calibration read failed, skipped: {}", step.name(), error);
    report.record(step, Err(error.into()));
}

fn read_mac(
    art: &CalibrationBlob<'_>,
    step: Step,
    offset: usize,
) -> Result<MacAddress, CalibrationError> {
    let mac = art
        .read_mac(offset)?
        .with_offset(board::MAC_ADDRESS_INCREMENT);

    if !mac.is_valid_unicast() {
        warn!(
            "{=str}: calibration MAC {} is not a valid station address",
            step.name(),
            mac
        );
    }
    info!("{=str} MAC {}", step.name(), mac);

    Ok(mac)
}

const fn bit(n: u32) -> u32 {
    1 << n
}
