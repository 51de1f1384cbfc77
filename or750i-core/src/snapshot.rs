//! Binary snapshots of the board configuration
//!
//! Encodes descriptors with postcard so two bring-up runs can be
//! compared byte for byte.

use or750i_hal::{GpioButton, GpioLed, MacAddress};
use serde::Serialize;

use crate::board::{self, NetworkDescriptors};

/// Snapshot encoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SnapshotError {
    /// Output buffer too small
    BufferFull,
    /// Serialization failed
    Encode,
}

impl From<postcard::Error> for SnapshotError {
    fn from(e: postcard::Error) -> Self {
        match e {
            postcard::Error::SerializeBufferFull => SnapshotError::BufferFull,
            _ => SnapshotError::Encode,
        }
    }
}

/// Encode `value` into `buf`, returning the used part of the buffer
pub fn encode<'b, T>(value: &T, buf: &'b mut [u8]) -> Result<&'b mut [u8], SnapshotError>
where
    T: Serialize + ?Sized,
{
    Ok(postcard::to_slice(value, buf)?)
}

/// Every descriptor the bring-up hands to the subsystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot<'a> {
    pub network: NetworkDescriptors,
    pub leds: &'a [GpioLed],
    pub buttons: &'a [GpioButton],
    pub poll_interval_ms: u16,
    pub wmac_2ghz_offset: u32,
    pub wmac_caldata_len: u32,
}

impl BoardSnapshot<'static> {
    /// Snapshot of the board tables with the given Ethernet descriptors
    pub fn new(network: &NetworkDescriptors) -> Self {
        Self {
            network: *network,
            leds: &board::LEDS,
            buttons: &board::BUTTONS,
            poll_interval_ms: board::KEYS_POLL_INTERVAL_MS,
            wmac_2ghz_offset: board::WMAC2G_CALDATA_OFFSET as u32,
            wmac_caldata_len: board::WMAC_CALDATA_LEN as u32,
        }
    }
}

impl BoardSnapshot<'_> {
    /// Same snapshot with both MAC addresses cleared
    ///
    /// The MACs are the only values that come from calibration data.
    pub fn without_macs(mut self) -> Self {
        self.network.wan.mac = MacAddress::ZERO;
        self.network.lan.mac = MacAddress::ZERO;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_buffer_full() {
        let snap = BoardSnapshot::new(&NetworkDescriptors::new());
        let mut buf = [0u8; 4];
        assert_eq!(encode(&snap, &mut buf), Err(SnapshotError::BufferFull));
    }

    #[test]
    fn test_snapshot_encodes_macs() {
        let mut net = NetworkDescriptors::new();
        net.wan.mac = MacAddress::new([0x00, 0x03, 0x7f, 0xaa, 0xbb, 0xcc]);

        let mut with = [0u8; 512];
        let mut without = [0u8; 512];
        let snap = BoardSnapshot::new(&net);
        let with = encode(&snap, &mut with).unwrap();
        let without = encode(&snap.without_macs(), &mut without).unwrap();

        assert_ne!(with, without);
        assert_eq!(with.len(), without.len());
    }

    #[test]
    fn test_unset_snapshot_is_stable() {
        let net = NetworkDescriptors::new();
        let mut a = [0u8; 512];
        let mut b = [0u8; 512];
        let a = encode(&BoardSnapshot::new(&net), &mut a).unwrap();
        let b = encode(&BoardSnapshot::new(&net).without_macs(), &mut b).unwrap();
        assert_eq!(a, b);
    }
}
