//! Factory calibration (ART) reader
//!
//! The ART partition is written once at the factory and holds the
//! Ethernet MAC addresses and the radio calibration records at fixed
//! offsets. It is memory-mapped read-only; this module only gives
//! bounds-checked access to sub-ranges of that mapping.

use core::fmt;

use or750i_hal::{MacAddress, RadioCalibration};

/// Physical address of the ART partition (last 64KB of the boot flash)
pub const ART_PHYS_BASE: u32 = 0x1fff_0000;

/// Size of the ART partition
pub const ART_SIZE: usize = 0x1_0000;

/// Base of the uncached, unmapped KSEG1 segment
pub const KSEG1_BASE: u32 = 0xa000_0000;

/// Translate a physical address into its uncached KSEG1 alias
pub const fn kseg1_addr(phys: u32) -> u32 {
    (phys & 0x1fff_ffff) | KSEG1_BASE
}

/// Errors from calibration access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// The requested range runs past the end of the mapped region
    RegionTooSmall {
        /// Offset of the requested range
        offset: usize,
        /// Length of the requested range
        len: usize,
        /// Bytes actually mapped
        available: usize,
    },
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::RegionTooSmall {
                offset,
                len,
                available,
            } => write!(
                f,
                "calibration region too small: need {len} bytes at {offset:#x}, only {available:#x} mapped"
            ),
        }
    }
}

/// Read-only view of the mapped calibration region
#[derive(Debug, Clone, Copy)]
pub struct CalibrationBlob<'a> {
    base: u32,
    bytes: &'a [u8],
}

impl<'a> CalibrationBlob<'a> {
    /// Wrap a mapped region
    ///
    /// # Arguments
    /// * `base` - Address the first byte of `bytes` is mapped at
    /// * `bytes` - The mapped region
    pub const fn new(base: u32, bytes: &'a [u8]) -> Self {
        Self { base, bytes }
    }

    /// Wrap the ART partition as mapped through KSEG1
    pub const fn art(bytes: &'a [u8]) -> Self {
        Self::new(kseg1_addr(ART_PHYS_BASE), bytes)
    }

    /// Address the region is mapped at
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Number of mapped bytes
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check for an empty mapping
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow `len` bytes starting at `offset`
    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], CalibrationError> {
        let too_small = CalibrationError::RegionTooSmall {
            offset,
            len,
            available: self.bytes.len(),
        };
        let end = offset.checked_add(len).ok_or(too_small)?;
        self.bytes.get(offset..end).ok_or(too_small)
    }

    /// Read the MAC address stored at `offset`
    pub fn read_mac(&self, offset: usize) -> Result<MacAddress, CalibrationError> {
        let bytes = self.read_bytes(offset, MacAddress::LEN)?;
        let mut raw = [0u8; MacAddress::LEN];
        raw.copy_from_slice(bytes);
        Ok(MacAddress::new(raw))
    }

    /// Reference to the calibration record at `offset` for a radio driver
    pub fn calibration_ref(
        &self,
        offset: usize,
        len: usize,
    ) -> Result<RadioCalibration<'a>, CalibrationError> {
        let data = self.read_bytes(offset, len)?;
        Ok(RadioCalibration {
            address: self.base.wrapping_add(offset as u32),
            data,
        })
    }
}
