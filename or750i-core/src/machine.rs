//! Machine descriptor
//!
//! Board selection matches the machine name handed over by the
//! bootloader against [`MACHINES`] and calls the board's setup exactly
//! once.

use or750i_hal::Platform;

use crate::bringup::{BringUp, BringUpReport};
use crate::calibration::CalibrationBlob;

/// Machine type ids known to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MachType {
    JtOr750i,
}

/// Identity of a supported board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MachineDescriptor {
    pub mach: MachType,
    /// Unique board name used for selection
    pub name: &'static str,
    /// Human readable label
    pub label: &'static str,
}

impl MachineDescriptor {
    /// Bring up this board
    pub fn setup<P>(&self, platform: &mut P, art: &CalibrationBlob<'_>) -> BringUpReport
    where
        P: Platform + ?Sized,
    {
        info!("Board: {=str}", self.label);
        match self.mach {
            MachType::JtOr750i => BringUp::new().run(platform, art),
        }
    }
}

pub const JT_OR750I: MachineDescriptor = MachineDescriptor {
    mach: MachType::JtOr750i,
    name: "JT-OR750I",
    label: "Joy-IT JT-OR750i",
};

/// Every board this crate can bring up
pub const MACHINES: &[MachineDescriptor] = &[JT_OR750I];

/// Look up a board by its exact name
pub fn find_machine(name: &str) -> Option<&'static MachineDescriptor> {
    MACHINES.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bringup::mock::RecordingPlatform;
    use crate::bringup::Step;
    use crate::calibration::ART_SIZE;

    #[test]
    fn test_find_machine() {
        let machine = find_machine("JT-OR750I").unwrap();
        assert_eq!(machine.label, "Joy-IT JT-OR750i");
        assert_eq!(machine.mach, MachType::JtOr750i);

        assert!(find_machine("jt-or750i").is_none());
        assert!(find_machine("").is_none());
    }

    #[test]
    fn test_machine_names_are_unique() {
        for (i, a) in MACHINES.iter().enumerate() {
            assert!(MACHINES[i + 1..].iter().all(|b| b.name != a.name));
        }
    }

    #[test]
    fn test_setup_runs_bring_up() {
        let art = vec![0u8; ART_SIZE];
        let mut platform = RecordingPlatform::new();
        let report = JT_OR750I.setup(&mut platform, &CalibrationBlob::art(&art));

        assert!(report.is_clean());
        assert_eq!(platform.steps(), Step::ALL);
    }
}
