//! Outcome of a bring-up run

use core::fmt;

use heapless::Vec;
use or750i_hal::RegistrationError;

use super::sequencer::BringUpError;
use super::step::Step;
use crate::board::NetworkDescriptors;
use crate::calibration::CalibrationError;

/// Why a step did not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepError {
    /// The subsystem rejected the registration
    Registration(RegistrationError),
    /// Calibration data for the step could not be read; the step was
    /// skipped without calling the subsystem
    Calibration(CalibrationError),
}

impl From<RegistrationError> for StepError {
    fn from(e: RegistrationError) -> Self {
        StepError::Registration(e)
    }
}

impl From<CalibrationError> for StepError {
    fn from(e: CalibrationError) -> Self {
        StepError::Calibration(e)
    }
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::Registration(e) => write!(f, "registration failed: {e}"),
            StepError::Calibration(e) => write!(f, "skipped, {e}"),
        }
    }
}

/// Result of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepOutcome {
    pub step: Step,
    pub result: Result<(), StepError>,
}

/// What happened during bring-up
///
/// A rejected registration or missing calibration data leaves that one
/// peripheral unusable; it does not stop the remaining steps. The report
/// lists every step in order, together with the Ethernet descriptors
/// that were handed out.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BringUpReport {
    outcomes: Vec<StepOutcome, { Step::COUNT }>,
    network: NetworkDescriptors,
}

impl BringUpReport {
    pub(crate) fn new(network: NetworkDescriptors) -> Self {
        Self {
            outcomes: Vec::new(),
            network,
        }
    }

    pub(crate) fn record(&mut self, step: Step, result: Result<(), StepError>) {
        let pushed = self.outcomes.push(StepOutcome { step, result });
        debug_assert!(pushed.is_ok(), "step recorded twice");
    }

    pub(crate) fn set_network(&mut self, network: NetworkDescriptors) {
        self.network = network;
    }

    /// Every step, in execution order
    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    /// Result of `step`, or `None` if it was never reached
    pub fn outcome(&self, step: Step) -> Option<Result<(), StepError>> {
        self.outcomes
            .iter()
            .find(|o| o.step == step)
            .map(|o| o.result)
    }

    /// Steps that were rejected or skipped
    pub fn failures(&self) -> impl Iterator<Item = (Step, StepError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.err().map(|e| (o.step, e)))
    }

    /// First step skipped for lack of calibration data
    pub fn calibration_error(&self) -> Option<BringUpError> {
        self.outcomes.iter().find_map(|o| match o.result {
            Err(StepError::Calibration(error)) => Some(BringUpError::Calibration {
                step: o.step,
                error,
            }),
            _ => None,
        })
    }

    /// Turn a report with skipped steps into an error
    ///
    /// Rejected registrations are not errors here; see [`Self::failures`].
    pub fn into_result(self) -> Result<Self, BringUpError> {
        match self.calibration_error() {
            Some(e) => Err(e),
            None => Ok(self),
        }
    }

    /// Every step ran and none failed
    pub fn is_clean(&self) -> bool {
        self.outcomes.len() == Step::COUNT && self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Ethernet descriptors as they were registered
    pub fn network(&self) -> &NetworkDescriptors {
        &self.network
    }
}
