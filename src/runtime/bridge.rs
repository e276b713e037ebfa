/*!
 * Runtime Bridge Trait
 * Platform seam for COM initialization and teardown
 */

use crate::core::errors::DelegateError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Threading model requested when the runtime is initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApartmentModel {
    /// Free-threaded (`COINIT_MULTITHREADED`)
    #[default]
    Multithreaded,
    /// Single-threaded apartment (`COINIT_APARTMENTTHREADED`)
    Apartment,
}

impl FromStr for ApartmentModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multithreaded" | "mta" => Ok(ApartmentModel::Multithreaded),
            "apartment" | "sta" => Ok(ApartmentModel::Apartment),
            other => Err(format!("unknown apartment model: {}", other)),
        }
    }
}

/// Platform hook invoked when the process-wide reference count crosses zero
///
/// `initialize` runs when the count goes 0 -> 1, `uninitialize` when it
/// returns to 0. Calls are serialized by [`super::ComRuntime`]; an
/// implementation never sees two transitions at once.
pub trait RuntimeBridge: Send + Sync {
    /// Bring the runtime up for this process
    fn initialize(&self, apartment: ApartmentModel) -> Result<(), DelegateError>;

    /// Tear the runtime down
    ///
    /// Should NOT panic. Log errors instead.
    fn uninitialize(&self);
}

/// Bridge for hosts where the runtime is brought up elsewhere
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBridge;

impl RuntimeBridge for NoopBridge {
    fn initialize(&self, _apartment: ApartmentModel) -> Result<(), DelegateError> {
        Ok(())
    }

    fn uninitialize(&self) {}
}
