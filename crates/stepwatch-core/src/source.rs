//! Hardware collaborator traits and fail-closed bring-up.

use std::time::Duration;

use crate::error::StartError;
use crate::sample::RawSample;

/// Supplier of one tri-axial sample per tick.
///
/// Implemented by the firmware over the real accelerometer bus; the read may
/// block until the device has data ready, and that block is the tick loop's
/// only suspension point.
pub trait SampleSource {
    type Error: core::fmt::Debug;

    /// One-time device bring-up (bus setup, power-on, ranging).
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Run the device's self-test. `Ok(false)` means the device answered but
    /// produced out-of-spec readings; `Err` means it could not be reached.
    fn self_test(&mut self) -> Result<bool, Self::Error>;

    /// Read all three axes for the current tick. The axes need not be
    /// captured atomically with respect to each other.
    fn read_sample(&mut self) -> Result<RawSample, Self::Error>;
}

/// Periodic-wait primitive used by the tick loop to hold the nominal sample
/// period. Best-effort: jitter here never affects correctness because the
/// pipeline is indexed by tick count.
pub trait TickTimer {
    /// Block the caller for approximately the given duration.
    fn wait(&mut self, period: Duration);
}

/// Bring up a sample source, fail-closed.
///
/// Runs `initialize` then `self_test`. On a failed self-test the caller gets
/// [`StartError::SelfTestFailed`] and must not enter the tick loop: feeding
/// the pipeline from a device that failed its self-test would produce
/// plausible-looking but invalid step counts.
pub fn start<S: SampleSource>(source: &mut S) -> Result<(), StartError<S::Error>> {
    source.initialize().map_err(StartError::Source)?;

    if source.self_test().map_err(StartError::Source)? {
        log::info!("sample source self-test passed");
        Ok(())
    } else {
        log::error!("sample source self-test failed — refusing to start");
        Err(StartError::SelfTestFailed)
    }
}
