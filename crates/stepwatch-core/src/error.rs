//! Error types for the step-counting core.

use thiserror::Error;

/// Rejected pipeline configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The window must hold at least two slots so the peak test can address
    /// the previous and lookahead positions.
    #[error("window_len must be at least 2")]
    WindowTooShort,

    /// The counts-per-g calibration constant must be positive.
    #[error("counts_per_g must be positive")]
    NonPositiveScale,

    /// The variance gate must be a non-negative finite value.
    #[error("variance_gate must be non-negative")]
    NegativeGate,
}

/// Failure during sensor bring-up.
///
/// Surfaced to the host instead of being retried internally, so the host can
/// choose to retry, halt, or alert.
#[derive(Debug, Error)]
pub enum StartError<E: core::fmt::Debug> {
    /// The sample source reported a bus or device error.
    #[error("sample source error during bring-up: {0:?}")]
    Source(E),

    /// The device answered but failed its self-test. Proceeding would feed
    /// invalid data into the pipeline, so the host must not enter the tick
    /// loop.
    #[error("sample source failed self-test")]
    SelfTestFailed,
}
