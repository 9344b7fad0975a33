//! Pipeline configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Ring buffer capacity in ticks.
pub const DEFAULT_WINDOW_LEN: usize = 16;

/// Variance-proxy threshold (g²) below which the signal is treated as rest.
pub const DEFAULT_VARIANCE_GATE: f32 = 0.02;

/// Ticks the detector must spend in `Timeout` before re-arming.
/// The debounce state is left once the timeout counter *exceeds* this bound,
/// so the cooldown lasts `DEFAULT_DEBOUNCE_TICKS + 1` ticks.
pub const DEFAULT_DEBOUNCE_TICKS: u32 = 7;

/// Accelerometer scale in LSB per g (ADXL345 full-resolution mode).
pub const DEFAULT_COUNTS_PER_G: f32 = 256.0;

/// Nominal spacing between ticks in milliseconds.
pub const DEFAULT_SAMPLE_PERIOD_MS: u64 = 500;

/// Configuration for the step-counting pipeline.
///
/// Every threshold the detector uses is named here rather than inlined, so a
/// host can retune the gate or cadence without touching the pipeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PedometerConfig {
    /// Number of ticks the sliding window covers.
    pub window_len: usize,

    /// Step-energy gate: the mean squared magnitude difference over the
    /// window must exceed this for a peak to be considered.
    pub variance_gate: f32,

    /// Debounce bound: ticks in `Timeout` before the detector re-arms.
    pub debounce_ticks: u32,

    /// Raw-count-to-g calibration constant (LSB per g).
    pub counts_per_g: f32,

    /// Nominal sample period in milliseconds. Timing is best-effort; the
    /// pipeline itself is indexed by tick count, not wall-clock time.
    pub sample_period_ms: u64,
}

impl Default for PedometerConfig {
    fn default() -> Self {
        Self {
            window_len: DEFAULT_WINDOW_LEN,
            variance_gate: DEFAULT_VARIANCE_GATE,
            debounce_ticks: DEFAULT_DEBOUNCE_TICKS,
            counts_per_g: DEFAULT_COUNTS_PER_G,
            sample_period_ms: DEFAULT_SAMPLE_PERIOD_MS,
        }
    }
}

impl PedometerConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_len < 2 {
            // The peak test reads the previous and lookahead slots, so a
            // window shorter than 2 cannot index them distinctly.
            return Err(ConfigError::WindowTooShort);
        }
        if !(self.counts_per_g > 0.0) {
            return Err(ConfigError::NonPositiveScale);
        }
        if !(self.variance_gate >= 0.0) {
            return Err(ConfigError::NegativeGate);
        }
        Ok(())
    }
}
