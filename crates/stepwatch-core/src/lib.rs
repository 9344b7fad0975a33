//! StepWatch core — footstep counting from a tri-axial acceleration stream.
//!
//! This crate is the algorithmic half of the StepWatch pedometer. It converts
//! raw accelerometer counts into step events through a fixed pipeline, one
//! tick at a time:
//!
//! ```text
//! SampleSource → magnitude → SlidingWindow → PeakDetector → step count
//! ```
//!
//! - [`RawSample`] holds one tick of signed 16-bit accelerometer counts and
//!   converts them to a scalar magnitude in g-units.
//! - [`SlidingWindow`] is a fixed-capacity ring buffer over recent magnitudes,
//!   their first differences, and squared differences, producing a variance
//!   proxy (mean squared difference) as a cheap step-energy measure.
//! - [`PeakDetector`] is a three-state machine (`Idle`/`Detect`/`Timeout`)
//!   that gates on the variance proxy, confirms a local peak, and debounces
//!   so one impact counts as one step.
//! - [`Pedometer`] wires the three together behind a single
//!   [`process_sample`](Pedometer::process_sample) call.
//!
//! Hardware is kept behind the [`SampleSource`] and [`TickTimer`] traits; the
//! firmware crate implements them over I2C and a paced sleep. The core has no
//! hardware dependencies and is fully testable on the host.
//!
//! Everything is single-threaded and tick-driven: one `process_sample` call
//! is one tick, and all state is indexed by tick count, never by wall-clock
//! time.
//!
//! # Example
//!
//! ```
//! use stepwatch_core::{Pedometer, PedometerConfig, RawSample};
//!
//! let mut pedometer = Pedometer::new(PedometerConfig::default()).unwrap();
//! let sample = RawSample::new(12, -30, 250);
//! if let Some(event) = pedometer.process_sample(&sample) {
//!     println!("step {} at tick {}", event.total_steps, event.tick);
//! }
//! ```

mod config;
mod detector;
mod error;
mod pipeline;
mod sample;
mod source;
mod window;

#[cfg(test)]
mod testing;

pub use config::{
    PedometerConfig, DEFAULT_COUNTS_PER_G, DEFAULT_DEBOUNCE_TICKS, DEFAULT_SAMPLE_PERIOD_MS,
    DEFAULT_VARIANCE_GATE, DEFAULT_WINDOW_LEN,
};
pub use detector::{DetectorState, PeakDetector};
pub use error::{ConfigError, StartError};
pub use pipeline::{Pedometer, StepEvent};
pub use sample::RawSample;
pub use source::{start, SampleSource, TickTimer};
pub use window::SlidingWindow;
