//! Scripted test doubles for the hardware collaborator traits.

use std::time::Duration;

use crate::sample::RawSample;
use crate::source::{SampleSource, TickTimer};

/// Scripted sample source: hands out a fixed sequence of samples and repeats
/// the last one (or rest) once exhausted.
#[derive(Debug)]
pub struct MockSource {
    samples: Vec<RawSample>,
    cursor: usize,
    initialized: bool,
    self_test_ok: bool,
    reachable: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct BusDown;

impl MockSource {
    pub fn healthy(samples: &[RawSample]) -> Self {
        Self {
            samples: samples.to_vec(),
            cursor: 0,
            initialized: false,
            self_test_ok: true,
            reachable: true,
        }
    }

    pub fn failing_self_test() -> Self {
        Self {
            self_test_ok: false,
            ..Self::healthy(&[])
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::healthy(&[])
        }
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }
}

impl SampleSource for MockSource {
    type Error = BusDown;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        if !self.reachable {
            return Err(BusDown);
        }
        self.initialized = true;
        Ok(())
    }

    fn self_test(&mut self) -> Result<bool, Self::Error> {
        if !self.reachable {
            return Err(BusDown);
        }
        Ok(self.self_test_ok)
    }

    fn read_sample(&mut self) -> Result<RawSample, Self::Error> {
        if !self.reachable {
            return Err(BusDown);
        }
        let sample = self
            .samples
            .get(self.cursor)
            .or_else(|| self.samples.last())
            .copied()
            .unwrap_or_default();
        self.cursor += 1;
        Ok(sample)
    }
}

/// Timer that returns immediately; tick pacing is irrelevant to correctness.
#[derive(Debug, Default)]
pub struct InstantTimer;

impl TickTimer for InstantTimer {
    fn wait(&mut self, _period: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PedometerConfig;
    use crate::pipeline::Pedometer;
    use crate::source::start;

    /// Drive the full collaborator surface the way the firmware tick loop
    /// does: bring-up, then read → process → wait.
    #[test]
    fn mock_driven_tick_loop_counts_a_step() {
        let mut stream = vec![RawSample::default(); 40];
        stream[20] = RawSample::new(0, 256, 0); // 1.0 g impact

        let mut source = MockSource::healthy(&stream);
        let mut timer = InstantTimer;
        let config = PedometerConfig::default();
        let period = Duration::from_millis(config.sample_period_ms);
        let mut pedometer = Pedometer::new(config).unwrap();

        start(&mut source).unwrap();
        for _ in 0..stream.len() {
            let sample = source.read_sample().unwrap();
            pedometer.process_sample(&sample);
            timer.wait(period);
        }

        assert_eq!(pedometer.steps(), 1);
    }
}
