// StepWatch — Pedometer Task
//
// The tick loop: read one accelerometer sample, advance the step-counting
// pipeline, toggle the liveness LED, then sleep the remainder of the sample
// period. Runs until power-down.

use std::thread;
use std::time::{Duration, Instant};

use stepwatch_core::{Pedometer, PedometerConfig, SampleSource, TickTimer};

use crate::drivers::accel::Adxl345;
use crate::drivers::status_led::StatusLed;

/// [`TickTimer`] that compensates for the time the tick body consumed, so
/// consecutive ticks stay near the nominal period.
pub struct PacedTimer {
    tick_start: Instant,
}

impl PacedTimer {
    pub fn new() -> Self {
        Self {
            tick_start: Instant::now(),
        }
    }
}

impl TickTimer for PacedTimer {
    fn wait(&mut self, period: Duration) {
        let elapsed = self.tick_start.elapsed();
        if elapsed < period {
            thread::sleep(period - elapsed);
        }
        self.tick_start = Instant::now();
    }
}

pub fn pedometer_task(mut imu: Adxl345, mut led: StatusLed) {
    log::info!("Pedometer task started");

    let config = PedometerConfig::default();
    let period = Duration::from_millis(config.sample_period_ms);
    let mut pedometer = match Pedometer::new(config) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Pedometer config rejected: {}", e);
            return;
        }
    };

    let mut timer = PacedTimer::new();

    loop {
        match imu.read_sample() {
            Ok(sample) => {
                if let Some(event) = pedometer.process_sample(&sample) {
                    log::info!("Steps taken: {}", event.total_steps);
                }
            }
            Err(e) => {
                // A dropped read skips this tick; the pipeline is indexed by
                // processed ticks, so the state machine stays consistent.
                log::warn!("IMU read error: {}", e);
            }
        }

        led.toggle();
        timer.wait(period);
    }
}
