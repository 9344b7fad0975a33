// StepWatch — Status LED Driver
//
// Simple GPIO-driven liveness indicator. The pedometer task toggles it once
// per tick; main blinks it rapidly to signal a failed boot check.

use std::thread;
use std::time::Duration;

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};

pub struct StatusLed {
    pin: PinDriver<'static, AnyOutputPin, Output>,
}

impl StatusLed {
    pub fn new(pin: PinDriver<'static, AnyOutputPin, Output>) -> Self {
        Self { pin }
    }

    /// Flip the LED state — one call per tick shows the loop is alive.
    pub fn toggle(&mut self) {
        let _ = self.pin.toggle();
    }

    /// Rapid blink pattern used to surface a boot failure without a console.
    pub fn blink_error(&mut self, pulses: u32) {
        for _ in 0..pulses {
            let _ = self.pin.set_high();
            thread::sleep(Duration::from_millis(100));
            let _ = self.pin.set_low();
            thread::sleep(Duration::from_millis(100));
        }
    }
}
