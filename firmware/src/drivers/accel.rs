// StepWatch — ADXL345 Accelerometer Driver
//
// Custom register-level driver over shared I2C bus.
// Avoids external crate version conflicts with esp-idf-hal.

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use esp_idf_hal::i2c::I2cDriver;
use stepwatch_core::{RawSample, SampleSource};

use crate::config::*;

/// Thread-safe handle to a shared I2C bus.
pub type SharedBus = &'static Mutex<I2cDriver<'static>>;

// ADXL345 register addresses
const REG_DEVID: u8 = 0x00;
const REG_BW_RATE: u8 = 0x2C;
const REG_POWER_CTL: u8 = 0x2D;
const REG_DATA_FORMAT: u8 = 0x31;
const REG_DATAX0: u8 = 0x32; // Start of 6-byte axis burst
const DEVID_EXPECTED: u8 = 0xE5;

// DATA_FORMAT: full-resolution, ±16 g range (256 LSB/g at any range)
const DATA_FORMAT_FULL_RES_16G: u8 = 0x0B;
// DATA_FORMAT with the SELF_TEST bit (D7) raised
const DATA_FORMAT_SELF_TEST: u8 = DATA_FORMAT_FULL_RES_16G | 0x80;

pub struct Adxl345 {
    bus: SharedBus,
}

impl Adxl345 {
    pub fn new(bus: SharedBus) -> Self {
        Self { bus }
    }

    /// Verify the device is reachable on the I2C bus.
    pub fn is_connected(&self) -> bool {
        matches!(self.read_register(REG_DEVID), Ok(DEVID_EXPECTED))
    }

    fn read_register(&self, reg: u8) -> anyhow::Result<u8> {
        let mut bus = self.bus.lock().unwrap();
        let mut buf = [0u8; 1];
        bus.write_read(I2C_ADDR_ADXL345, &[reg], &mut buf, I2C_TIMEOUT_TICKS)?;
        Ok(buf[0])
    }

    fn write_register(&self, reg: u8, value: u8) -> anyhow::Result<()> {
        let mut bus = self.bus.lock().unwrap();
        bus.write(I2C_ADDR_ADXL345, &[reg, value], I2C_TIMEOUT_TICKS)?;
        Ok(())
    }

    /// Burst-read all three axes (little-endian pairs, X/Y/Z).
    fn read_axes(&self) -> anyhow::Result<RawSample> {
        let mut bus = self.bus.lock().unwrap();
        let mut raw = [0u8; 6];
        bus.write_read(I2C_ADDR_ADXL345, &[REG_DATAX0], &mut raw, I2C_TIMEOUT_TICKS)?;

        Ok(RawSample {
            x: i16::from_le_bytes([raw[0], raw[1]]),
            y: i16::from_le_bytes([raw[2], raw[3]]),
            z: i16::from_le_bytes([raw[4], raw[5]]),
        })
    }

    /// Average the Z axis over a few readings — noise floor for self-test.
    fn average_z(&self) -> anyhow::Result<i32> {
        let mut sum: i32 = 0;
        for _ in 0..SELF_TEST_SAMPLES {
            sum += i32::from(self.read_axes()?.z);
            thread::sleep(Duration::from_millis(10));
        }
        Ok(sum / SELF_TEST_SAMPLES as i32)
    }
}

impl SampleSource for Adxl345 {
    type Error = anyhow::Error;

    /// Wake the sensor: 100 Hz output rate, full-resolution ±16 g, measure mode.
    fn initialize(&mut self) -> anyhow::Result<()> {
        self.write_register(REG_BW_RATE, 0x0A)?; // 100 Hz
        self.write_register(REG_DATA_FORMAT, DATA_FORMAT_FULL_RES_16G)?;
        self.write_register(REG_POWER_CTL, 0x08)?; // Measure bit

        log::info!("ADXL345 initialised (full-res ±16g, 100 Hz)");
        Ok(())
    }

    /// Identity check plus the built-in electrostatic self-test.
    ///
    /// The self-test force deflects the MEMS beam towards +Z; the output must
    /// shift by a datasheet-specified minimum while the force is applied.
    fn self_test(&mut self) -> anyhow::Result<bool> {
        if !self.is_connected() {
            log::error!("ADXL345 DEVID mismatch or no response");
            return Ok(false);
        }

        let baseline = self.average_z()?;

        self.write_register(REG_DATA_FORMAT, DATA_FORMAT_SELF_TEST)?;
        thread::sleep(Duration::from_millis(SELF_TEST_SETTLE_MS));
        let actuated = self.average_z()?;

        // Restore normal operation before judging the result.
        self.write_register(REG_DATA_FORMAT, DATA_FORMAT_FULL_RES_16G)?;
        thread::sleep(Duration::from_millis(SELF_TEST_SETTLE_MS));

        let shift = actuated - baseline;
        log::info!("ADXL345 self-test Z shift: {} LSB", shift);
        Ok(shift >= SELF_TEST_MIN_Z_SHIFT_LSB)
    }

    fn read_sample(&mut self) -> anyhow::Result<RawSample> {
        self.read_axes()
    }
}
