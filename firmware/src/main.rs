// StepWatch — Firmware Entry Point
//
// Boot sequence:
//   1. Initialise logging and take the peripherals.
//   2. Bring up the shared I2C bus and the ADXL345.
//   3. Run the fail-closed bring-up (init + self-test). On failure, blink
//      the status LED and abort instead of entering the tick loop.
//   4. Spawn the pedometer task and park the main thread.

mod config;
mod drivers;
mod tasks;

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use esp_idf_hal::gpio::{OutputPin, PinDriver};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::prelude::*;

use crate::config::*;
use crate::drivers::accel::Adxl345;
use crate::drivers::status_led::StatusLed;

fn main() -> anyhow::Result<()> {
    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("StepWatch firmware starting…");

    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;

    // ---- I2C bus ----------------------------------------------------------
    let i2c_config = I2cConfig::new().baudrate(400u32.kHz().into());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio6, // SDA
        peripherals.pins.gpio7, // SCL
        &i2c_config,
    )?;
    // SAFETY: The I2C peripheral is a singleton obtained from `Peripherals::take()`.
    // It will live for the entire programme duration (embedded firmware never exits).
    let i2c_bus: &'static Mutex<I2cDriver<'static>> =
        Box::leak(Box::new(Mutex::new(unsafe { core::mem::transmute(i2c) })));

    // ---- Status LED -------------------------------------------------------
    let led_pin = PinDriver::output(peripherals.pins.gpio4.downgrade_output())?;
    let mut led = StatusLed::new(led_pin);

    // ---- Accelerometer bring-up (fail-closed) -----------------------------
    let mut imu = Adxl345::new(i2c_bus);
    if let Err(e) = stepwatch_core::start(&mut imu) {
        log::error!("Accelerometer bring-up FAILED: {}", e);
        // No console on the wrist — signal the failure on the LED too, then
        // surface the error instead of spinning silently.
        led.blink_error(10);
        anyhow::bail!("accelerometer bring-up failed: {e}");
    }
    log::info!("Boot complete — entering normal operation");

    // ---- Spawn the pedometer task -----------------------------------------
    thread::Builder::new()
        .name("pedometer".into())
        .stack_size(STACK_PEDOMETER)
        .spawn(move || {
            tasks::pedometer::pedometer_task(imu, led);
        })?;

    // Main thread has nothing left to do — park it forever.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
