// StepWatch — Hardware & System Configuration
// Target: Seeed Studio Xiao ESP32-C3 (RISC-V)

// ---------------------------------------------------------------------------
// GPIO Pin Definitions (Xiao ESP32-C3 pinout)
// ---------------------------------------------------------------------------
pub const PIN_STATUS_LED: i32 = 4; // D2/A2 — liveness LED, toggled once per tick
pub const PIN_I2C_SDA: i32 = 6;    // D4    — I2C data line
pub const PIN_I2C_SCL: i32 = 7;    // D5    — I2C clock line

// ---------------------------------------------------------------------------
// I2C Bus
// ---------------------------------------------------------------------------
pub const I2C_ADDR_ADXL345: u8 = 0x53;
pub const I2C_TIMEOUT_TICKS: u32 = 1000; // FreeRTOS ticks

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_PEDOMETER: usize = 4096;

// ---------------------------------------------------------------------------
// ADXL345 Self-Test
// ---------------------------------------------------------------------------
// Datasheet: actuating the self-test force shifts the Z-axis output by at
// least ~0.3 g at a 3.3 V supply. Full-resolution mode is 256 LSB/g.
pub const SELF_TEST_SETTLE_MS: u64 = 50;
pub const SELF_TEST_SAMPLES: usize = 8;
pub const SELF_TEST_MIN_Z_SHIFT_LSB: i32 = 50;
