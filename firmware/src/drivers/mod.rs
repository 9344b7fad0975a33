// StepWatch — Hardware Drivers

pub mod accel;
pub mod status_led;
