// StepWatch — Background Tasks

pub mod pedometer;
