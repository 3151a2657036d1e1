//! Stepper output and scheduler traits

use gantry_hal::Level;

use crate::motion::Axis;

/// Step/direction outputs for every axis plus the shared enable line
///
/// Direct-drive jogging writes these synchronously from the calling context.
pub trait StepperOutputs {
    /// Drive the direction line of `axis`
    fn set_direction(&mut self, axis: Axis, level: Level);

    /// Drive the step line of `axis`
    ///
    /// A step is a `High` level held for the driver's minimum pulse width,
    /// then `Low`. Timing is the caller's job.
    fn set_step(&mut self, axis: Axis, level: Level);

    /// Drive the stepper enable line
    ///
    /// Polarity is the caller's concern (see `INVERT_STEPPER_ENABLE`).
    fn set_enable(&mut self, level: Level);
}

/// Interrupt-driven step pulse scheduler
///
/// Executes planner blocks asynchronously. The jog path only starts and
/// stops it; block execution and position updates happen on its side.
pub trait StepScheduler {
    /// Fill the segment buffer from the current planner block
    fn prep_buffer(&mut self);

    /// Start pulse generation
    fn wake_up(&mut self);

    /// Stop pulse generation and return the outputs to rest
    fn go_idle(&mut self);
}
