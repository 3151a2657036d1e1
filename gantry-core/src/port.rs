//! Pin-level stepper port
//!
//! Binds [`StepperOutputs`] to discrete output pins: one step and one
//! direction line per axis, plus the enable line shared by all drivers.

use gantry_hal::{Level, OutputPin};

use crate::motion::{Axis, N_AXIS};
use crate::traits::StepperOutputs;

/// Step and direction pins of one axis
#[derive(Debug, Clone, Default)]
pub struct AxisPins<P> {
    pub step: P,
    pub dir: P,
}

impl<P> AxisPins<P> {
    pub fn new(step: P, dir: P) -> Self {
        Self { step, dir }
    }
}

/// Stepper outputs backed by [`OutputPin`]s
#[derive(Debug, Clone)]
pub struct StepperPort<P> {
    axes: [AxisPins<P>; N_AXIS],
    enable: P,
}

impl<P: OutputPin> StepperPort<P> {
    /// Create a port from per-axis pins (in [`Axis::ALL`] order) and the
    /// enable pin
    pub fn new(axes: [AxisPins<P>; N_AXIS], enable: P) -> Self {
        Self { axes, enable }
    }

    /// Pins of one axis
    pub fn axis(&self, axis: Axis) -> &AxisPins<P> {
        &self.axes[axis.index()]
    }

    /// Shared enable pin
    pub fn enable_pin(&self) -> &P {
        &self.enable
    }

    /// Level the direction line of `axis` is driven to
    pub fn direction(&self, axis: Axis) -> Level {
        self.axes[axis.index()].dir.level()
    }

    /// Release the pins
    pub fn into_parts(self) -> ([AxisPins<P>; N_AXIS], P) {
        (self.axes, self.enable)
    }
}

impl<P: OutputPin> StepperOutputs for StepperPort<P> {
    fn set_direction(&mut self, axis: Axis, level: Level) {
        self.axes[axis.index()].dir.write(level);
    }

    fn set_step(&mut self, axis: Axis, level: Level) {
        self.axes[axis.index()].step.write(level);
    }

    fn set_enable(&mut self, level: Level) {
        self.enable.write(level);
    }
}
