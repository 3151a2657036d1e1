//! Direct-drive jogging
//!
//! Drives the step and direction lines straight from the calling context,
//! one axis at a time, with a fixed step period derived from the axis max
//! rate. There is no acceleration ramp and the axes are not interpolated:
//! axis X completes its travel before Y starts, and so on.
//!
//! Each step holds the step line high for the pulse width, then low for the
//! rest of the step period. The call blocks for the whole move and cannot be
//! cancelled. The machine position is updated on every pulse, so it always
//! matches the steps that were actually issued.

use gantry_hal::{Level, MicrosDelay};

use super::JogStrategy;
use crate::config::Settings;
use crate::motion::axis::truncate_to_steps;
use crate::motion::{Axis, AxisVector, MotionParameters};
use crate::state::Event;
use crate::system::System;
use crate::traits::{StepScheduler, StepperOutputs};

/// Direction line level for travel toward negative coordinates
pub const DIR_NEGATIVE: Level = Level::High;

/// Direction line level for travel toward positive coordinates
pub const DIR_POSITIVE: Level = Level::Low;

/// Default step pulse width in microseconds
///
/// Comfortably above the minimum high time of common step/dir drivers
/// (A4988 1 us, DRV8825 1.9 us, TMC22xx 100 ns).
pub const DEFAULT_STEP_PULSE_US: u32 = 10;

/// Synchronous step-pulse jog strategy
///
/// Target coordinates are taken as step counts and truncated toward zero.
#[derive(Debug)]
pub struct DirectDrive<O, D, G> {
    outputs: O,
    delay: D,
    scheduler: G,
    pulse_us: u32,
}

impl<O, D, G> DirectDrive<O, D, G>
where
    O: StepperOutputs,
    D: MicrosDelay,
    G: StepScheduler,
{
    pub fn new(outputs: O, delay: D, scheduler: G) -> Self {
        Self {
            outputs,
            delay,
            scheduler,
            pulse_us: DEFAULT_STEP_PULSE_US,
        }
    }

    /// Set the step pulse width
    ///
    /// Zero is raised to 1 us. When the width exceeds the step period the
    /// pulse keeps its width and the step rate drops accordingly.
    pub fn with_pulse_width(mut self, pulse_us: u32) -> Self {
        self.pulse_us = pulse_us.max(1);
        self
    }

    pub fn pulse_width_us(&self) -> u32 {
        self.pulse_us
    }

    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn scheduler(&self) -> &G {
        &self.scheduler
    }

    /// Release the hardware
    pub fn into_parts(self) -> (O, D, G) {
        (self.outputs, self.delay, self.scheduler)
    }

    /// Step one axis from its current position to `target_steps`
    fn drive_axis(&mut self, sys: &mut System, settings: &Settings, axis: Axis, target_steps: i32) {
        let i = axis.index();
        let steps = target_steps.saturating_sub(sys.position[i]);
        if steps == 0 {
            return;
        }

        let period_us = settings.axis(axis).step_period_us();
        let low_us = period_us.saturating_sub(self.pulse_us);
        let (dir, increment) = if steps < 0 {
            (DIR_NEGATIVE, -1)
        } else {
            (DIR_POSITIVE, 1)
        };

        trace!("jog {}: {} steps, {} us/step", axis, steps, period_us);

        self.outputs.set_direction(axis, dir);
        for _ in 0..steps.unsigned_abs() {
            self.outputs.set_step(axis, Level::High);
            self.delay.delay_us(self.pulse_us);
            self.outputs.set_step(axis, Level::Low);
            sys.position[i] += increment;
            // High plus low time keeps the pulse train at or below max rate.
            if low_us > 0 {
                self.delay.delay_us(low_us);
            }
        }
    }
}

impl<O, D, G> JogStrategy for DirectDrive<O, D, G>
where
    O: StepperOutputs,
    D: MicrosDelay,
    G: StepScheduler,
{
    fn run(
        &mut self,
        sys: &mut System,
        settings: &Settings,
        target: &AxisVector,
        _params: &MotionParameters,
    ) {
        if !sys.state.is_idle() {
            debug!("jog skipped: machine busy ({})", sys.state);
            return;
        }

        sys.state = sys.state.transition(Event::JogStart);
        self.outputs
            .set_enable(Level::Low.inverted_if(settings.invert_stepper_enable()));

        for axis in Axis::ALL {
            let target_steps = truncate_to_steps(target[axis.index()]);
            self.drive_axis(sys, settings, axis, target_steps);
        }

        self.scheduler.go_idle();
        sys.state = sys.state.transition(Event::JogComplete);
    }
}
