//! Queued jogging
//!
//! Hands the jog to the planner like any other line, then kicks the step
//! scheduler if the machine was idle. The call returns as soon as pulse
//! generation has started; the scheduler owns the machine position from
//! then on and returns the machine to `Idle` when the block completes.

use super::JogStrategy;
use crate::config::Settings;
use crate::motion::{AxisVector, MotionParameters, Planner};
use crate::state::Event;
use crate::system::System;
use crate::traits::StepScheduler;

/// Planner-backed jog strategy
#[derive(Debug)]
pub struct PlannerHandoff<P, G> {
    planner: P,
    scheduler: G,
}

impl<P: Planner, G: StepScheduler> PlannerHandoff<P, G> {
    pub fn new(planner: P, scheduler: G) -> Self {
        Self { planner, scheduler }
    }

    pub fn planner(&self) -> &P {
        &self.planner
    }

    pub fn planner_mut(&mut self) -> &mut P {
        &mut self.planner
    }

    pub fn scheduler(&self) -> &G {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut G {
        &mut self.scheduler
    }

    pub fn into_parts(self) -> (P, G) {
        (self.planner, self.scheduler)
    }
}

impl<P: Planner, G: StepScheduler> JogStrategy for PlannerHandoff<P, G> {
    fn run(
        &mut self,
        sys: &mut System,
        _settings: &Settings,
        target: &AxisVector,
        params: &MotionParameters,
    ) {
        let outcome = self.planner.buffer_line(target, params);
        trace!("jog planned: {}", outcome);

        if !sys.state.is_idle() {
            return;
        }
        // Zero-length jogs leave nothing to execute.
        if self.planner.current_block().is_none() {
            return;
        }

        sys.state = sys.state.transition(Event::JogStart);
        self.scheduler.prep_buffer();
        // Manual start, no cycle-start state machine involved.
        self.scheduler.wake_up();
        debug!("jog started");
    }
}
