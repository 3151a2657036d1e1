//! Jog execution
//!
//! A jog is an operator-issued point-to-point move (`$J=` line). The
//! [`JogExecutor`] fills in the motion parameters, checks soft limits and
//! hands the move to one [`JogStrategy`]:
//!
//! - [`DirectDrive`] bit-bangs the step pulses from the calling context and
//!   returns when the move is complete
//! - [`PlannerHandoff`] queues the move and starts the step scheduler
//!
//! The strategy is a type parameter of the executor, fixed when the
//! firmware is built.

pub mod direct;
pub mod executor;
pub mod queued;

pub use direct::DirectDrive;
pub use executor::JogExecutor;
pub use queued::PlannerHandoff;

use crate::config::Settings;
use crate::motion::{AxisVector, MotionParameters};
use crate::system::System;

/// A validated jog request from the command parser
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JogBlock {
    /// Target position per axis
    pub target: AxisVector,
    /// Requested feed rate in units per minute
    pub feed_rate: f32,
    /// `N` word of the line, if present
    pub line_number: Option<i32>,
}

impl JogBlock {
    pub fn new(target: AxisVector, feed_rate: f32) -> Self {
        Self {
            target,
            feed_rate,
            line_number: None,
        }
    }

    /// Attach a line number
    pub fn with_line_number(mut self, line_number: i32) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

/// How an accepted jog is carried out
///
/// Called only after soft limits have passed. Implementations must leave
/// `sys` untouched when the machine is not idle.
pub trait JogStrategy {
    fn run(
        &mut self,
        sys: &mut System,
        settings: &Settings,
        target: &AxisVector,
        params: &MotionParameters,
    );
}
