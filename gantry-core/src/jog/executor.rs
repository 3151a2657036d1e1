//! Jog entry point

use super::{JogBlock, JogStrategy};
use crate::config::{Settings, SettingsError};
use crate::motion::{ConditionFlags, MotionParameters, SoftLimits, TravelLimits};
use crate::status::StatusCode;
use crate::system::System;

/// Validates jog requests and dispatches them to a strategy
#[derive(Debug)]
pub struct JogExecutor<S, L = SoftLimits> {
    settings: Settings,
    limits: L,
    strategy: S,
}

impl<S: JogStrategy> JogExecutor<S, SoftLimits> {
    /// Create an executor from validated settings
    ///
    /// Rejects settings that would stall or misdirect a jog, such as a zero
    /// max rate (a step period of over an hour).
    pub fn try_new(settings: Settings, strategy: S) -> Result<Self, SettingsError> {
        if let Err(e) = settings.validate() {
            warn!("jog executor rejected settings: {}", e);
            return Err(e);
        }
        Ok(Self::new(settings, strategy))
    }

    /// Create an executor checking soft limits derived from `settings`
    ///
    /// `settings` are used as is. Use [`JogExecutor::try_new`] unless they
    /// were already validated, for instance by `Settings::from_bytes`.
    pub fn new(settings: Settings, strategy: S) -> Self {
        let limits = SoftLimits::from_settings(&settings);
        Self {
            settings,
            limits,
            strategy,
        }
    }
}

impl<S: JogStrategy, L: TravelLimits> JogExecutor<S, L> {
    /// Create an executor with a custom limit checker
    pub fn with_limits(settings: Settings, limits: L, strategy: S) -> Self {
        Self {
            settings,
            limits,
            strategy,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn limits(&self) -> &L {
        &self.limits
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// Release the strategy and limit checker
    pub fn into_parts(self) -> (Settings, L, S) {
        (self.settings, self.limits, self.strategy)
    }

    /// Execute a jog
    ///
    /// Completes `pl_data` for the jog (feed rate, no feed override, line
    /// number), rejects targets outside the travel envelope when soft limits
    /// are enabled, and otherwise runs the strategy.
    ///
    /// Returns [`StatusCode::TravelExceeded`] only for a soft-limit
    /// rejection, in which case neither `sys` nor any output was touched.
    /// Every other outcome, including a jog skipped because the machine was
    /// busy, is [`StatusCode::Ok`].
    pub fn execute_jog(
        &mut self,
        sys: &mut System,
        pl_data: &mut MotionParameters,
        block: &JogBlock,
    ) -> StatusCode {
        // Spindle and coolant keep their overrides during a jog; feed does not.
        pl_data.feed_rate = block.feed_rate;
        pl_data.condition |= ConditionFlags::NO_FEED_OVERRIDE;
        #[cfg(feature = "line-numbers")]
        {
            pl_data.line_number = block.line_number;
        }

        if self.settings.soft_limits_enabled()
            && self.limits.exceeds_travel_limits(&block.target)
        {
            warn!("jog rejected: target outside travel limits");
            return StatusCode::TravelExceeded;
        }

        self.strategy.run(sys, &self.settings, &block.target, pl_data);

        StatusCode::Ok
    }
}
