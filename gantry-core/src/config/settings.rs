//! Machine settings
//!
//! The subset of grbl's `$` settings that the jog path consults: per-axis
//! resolution, rate and travel, plus the global flag word.

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::motion::{Axis, N_AXIS};

/// Microseconds per minute, the numerator of the step period
pub const MICROS_PER_MINUTE: f32 = 60_000_000.0;

/// Default steps per distance unit ($100-$102)
pub const DEFAULT_STEPS_PER_UNIT: f32 = 250.0;

/// Default maximum rate in units/min ($110-$112)
pub const DEFAULT_MAX_RATE: f32 = 500.0;

/// Default maximum travel in units ($130-$132)
pub const DEFAULT_MAX_TRAVEL: f32 = 200.0;

bitflags! {
    /// Global settings flags (grbl `BITFLAG_*` layout)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SettingsFlags: u16 {
        const REPORT_INCHES         = 1 << 0;
        const LASER_MODE            = 1 << 1;
        /// Stepper enable line is active-high
        const INVERT_STEPPER_ENABLE = 1 << 2;
        const HARD_LIMIT_ENABLE     = 1 << 3;
        const HOMING_ENABLE         = 1 << 4;
        /// Reject motion whose target leaves the travel envelope
        const SOFT_LIMIT_ENABLE     = 1 << 5;
        const INVERT_LIMIT_PINS     = 1 << 6;
        const INVERT_PROBE_PIN      = 1 << 7;
        /// Machine space is `[0, max_travel]` instead of `[-max_travel, 0]`
        const HOMING_FORCE_ORIGIN   = 1 << 8;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SettingsFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SettingsFlags({=u16:#06x})", self.bits())
    }
}

/// Errors from validating or loading settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Steps per unit must be finite and positive
    InvalidStepsPerUnit(Axis),
    /// Max rate must be finite and positive
    InvalidMaxRate(Axis),
    /// Max travel must be finite and positive
    InvalidMaxTravel(Axis),
    /// Soft limits need homing to establish machine zero
    SoftLimitsRequireHoming,
    /// Serialized form did not fit the buffer
    Encode,
    /// Serialized form could not be decoded
    Decode,
    /// Stored data is not a settings record
    BadMagic,
    /// Stored data was written by an incompatible version
    VersionMismatch,
}

/// Per-axis settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisSettings {
    /// Motor steps per distance unit
    pub steps_per_unit: f32,
    /// Maximum rate in units per minute
    pub max_rate: f32,
    /// Travel length from machine zero, positive
    pub max_travel: f32,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            steps_per_unit: DEFAULT_STEPS_PER_UNIT,
            max_rate: DEFAULT_MAX_RATE,
            max_travel: DEFAULT_MAX_TRAVEL,
        }
    }
}

impl AxisSettings {
    /// Step period in microseconds when running at `max_rate`
    ///
    /// `60_000_000 / (steps_per_unit * max_rate)`, truncated. Degenerate
    /// settings saturate (zero rate gives `u32::MAX`); `validate` keeps them
    /// out of a running machine.
    pub fn step_period_us(&self) -> u32 {
        (MICROS_PER_MINUTE / (self.steps_per_unit * self.max_rate)) as u32
    }

    /// Maximum step rate in steps per second
    pub fn max_step_rate_hz(&self) -> f32 {
        self.steps_per_unit * self.max_rate / 60.0
    }

    fn validate(&self, axis: Axis) -> Result<(), SettingsError> {
        if !is_positive(self.steps_per_unit) {
            return Err(SettingsError::InvalidStepsPerUnit(axis));
        }
        if !is_positive(self.max_rate) {
            return Err(SettingsError::InvalidMaxRate(axis));
        }
        if !is_positive(self.max_travel) {
            return Err(SettingsError::InvalidMaxTravel(axis));
        }
        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Complete settings block
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Per-axis settings, indexed by [`Axis::index`]
    pub axes: [AxisSettings; N_AXIS],
    /// Global flags
    pub flags: SettingsFlags,
}

impl Settings {
    /// Settings for one axis
    pub fn axis(&self, axis: Axis) -> &AxisSettings {
        &self.axes[axis.index()]
    }

    /// Mutable settings for one axis
    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisSettings {
        &mut self.axes[axis.index()]
    }

    /// Check if jog and motion targets are checked against travel bounds
    pub fn soft_limits_enabled(&self) -> bool {
        self.flags.contains(SettingsFlags::SOFT_LIMIT_ENABLE)
    }

    /// Check if the stepper enable line is driven high to enable
    pub fn invert_stepper_enable(&self) -> bool {
        self.flags.contains(SettingsFlags::INVERT_STEPPER_ENABLE)
    }

    /// Check if machine space extends positive from zero
    pub fn homing_force_origin(&self) -> bool {
        self.flags.contains(SettingsFlags::HOMING_FORCE_ORIGIN)
    }

    /// Steps per unit for every axis
    pub fn steps_per_unit(&self) -> [f32; N_AXIS] {
        self.axes.map(|a| a.steps_per_unit)
    }

    /// Validate all values
    ///
    /// Returns the first problem found, axes in drive order.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for axis in Axis::ALL {
            self.axis(axis).validate(axis)?;
        }

        if self.soft_limits_enabled() && !self.flags.contains(SettingsFlags::HOMING_ENABLE) {
            return Err(SettingsError::SoftLimitsRequireHoming);
        }

        Ok(())
    }
}
