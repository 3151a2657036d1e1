//! Soft travel limits
//!
//! Jog targets are checked against the machine travel envelope before any
//! motion starts. The envelope is derived from the per-axis `max_travel`
//! settings the same way grbl does: machine zero sits at the homing switch and
//! the usable space extends toward negative coordinates, unless the machine
//! is configured to force the origin to the other end.

use super::axis::{Axis, AxisVector, N_AXIS};
use crate::config::Settings;

/// Predicate deciding whether a target leaves the machine travel envelope
pub trait TravelLimits {
    /// Check if `target` lies outside the configured travel bounds
    ///
    /// Must have no side effects.
    fn exceeds_travel_limits(&self, target: &AxisVector) -> bool;
}

impl<T: TravelLimits + ?Sized> TravelLimits for &T {
    fn exceeds_travel_limits(&self, target: &AxisVector) -> bool {
        (**self).exceeds_travel_limits(target)
    }
}

/// Closed travel interval for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TravelBounds {
    pub min: f32,
    pub max: f32,
}

impl TravelBounds {
    /// Check if a coordinate is within bounds (inclusive, NaN is outside)
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Travel envelope built from machine settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoftLimits {
    bounds: [TravelBounds; N_AXIS],
}

impl SoftLimits {
    /// Create an envelope from explicit per-axis bounds
    pub const fn new(bounds: [TravelBounds; N_AXIS]) -> Self {
        Self { bounds }
    }

    /// Derive the envelope from `max_travel` and the origin convention
    pub fn from_settings(settings: &Settings) -> Self {
        let force_origin = settings.homing_force_origin();
        let mut bounds = [TravelBounds { min: 0.0, max: 0.0 }; N_AXIS];
        for axis in Axis::ALL {
            let travel = settings.axis(axis).max_travel;
            bounds[axis.index()] = if force_origin {
                TravelBounds { min: 0.0, max: travel }
            } else {
                TravelBounds { min: -travel, max: 0.0 }
            };
        }
        Self { bounds }
    }

    /// Bounds for one axis
    pub fn bounds(&self, axis: Axis) -> TravelBounds {
        self.bounds[axis.index()]
    }

    /// First axis whose target coordinate is out of bounds
    pub fn first_violation(&self, target: &AxisVector) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|axis| !self.bounds[axis.index()].contains(target[axis.index()]))
    }
}

impl TravelLimits for SoftLimits {
    fn exceeds_travel_limits(&self, target: &AxisVector) -> bool {
        self.first_violation(target).is_some()
    }
}
