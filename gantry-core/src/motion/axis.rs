//! Machine axes and per-axis vectors

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of machine axes
pub const N_AXIS: usize = 3;

/// Position or target in distance units, one value per axis
pub type AxisVector = [f32; N_AXIS];

/// Position in discrete motor steps, one value per axis
pub type AxisSteps = [i32; N_AXIS];

/// Machine axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in drive order
    pub const ALL: [Axis; N_AXIS] = [Axis::X, Axis::Y, Axis::Z];

    /// Index into per-axis arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Convert a coordinate to a step count, truncating toward zero
///
/// Out-of-range values saturate at the `i32` bounds and NaN becomes zero.
pub fn truncate_to_steps(value: f32) -> i32 {
    value as i32
}

/// Convert a distance to steps, rounding half away from zero
pub fn round_to_steps(value: f32, steps_per_unit: f32) -> i32 {
    let scaled = value * steps_per_unit;
    if scaled >= 0.0 {
        (scaled + 0.5) as i32
    } else {
        (scaled - 0.5) as i32
    }
}
