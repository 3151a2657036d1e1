//! Shared machine context
//!
//! The state and step position every motion path reads and the active
//! step generator writes. Passed explicitly as `&mut System` rather than
//! living in a global.

use crate::motion::{AxisSteps, N_AXIS};
use crate::state::State;

/// Machine state and tracked position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct System {
    /// Current machine state
    pub state: State,
    /// Position in motor steps, one count per axis
    ///
    /// Must match the net steps actually issued to the motors.
    pub position: AxisSteps,
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

impl System {
    /// Idle machine at step zero
    pub const fn new() -> Self {
        Self {
            state: State::Idle,
            position: [0; N_AXIS],
        }
    }

    /// Machine in `state` at `position`
    pub const fn with(state: State, position: AxisSteps) -> Self {
        Self { state, position }
    }
}
