//! State machine definition

use super::events::Event;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Ready for commands, no motion
    Idle,
    /// Locked out until homed or unlocked
    Alarm,
    /// G-code check mode, motion is parsed but not executed
    CheckMode,
    /// Homing cycle in progress
    Homing,
    /// Running programmed motion
    Cycle,
    /// Feed hold, decelerating or stopped mid-program
    Hold,
    /// Executing a jog
    Jog,
    /// Safety door open
    SafetyDoor,
    /// Sleep mode, steppers and spindle off
    Sleep,
}

impl State {
    /// Check if a new jog may start
    pub fn is_idle(&self) -> bool {
        matches!(self, State::Idle)
    }

    pub fn is_jogging(&self) -> bool {
        matches!(self, State::Jog)
    }

    /// Check if steppers may be moving in this state
    pub fn is_motion(&self) -> bool {
        matches!(self, State::Homing | State::Cycle | State::Hold | State::Jog)
    }

    /// Process an event and return the next state
    ///
    /// Pairs not listed keep the current state, so a jog event never
    /// overrides a state owned by another subsystem.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, JogStart) => Jog,
            (Jog, JogComplete) => Idle,
            _ => self,
        }
    }
}
