//! Events that trigger state transitions

/// Events driving the jog lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Jog motion is about to start
    JogStart,
    /// Jog motion finished on all axes
    JogComplete,
}
