//! Machine state
//!
//! The jog path only ever moves the machine between `Idle` and `Jog`; every
//! other state belongs to the rest of the firmware and is treated as busy.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
