//! Hardware and subsystem abstraction traits
//!
//! These traits define the interface between the jog logic and the pieces
//! it drives: the step/direction outputs and the step pulse scheduler.
//! The planner seam lives with the motion types in [`crate::motion`].

pub mod stepper;

pub use stepper::{StepScheduler, StepperOutputs};
