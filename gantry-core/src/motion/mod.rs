//! Motion primitives
//!
//! Axis indexing, per-move parameters, soft-limit checking and the planner
//! seam used by queued jogs.

pub mod axis;
pub mod limits;
pub mod params;
pub mod planner;

pub use axis::{Axis, AxisSteps, AxisVector, N_AXIS};
pub use limits::{SoftLimits, TravelBounds, TravelLimits};
pub use params::{ConditionFlags, MotionParameters};
pub use planner::{BlockQueue, PlanBlock, PlanOutcome, Planner, BLOCK_BUFFER_SIZE};
