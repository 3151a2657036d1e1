//! Board-agnostic jog execution core
//!
//! This crate contains the jog path of a step/direction motion controller,
//! independent of any particular board:
//!
//! - Jog executor (motion parameters, override policy, soft limits)
//! - Two interchangeable execution strategies: direct-drive step pulsing and
//!   planner handoff
//! - Machine state and tracked step position
//! - Settings and their persisted form
//! - Collaborator traits for the planner and the step scheduler
//!
//! # Example
//!
//! ```
//! use gantry_core::config::Settings;
//! use gantry_core::jog::{DirectDrive, JogBlock, JogExecutor};
//! use gantry_core::motion::MotionParameters;
//! use gantry_core::port::{AxisPins, StepperPort};
//! use gantry_core::traits::StepScheduler;
//! use gantry_core::{StatusCode, System};
//! use gantry_hal::mock::{MockDelay, MockPin};
//!
//! struct NoScheduler;
//!
//! impl StepScheduler for NoScheduler {
//!     fn prep_buffer(&mut self) {}
//!     fn wake_up(&mut self) {}
//!     fn go_idle(&mut self) {}
//! }
//!
//! let port = StepperPort::new(
//!     [AxisPins::default(), AxisPins::default(), AxisPins::default()],
//!     MockPin::default(),
//! );
//! let drive = DirectDrive::new(port, MockDelay::new(), NoScheduler);
//! let mut jog = JogExecutor::new(Settings::default(), drive);
//!
//! let mut sys = System::new();
//! let mut pl_data = MotionParameters::default();
//! let block = JogBlock::new([40.0, 0.0, 0.0], 500.0);
//!
//! assert_eq!(jog.execute_jog(&mut sys, &mut pl_data, &block), StatusCode::Ok);
//! assert_eq!(sys.position, [40, 0, 0]);
//! ```

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod jog;
pub mod motion;
pub mod port;
pub mod state;
pub mod status;
pub mod system;
pub mod traits;

pub use status::StatusCode;
pub use system::System;
