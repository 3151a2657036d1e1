//! Gantry Hardware Abstraction Layer
//!
//! The jog core drives step/direction stepper drivers through a handful of
//! discrete outputs and a microsecond delay. This crate defines those two
//! seams so the same core runs against real pins (see `gantry-drivers`) or
//! against the mocks in [`mock`] on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  gantry-core (jog executor, strategies) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  gantry-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │gantry-drivers │       │  hal mocks    │
//! │ (embedded-hal)│       │  (host tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Discrete output with read-back of the driven level
//! - [`delay::MicrosDelay`] - Blocking wait used between step pulses

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod mock;

// Re-export key traits at crate root for convenience
pub use delay::MicrosDelay;
pub use gpio::{Level, OutputPin};
