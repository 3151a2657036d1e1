//! embedded-hal bindings
//!
//! Adapts any embedded-hal 1.0 output pin and delay provider to the
//! `gantry-hal` traits so a board crate can hand its pins straight to the
//! jog core:
//!
//! ```ignore
//! let port = stepper_port(
//!     [(x_step, x_dir), (y_step, y_dir), (z_step, z_dir)],
//!     enable,
//! );
//! let drive = DirectDrive::new(port, EhDelay::new(timer), scheduler);
//! let mut jog = JogExecutor::new(settings, drive);
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

pub use delay::EhDelay;
pub use gpio::{stepper_port, EhOutput};
