//! Output pin adapter
//!
//! Wraps an embedded-hal [`StatefulOutputPin`]. Only infallible pins are
//! accepted: a step line that can fail mid-pulse has no sensible recovery in
//! a blocking jog, and every on-chip GPIO in practice reports
//! [`Infallible`].

use core::convert::Infallible;

use embedded_hal::digital::{PinState, StatefulOutputPin};
use gantry_core::motion::N_AXIS;
use gantry_core::port::{AxisPins, StepperPort};
use gantry_hal::{Level, OutputPin};

/// [`OutputPin`] backed by an embedded-hal pin
///
/// The driven level is cached so reads don't need `&mut` access to the
/// hardware pin.
#[derive(Debug)]
pub struct EhOutput<P> {
    pin: P,
    level: Level,
}

impl<P: StatefulOutputPin<Error = Infallible>> EhOutput<P> {
    /// Wrap a pin, keeping whatever level it is currently driven to
    pub fn new(mut pin: P) -> Self {
        let high = pin.is_set_high().unwrap_or_else(|e| match e {});
        Self {
            pin,
            level: Level::from_high(high),
        }
    }

    /// Wrap a pin and drive it to `level` immediately
    pub fn with_level(pin: P, level: Level) -> Self {
        let mut out = Self::new(pin);
        out.write(level);
        out
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin<Error = Infallible>> OutputPin for EhOutput<P> {
    fn write(&mut self, level: Level) {
        self.pin
            .set_state(PinState::from(level.is_high()))
            .unwrap_or_else(|e| match e {});
        self.level = level;
    }

    fn level(&self) -> Level {
        self.level
    }
}

/// Build a [`StepperPort`] from embedded-hal pins
///
/// `axes` holds `(step, dir)` pairs in X, Y, Z order. Step lines start low
/// so the first write of a pulse is a rising edge.
pub fn stepper_port<P>(axes: [(P, P); N_AXIS], enable: P) -> StepperPort<EhOutput<P>>
where
    P: StatefulOutputPin<Error = Infallible>,
{
    let axes = axes.map(|(step, dir)| {
        AxisPins::new(EhOutput::with_level(step, Level::Low), EhOutput::new(dir))
    });
    StepperPort::new(axes, EhOutput::new(enable))
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorType, OutputPin as _};
    use gantry_core::motion::Axis;
    use gantry_core::traits::StepperOutputs;

    /// Register-like pin: a level plus a write counter
    #[derive(Debug, Default)]
    struct RegPin {
        high: bool,
        writes: u32,
    }

    impl ErrorType for RegPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for RegPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    impl StatefulOutputPin for RegPin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    fn high_pin() -> RegPin {
        RegPin {
            high: true,
            writes: 0,
        }
    }

    #[test]
    fn test_initial_level_is_read_back() {
        assert_eq!(EhOutput::new(high_pin()).level(), Level::High);
        assert_eq!(EhOutput::new(RegPin::default()).level(), Level::Low);
    }

    #[test]
    fn test_write_drives_pin() {
        let mut out = EhOutput::new(RegPin::default());
        out.write(Level::High);
        assert!(out.is_set_high());

        let mut pin = out.into_inner();
        assert!(pin.high);
        assert_eq!(pin.writes, 1);
        pin.set_low().unwrap();
        assert!(!pin.high);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut out = EhOutput::new(RegPin::default());
        out.toggle();
        out.toggle();
        assert_eq!(out.level(), Level::Low);
        assert_eq!(out.into_inner().writes, 2);
    }

    #[test]
    fn test_port_step_lines_start_low() {
        let port = stepper_port(
            [
                (high_pin(), RegPin::default()),
                (high_pin(), RegPin::default()),
                (high_pin(), RegPin::default()),
            ],
            high_pin(),
        );

        for axis in Axis::ALL {
            assert_eq!(port.axis(axis).step.level(), Level::Low);
        }
        // Enable is left alone until the first jog
        assert_eq!(port.enable_pin().level(), Level::High);
    }

    #[test]
    fn test_port_pulse_reaches_hardware() {
        let mut port = stepper_port(
            [
                (RegPin::default(), RegPin::default()),
                (RegPin::default(), RegPin::default()),
                (RegPin::default(), RegPin::default()),
            ],
            RegPin::default(),
        );

        port.set_direction(Axis::Y, Level::High);
        for _ in 0..2 {
            port.set_step(Axis::Y, Level::High);
            port.set_step(Axis::Y, Level::Low);
        }

        assert_eq!(port.direction(Axis::Y), Level::High);
        let (axes, _enable) = port.into_parts();
        let y = &axes[Axis::Y.index()];
        // with_level write + high and low per pulse
        assert_eq!(y.step.level(), Level::Low);
        let step = axes.into_iter().nth(Axis::Y.index()).unwrap().step.into_inner();
        assert_eq!(step.writes, 5);
        assert!(!step.high);
    }
}
