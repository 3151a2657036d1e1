//! Blocking delay abstraction
//!
//! Direct-drive jogging paces step pulses with a fixed wait. Backing the wait
//! with a trait lets host tests run against a virtual clock instead of
//! burning real time.

/// Blocking microsecond delay
pub trait MicrosDelay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

impl<T: MicrosDelay + ?Sized> MicrosDelay for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}
