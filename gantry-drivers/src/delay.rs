//! Blocking delay adapter

use embedded_hal::delay::DelayNs;
use gantry_hal::MicrosDelay;

/// [`MicrosDelay`] backed by an embedded-hal [`DelayNs`] provider
#[derive(Debug)]
pub struct EhDelay<D> {
    inner: D,
}

impl<D: DelayNs> EhDelay<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: DelayNs> MicrosDelay for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.inner.delay_us(us);
    }
}
