//! Mock hardware for host testing
//!
//! Always compiled so downstream crates can use them from their own
//! `#[cfg(test)]` modules without a feature flag.

use crate::delay::MicrosDelay;
use crate::gpio::{Level, OutputPin};

/// Output pin that records every edge driven onto it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockPin {
    level: Level,
    rising: u32,
    falling: u32,
    writes: u32,
}

impl Default for MockPin {
    fn default() -> Self {
        Self::new(Level::Low)
    }
}

impl MockPin {
    /// Create a pin resting at `level`
    pub const fn new(level: Level) -> Self {
        Self {
            level,
            rising: 0,
            falling: 0,
            writes: 0,
        }
    }

    /// Number of low-to-high transitions
    pub fn rising_edges(&self) -> u32 {
        self.rising
    }

    /// Number of high-to-low transitions
    pub fn falling_edges(&self) -> u32 {
        self.falling
    }

    /// Total level changes
    pub fn transitions(&self) -> u32 {
        self.rising + self.falling
    }

    /// Number of writes, including ones that did not change the level
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// True if the pin was never written
    pub fn untouched(&self) -> bool {
        self.writes == 0
    }
}

impl OutputPin for MockPin {
    fn write(&mut self, level: Level) {
        self.writes += 1;
        match (self.level, level) {
            (Level::Low, Level::High) => self.rising += 1,
            (Level::High, Level::Low) => self.falling += 1,
            _ => {}
        }
        self.level = level;
    }

    fn level(&self) -> Level {
        self.level
    }
}

/// Virtual clock standing in for a busy-wait delay
///
/// Time only advances when [`MicrosDelay::delay_us`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockDelay {
    elapsed_us: u64,
    calls: u32,
    shortest_us: Option<u32>,
    longest_us: Option<u32>,
}

impl MockDelay {
    pub const fn new() -> Self {
        Self {
            elapsed_us: 0,
            calls: 0,
            shortest_us: None,
            longest_us: None,
        }
    }

    /// Total virtual time spent waiting
    pub fn elapsed_us(&self) -> u64 {
        self.elapsed_us
    }

    /// Number of waits requested
    pub fn calls(&self) -> u32 {
        self.calls
    }

    /// Shortest single wait, if any
    pub fn shortest_us(&self) -> Option<u32> {
        self.shortest_us
    }

    /// Longest single wait, if any
    pub fn longest_us(&self) -> Option<u32> {
        self.longest_us
    }
}

impl MicrosDelay for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.elapsed_us += u64::from(us);
        self.calls += 1;
        self.shortest_us = Some(self.shortest_us.map_or(us, |s| s.min(us)));
        self.longest_us = Some(self.longest_us.map_or(us, |l| l.max(us)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pin_counts_edges() {
        let mut pin = MockPin::default();
        assert!(pin.untouched());

        pin.toggle();
        pin.toggle();
        pin.toggle();

        assert_eq!(pin.rising_edges(), 2);
        assert_eq!(pin.falling_edges(), 1);
        assert_eq!(pin.transitions(), 3);
        assert!(pin.is_set_high());
    }

    #[test]
    fn test_mock_pin_redundant_write() {
        let mut pin = MockPin::new(Level::High);
        pin.write(Level::High);

        assert_eq!(pin.writes(), 1);
        assert_eq!(pin.transitions(), 0);
        assert!(!pin.untouched());
    }

    #[test]
    fn test_mock_delay_accumulates() {
        let mut delay = MockDelay::new();
        assert_eq!(delay.shortest_us(), None);

        delay.delay_us(250);
        delay.delay_us(100);
        delay.delay_us(400);

        assert_eq!(delay.calls(), 3);
        assert_eq!(delay.elapsed_us(), 750);
        assert_eq!(delay.shortest_us(), Some(100));
        assert_eq!(delay.longest_us(), Some(400));
    }

    #[test]
    fn test_delay_through_reference() {
        fn wait<D: MicrosDelay>(mut delay: D) {
            delay.delay_us(10);
        }

        let mut delay = MockDelay::new();
        wait(&mut delay);
        assert_eq!(delay.elapsed_us(), 10);
    }
}
