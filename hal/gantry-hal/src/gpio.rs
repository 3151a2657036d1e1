//! Discrete output abstractions
//!
//! Step, direction and enable lines are plain push-pull outputs. The core
//! only ever drives them and reads back what it drove, so there is no input
//! side here.

/// Logic level of a discrete output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// The other level
    pub fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    /// Flip the level when `invert` is set
    ///
    /// Used for active-low enable lines configured through settings.
    pub fn inverted_if(self, invert: bool) -> Self {
        if invert {
            self.toggled()
        } else {
            self
        }
    }

    /// Level from a boolean (`true` = high)
    pub fn from_high(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }

    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

/// Digital output pin
///
/// Implementations write the hardware register directly; writes must take
/// effect before the call returns since step timing is derived from the
/// delay that follows.
pub trait OutputPin {
    /// Drive the pin to `level`
    fn write(&mut self, level: Level);

    /// Level the pin is currently driven to
    fn level(&self) -> Level;

    /// Invert the driven level
    fn toggle(&mut self) {
        let next = self.level().toggled();
        self.write(next);
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool {
        self.level().is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_toggle() {
        assert_eq!(Level::Low.toggled(), Level::High);
        assert_eq!(Level::High.toggled(), Level::Low);
    }

    #[test]
    fn test_level_inversion() {
        assert_eq!(Level::Low.inverted_if(false), Level::Low);
        assert_eq!(Level::Low.inverted_if(true), Level::High);
        assert_eq!(Level::High.inverted_if(true), Level::Low);
    }

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from_high(true), Level::High);
        assert_eq!(Level::from_high(false), Level::Low);
        assert!(Level::High.is_high());
        assert!(!Level::Low.is_high());
    }
}
