//! Per-move motion parameters handed to the planner

use bitflags::bitflags;

bitflags! {
    /// Planner condition flags (grbl `PL_COND_FLAG_*` bit layout)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConditionFlags: u8 {
        /// Rapid (G0) motion, runs at the axis max rates
        const RAPID_MOTION     = 1 << 0;
        /// Motion issued by the system (homing, parking), not by the program
        const SYSTEM_MOTION    = 1 << 1;
        /// Feed-rate override percentage is not applied
        const NO_FEED_OVERRIDE = 1 << 2;
        /// Feed rate is inverse time (G93)
        const INVERSE_TIME     = 1 << 3;
        const SPINDLE_CW       = 1 << 4;
        const SPINDLE_CCW      = 1 << 5;
        const COOLANT_FLOOD    = 1 << 6;
        const COOLANT_MIST     = 1 << 7;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConditionFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ConditionFlags({=u8:#04x})", self.bits())
    }
}

impl ConditionFlags {
    /// Spindle and coolant bits, which stay live during a jog
    pub const ACCESSORY_MASK: Self = Self::from_bits_truncate(
        Self::SPINDLE_CW.bits()
            | Self::SPINDLE_CCW.bits()
            | Self::COOLANT_FLOOD.bits()
            | Self::COOLANT_MIST.bits(),
    );
}

/// Motion parameters for a single planned line
///
/// Filled by the caller with the modal spindle/coolant state, then completed
/// by the jog executor before being handed to the execution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionParameters {
    /// Feed rate in distance units per minute
    pub feed_rate: f32,
    /// Spindle speed carried through to the planner
    pub spindle_speed: f32,
    /// Condition flags
    pub condition: ConditionFlags,
    /// Source line number, if line numbering is enabled
    pub line_number: Option<i32>,
}

impl MotionParameters {
    /// Check if feed override must be bypassed for this motion
    pub fn ignores_feed_override(&self) -> bool {
        self.condition.contains(ConditionFlags::NO_FEED_OVERRIDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_bit_layout() {
        assert_eq!(ConditionFlags::RAPID_MOTION.bits(), 0x01);
        assert_eq!(ConditionFlags::NO_FEED_OVERRIDE.bits(), 0x04);
        assert_eq!(ConditionFlags::COOLANT_MIST.bits(), 0x80);
        assert_eq!(ConditionFlags::ACCESSORY_MASK.bits(), 0xF0);
    }

    #[test]
    fn test_default_parameters() {
        let pl_data = MotionParameters::default();
        assert_eq!(pl_data.feed_rate, 0.0);
        assert!(pl_data.condition.is_empty());
        assert!(pl_data.line_number.is_none());
        assert!(!pl_data.ignores_feed_override());
    }
}
