//! Status codes returned to the command layer
//!
//! Values match the grbl `error:N` numbering so the command layer can report
//! them verbatim.

/// Result of executing a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StatusCode {
    /// Command accepted
    Ok = 0,
    /// Target exceeds the machine travel envelope
    TravelExceeded = 15,
}

impl StatusCode {
    /// Get the code as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a status from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StatusCode::Ok),
            15 => Some(StatusCode::TravelExceeded),
            _ => None,
        }
    }

    pub fn is_ok(self) -> bool {
        self == StatusCode::Ok
    }
}
