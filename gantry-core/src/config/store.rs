//! Persisted settings record
//!
//! Settings are written to non-volatile storage as a postcard-encoded record
//! with a magic number and a format version in front. The storage medium is
//! owned by the caller; this module only converts to and from bytes.

use serde::{Deserialize, Serialize};

use super::settings::{Settings, SettingsError};

/// Magic number identifying a settings record
pub const SETTINGS_MAGIC: u32 = 0x4A4F_4753; // "JOGS"

/// Current settings record version
pub const SETTINGS_VERSION: u8 = 1;

/// Settings as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSettings {
    /// Magic number for validation
    pub magic: u32,
    /// Record format version
    pub version: u8,
    /// Settings payload
    pub settings: Settings,
}

impl StoredSettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            settings,
        }
    }
}

impl Settings {
    /// Encode into `buffer`, returning the used prefix
    pub fn to_bytes<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], SettingsError> {
        postcard::to_slice(&StoredSettings::new(*self), buffer).map_err(|_| SettingsError::Encode)
    }

    /// Decode a stored record and validate its contents
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SettingsError> {
        let stored: StoredSettings =
            postcard::from_bytes(bytes).map_err(|_| SettingsError::Decode)?;

        if stored.magic != SETTINGS_MAGIC {
            return Err(SettingsError::BadMagic);
        }
        if stored.version != SETTINGS_VERSION {
            return Err(SettingsError::VersionMismatch);
        }

        if let Err(e) = stored.settings.validate() {
            warn!("stored settings rejected: {}", e);
            return Err(e);
        }

        Ok(stored.settings)
    }
}
