//! Configuration types
//!
//! Machine settings read by the jog path, and their persisted form stored as
//! postcard binary data.

pub mod settings;
#[cfg(feature = "serde")]
pub mod store;

pub use settings::*;
#[cfg(feature = "serde")]
pub use store::{StoredSettings, SETTINGS_MAGIC, SETTINGS_VERSION};
