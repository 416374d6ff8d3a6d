//! Inert platform stand-ins for targets without a Win32 desktop.
//!
//! The probe sees no windows (activity signal stays false) and the store
//! rejects every operation, which the preference layer reads as "feature
//! disabled".

use std::panic::Location;

use big_picture_volume_core::{ActivityProbe, CoreResult, StartupStore, StoreError};
use error_location::ErrorLocation;

/// Window probe for platforms without a window list.
pub struct WindowTitleProbe;

impl WindowTitleProbe {
    /// Probe that never reports a window.
    pub fn new() -> Self {
        Self
    }
}

impl ActivityProbe for WindowTitleProbe {
    fn window_titles(&mut self) -> Vec<String> {
        Vec::new()
    }
}

/// Startup store for platforms without a per-user Run key.
pub struct RunKeyStore;

impl RunKeyStore {
    /// Store whose operations all report unavailability.
    pub fn new() -> Self {
        Self
    }

    #[track_caller]
    fn unavailable() -> StoreError {
        StoreError::Unavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl StartupStore for RunKeyStore {
    fn string_value(&self, _name: &str) -> Option<String> {
        None
    }

    fn flag_value(&self, _name: &str) -> Option<u32> {
        None
    }

    #[track_caller]
    fn set_string(&mut self, _name: &str, _value: &str) -> CoreResult<()> {
        Err(Self::unavailable())
    }

    #[track_caller]
    fn set_flag(&mut self, _name: &str, _value: u32) -> CoreResult<()> {
        Err(Self::unavailable())
    }

    #[track_caller]
    fn delete_value(&mut self, _name: &str) -> CoreResult<()> {
        Err(Self::unavailable())
    }
}
