//! Big Picture Volume core library.
//!
//! The activity signal, the debounced volume state machine, and the
//! launch-at-login preference, kept free of OS and UI dependencies so the
//! whole decision logic is unit-testable. The binary crate supplies the
//! live collaborators: a Win32 window-title probe, the HKCU Run key store,
//! and the NirCmd launcher.
//!
//! # Example
//!
//! ```no_run
//! use big_picture_volume_core::{ActivityMonitor, ActivityProbe, VolumeController};
//!
//! struct NoWindows;
//!
//! impl ActivityProbe for NoWindows {
//!     fn window_titles(&mut self) -> Vec<String> {
//!         Vec::new()
//!     }
//! }
//!
//! let mut monitor = ActivityMonitor::new(NoWindows, "Steam Big Picture Mode");
//! let mut controller = VolumeController::new();
//!
//! if let Some(level) = controller.observe(monitor.poll()) {
//!     println!("apply volume {}", level.argument());
//! }
//! ```

mod error;
mod monitor;
mod startup;

pub use {
    error::{Result as CoreResult, StoreError},
    monitor::{
        ActivityMonitor, ActivityProbe, TARGET_PROCESS, TARGET_WINDOW_TITLE, VolumeController,
        VolumeLevel, VolumeState, transition,
    },
    startup::{RUN_FLAG_NAME, RUN_VALUE_NAME, StartupPreference, StartupStore},
};

#[cfg(test)]
mod tests;
