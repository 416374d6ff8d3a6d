//! Fire-and-forget invocation of the NirCmd volume helper.
//!
//! The helper is spawned directly (no shell, no visible window) and never
//! awaited: each launch is near-instantaneous to issue and there is no
//! output worth capturing. A missing helper binary skips the launch
//! silently; the caller's state machine advances regardless.

use std::path::PathBuf;
use std::process::Command;

use big_picture_volume_core::VolumeLevel;
use tracing::{debug, warn};

/// File name of the helper expected next to the running executable.
const HELPER_FILE: &str = "nircmd.exe";

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Launcher for `nircmd setappvolume` invocations.
pub struct VolumeHelper {
    helper_path: PathBuf,
}

impl VolumeHelper {
    /// Helper at an explicit location.
    pub fn new(helper_path: PathBuf) -> Self {
        Self { helper_path }
    }

    /// Helper resolved as a sibling file of the running executable.
    pub fn beside_executable() -> Self {
        let helper_path = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(HELPER_FILE)))
            .unwrap_or_else(|| PathBuf::from(HELPER_FILE));

        Self::new(helper_path)
    }

    /// Spawn `<helper> setappvolume <process> <level>`.
    ///
    /// Returns whether a launch was actually issued. Both failure modes
    /// (helper absent, spawn error) are swallowed; no error ever reaches
    /// the polling loop.
    pub fn set_app_volume(&self, process: &str, level: VolumeLevel) -> bool {
        if !self.helper_path.exists() {
            debug!(path = ?self.helper_path, "Volume helper not present, skipping launch");
            return false;
        }

        let argument = level.argument();
        let mut command = Command::new(&self.helper_path);
        command.args(["setappvolume", process, argument.as_str()]);

        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        match command.spawn() {
            Ok(_child) => {
                debug!(process, volume = %argument, "Volume helper launched");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to launch volume helper");
                false
            }
        }
    }
}
