mod activity;
mod controller;
mod state;

pub use {
    activity::{ActivityMonitor, ActivityProbe},
    controller::{VolumeController, transition},
    state::{VolumeLevel, VolumeState},
};

/// Window title fragment that marks the target application as active.
pub const TARGET_WINDOW_TITLE: &str = "Steam Big Picture Mode";

/// Process whose audio session the external helper adjusts.
pub const TARGET_PROCESS: &str = "steamwebhelper.exe";
