//! Debounced volume state machine.
//!
//! The transition decision is a pure function so the debounce property can
//! be tested without a timer, a tray icon, or a helper binary. Side effects
//! (helper launch, status text) are executed by the caller after the
//! decision.

use crate::{VolumeLevel, VolumeState};

use tracing::debug;

/// Pure transition function: current state plus one activity reading.
///
/// Returns the next state and, when the reading differs from what the
/// state encodes, the volume level to apply. Repeating the same reading
/// returns `None`; this is the debounce: at most one action per actual
/// signal change, never one per tick. From [`VolumeState::Unknown`] the
/// first reading always produces one normalizing action.
pub fn transition(state: VolumeState, active: bool) -> (VolumeState, Option<VolumeLevel>) {
    if state.encodes(active) {
        return (state, None);
    }

    if active {
        (VolumeState::On, Some(VolumeLevel::Max))
    } else {
        (VolumeState::Off, Some(VolumeLevel::Mute))
    }
}

/// Owner of the process-wide [`VolumeState`].
///
/// Exactly one instance exists and exactly one caller feeds it readings
/// (the polling loop), so no interior locking is needed.
#[derive(Debug)]
pub struct VolumeController {
    state: VolumeState,
}

impl VolumeController {
    /// Create a controller in the `Unknown` state.
    pub fn new() -> Self {
        Self {
            state: VolumeState::Unknown,
        }
    }

    /// Current state.
    pub fn state(&self) -> VolumeState {
        self.state
    }

    /// Feed one activity reading.
    ///
    /// Returns the volume level to apply when the reading caused a state
    /// transition. The state advances regardless of whether the caller
    /// manages to launch the helper; the debounce must stay consistent
    /// even when the helper binary is absent.
    pub fn observe(&mut self, active: bool) -> Option<VolumeLevel> {
        let (next, action) = transition(self.state, active);

        if let Some(level) = action {
            debug!(from = ?self.state, to = ?next, ?level, "Volume state transition");
        }

        self.state = next;
        action
    }
}

impl Default for VolumeController {
    fn default() -> Self {
        Self::new()
    }
}
