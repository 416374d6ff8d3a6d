/// Last volume level known to be applied to the target application.
///
/// A single instance lives for the whole process, owned by
/// [`crate::VolumeController`]. `Unknown` is the initial value and is
/// never re-entered once a reading has been observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeState {
    /// No reading observed yet.
    Unknown,
    /// Target application volume was last set to maximum.
    On,
    /// Target application volume was last set to mute.
    Off,
}

impl VolumeState {
    /// Whether this state already encodes the given activity reading
    /// (`On`⇔true, `Off`⇔false). `Unknown` encodes neither.
    pub(crate) fn encodes(self, active: bool) -> bool {
        matches!(
            (self, active),
            (VolumeState::On, true) | (VolumeState::Off, false)
        )
    }
}

/// Volume magnitude passed to the external helper on a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    /// Full volume for the target application.
    Max,
    /// Muted target application.
    Mute,
}

impl VolumeLevel {
    /// Normalized magnitude in `[0.0, 1.0]`.
    pub fn magnitude(self) -> f64 {
        match self {
            VolumeLevel::Max => 1.0,
            VolumeLevel::Mute => 0.0,
        }
    }

    /// Helper command argument: fixed-point with exactly one decimal digit.
    pub fn argument(self) -> String {
        format!("{:.1}", self.magnitude())
    }
}
