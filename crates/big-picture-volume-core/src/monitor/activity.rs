/// Source of live top-level window titles.
///
/// Implementations read the OS snapshot at call time and never cache.
/// Items that cannot be read (a window vanished mid-enumeration, access
/// denied) are simply omitted from the result; one bad item must never
/// abort the whole sweep.
pub trait ActivityProbe {
    /// Titles of the windows currently on screen.
    fn window_titles(&mut self) -> Vec<String>;
}

/// Derives the activity signal from the live window list.
pub struct ActivityMonitor<P> {
    probe: P,
    target_title: String,
}

impl<P: ActivityProbe> ActivityMonitor<P> {
    /// Monitor for windows whose title contains `target_title`.
    pub fn new(probe: P, target_title: impl Into<String>) -> Self {
        Self {
            probe,
            target_title: target_title.into(),
        }
    }

    /// True iff at least one live window title contains the target
    /// substring. The match is case-sensitive; an empty window list
    /// yields `false`.
    pub fn poll(&mut self) -> bool {
        self.probe
            .window_titles()
            .iter()
            .any(|title| title.contains(self.target_title.as_str()))
    }
}
