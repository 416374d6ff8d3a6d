//! Launch-at-login preference.
//!
//! Two values under the per-user Run area: the quote-wrapped executable
//! path and an integer flag. Every store failure is swallowed here: a
//! read-only or missing store means "feature disabled" on reads and
//! "no effect" on writes, never an error surfaced to the UI.

use crate::StartupStore;

use tracing::{debug, info, warn};

/// Name of the value holding the quote-wrapped executable path.
pub const RUN_VALUE_NAME: &str = "SteamBigPictureVolume";

/// Name of the integer flag value (`1` = enabled).
pub const RUN_FLAG_NAME: &str = "SteamBigPictureVolumeEnabled";

/// Manages the persisted launch-at-login preference.
pub struct StartupPreference<S> {
    store: S,
}

impl<S: StartupStore> StartupPreference<S> {
    /// Preference backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the preference is currently enabled.
    ///
    /// An absent key, absent value, or read failure all read as `false`.
    pub fn is_enabled(&self) -> bool {
        self.store.flag_value(RUN_FLAG_NAME) == Some(1)
    }

    /// Persist the preference: quote-wrapped `exe_path` plus flag `1`.
    ///
    /// Idempotent; failures are logged and swallowed.
    pub fn enable(&mut self, exe_path: &str) {
        let value = quoted(exe_path);

        if let Err(e) = self.store.set_string(RUN_VALUE_NAME, &value) {
            warn!(error = %e, "Could not persist startup path");
            return;
        }

        if let Err(e) = self.store.set_flag(RUN_FLAG_NAME, 1) {
            warn!(error = %e, "Could not persist startup flag");
            return;
        }

        info!(path = %value, "Run on startup enabled");
    }

    /// Remove both persisted values. Failures are swallowed.
    pub fn disable(&mut self) {
        if let Err(e) = self.store.delete_value(RUN_VALUE_NAME) {
            debug!(error = %e, "Startup path value not deleted");
        }

        if let Err(e) = self.store.delete_value(RUN_FLAG_NAME) {
            debug!(error = %e, "Startup flag value not deleted");
        }

        info!("Run on startup disabled");
    }

    /// Re-point the stored path at the current executable.
    ///
    /// Runs once at process start, before any other startup logic: when
    /// the preference is enabled but the stored path differs from the
    /// running executable (the binary moved since the preference was set),
    /// the path value is rewritten. The comparison ignores ASCII case, so
    /// a case-only difference is a no-op; the flag is never touched.
    pub fn reconcile_path(&mut self, exe_path: &str) {
        if !self.is_enabled() {
            return;
        }

        let expected = quoted(exe_path);
        let stored = self.store.string_value(RUN_VALUE_NAME);

        if stored
            .as_deref()
            .is_some_and(|current| current.eq_ignore_ascii_case(&expected))
        {
            return;
        }

        match self.store.set_string(RUN_VALUE_NAME, &expected) {
            Ok(()) => info!(stored = ?stored, path = %expected, "Startup path reconciled"),
            Err(e) => warn!(error = %e, "Could not reconcile startup path"),
        }
    }
}

fn quoted(path: &str) -> String {
    format!("\"{path}\"")
}
