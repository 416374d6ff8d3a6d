use error_location::ErrorLocation;
use thiserror::Error;

/// Startup-preference store errors with source location tracking.
///
/// These never bubble past [`crate::StartupPreference`] (every store
/// failure is logged and treated as a no-op for that operation), but the
/// store trait still reports them so callers can tell "wrote nothing"
/// from "wrote successfully".
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store rejected a write or delete.
    #[error("Store write failed: {reason} {location}")]
    WriteRejected {
        /// Description of the failure from the backing store.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No backing store exists on this platform.
    #[error("Store unavailable on this platform {location}")]
    Unavailable {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
