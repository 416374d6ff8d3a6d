use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the big-picture-volume binary.
///
/// Only the tray chrome can fail in a way worth reporting; everything
/// else in this program (enumeration, registry, helper launch) degrades
/// to a logged no-op by design.
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to build or update the tray icon and its menu.
    #[error("Tray error: {reason} {location}")]
    Tray {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
