//! OS-facing collaborators: the live window list and the per-user Run key.
//!
//! Non-Windows builds get inert stand-ins (no windows, no store) so the
//! workspace compiles everywhere; the decision logic they feed lives in
//! the core crate and is platform-free.

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use windows::{RunKeyStore, WindowTitleProbe};

#[cfg(not(target_os = "windows"))]
mod unsupported;
#[cfg(not(target_os = "windows"))]
pub use unsupported::{RunKeyStore, WindowTitleProbe};
