//! Win32 implementations of the platform seams.

use std::panic::Location;

use big_picture_volume_core::{ActivityProbe, CoreResult, StartupStore, StoreError};
use error_location::ErrorLocation;
use tracing::trace;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, TRUE};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible,
};
use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, KEY_QUERY_VALUE, KEY_SET_VALUE};

/// Registry path of the per-user launch-at-login area.
const RUN_KEY_PATH: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";

/// Reads titles of visible top-level windows from the live desktop.
pub struct WindowTitleProbe;

impl WindowTitleProbe {
    /// Probe over the current desktop session.
    pub fn new() -> Self {
        Self
    }
}

// EnumWindows stops when the callback returns FALSE; the callback always
// returns TRUE so one unreadable window never ends the sweep.
unsafe extern "system" fn collect_title(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let titles = unsafe { &mut *(lparam.0 as *mut Vec<String>) };

    if !unsafe { IsWindowVisible(hwnd) }.as_bool() {
        return TRUE;
    }

    let len = unsafe { GetWindowTextLengthW(hwnd) };
    if len > 0 {
        let mut buffer = vec![0u16; (len + 1) as usize];
        let copied = unsafe { GetWindowTextW(hwnd, &mut buffer) };
        if copied > 0 {
            titles.push(String::from_utf16_lossy(&buffer[..copied as usize]));
        }
    }

    TRUE
}

impl ActivityProbe for WindowTitleProbe {
    fn window_titles(&mut self) -> Vec<String> {
        let mut titles: Vec<String> = Vec::new();

        let result = unsafe {
            EnumWindows(
                Some(collect_title),
                LPARAM(&mut titles as *mut Vec<String> as isize),
            )
        };
        if let Err(e) = result {
            trace!(error = %e, "Window enumeration ended early");
        }

        titles
    }
}

/// Startup-preference store backed by the HKCU Run key.
///
/// Every operation opens the key fresh; a missing or access-denied key
/// surfaces as `None` reads and rejected writes, which the preference
/// layer swallows.
pub struct RunKeyStore;

impl RunKeyStore {
    /// Store over the current user's Run key.
    pub fn new() -> Self {
        Self
    }

    fn open_read() -> Option<RegKey> {
        RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey(RUN_KEY_PATH)
            .ok()
    }

    #[track_caller]
    fn open_write() -> CoreResult<RegKey> {
        RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey_with_flags(RUN_KEY_PATH, KEY_QUERY_VALUE | KEY_SET_VALUE)
            .map_err(|e| StoreError::WriteRejected {
                reason: format!("Run key not writable: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl StartupStore for RunKeyStore {
    fn string_value(&self, name: &str) -> Option<String> {
        Self::open_read()?.get_value(name).ok()
    }

    fn flag_value(&self, name: &str) -> Option<u32> {
        Self::open_read()?.get_value(name).ok()
    }

    #[track_caller]
    fn set_string(&mut self, name: &str, value: &str) -> CoreResult<()> {
        Self::open_write()?
            .set_value(name, &value)
            .map_err(|e| StoreError::WriteRejected {
                reason: format!("Value {name} not written: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn set_flag(&mut self, name: &str, value: u32) -> CoreResult<()> {
        Self::open_write()?
            .set_value(name, &value)
            .map_err(|e| StoreError::WriteRejected {
                reason: format!("Value {name} not written: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn delete_value(&mut self, name: &str) -> CoreResult<()> {
        Self::open_write()?
            .delete_value(name)
            .map_err(|e| StoreError::WriteRejected {
                reason: format!("Value {name} not deleted: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
