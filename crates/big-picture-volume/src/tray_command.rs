use big_picture_volume_core::VolumeState;

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`),
/// so all tray mutations and process lifecycle events flow through this
/// enum via the event loop proxy.
#[derive(Debug, Clone, Copy)]
pub enum TrayCommand {
    /// Refresh the status line and tooltip after a volume transition.
    SetState(VolumeState),
    /// Tear down the tray icon and exit the event loop.
    Shutdown,
}
