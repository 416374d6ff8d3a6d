use crate::platform::{RunKeyStore, WindowTitleProbe};
use crate::tray_manager::{ATTRIBUTION_URL, DONATE_URL};
use crate::{TrayCommand, VolumeHelper};

use std::time::Duration;

use big_picture_volume_core::{
    ActivityMonitor, StartupPreference, TARGET_PROCESS, VolumeController,
};
use tao::event_loop::EventLoopProxy;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, instrument, warn};
use tray_icon::menu::{MenuEvent, MenuId};

/// How often the live window list is inspected.
const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Main application state.
///
/// Runs on the async runtime thread and owns the polling loop: one
/// interval tick reads the activity signal, feeds the controller, and on
/// a transition launches the helper and refreshes the tray. Tray updates
/// go back to the main thread through `tray_proxy` because `TrayIcon` is
/// `!Send` and must remain on the UI thread.
pub struct App {
    pub(crate) monitor: ActivityMonitor<WindowTitleProbe>,
    pub(crate) controller: VolumeController,
    pub(crate) helper: VolumeHelper,
    pub(crate) startup: StartupPreference<RunKeyStore>,
    pub(crate) startup_enabled: bool,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) attribution_item_id: MenuId,
    pub(crate) donate_item_id: MenuId,
    pub(crate) startup_item_id: MenuId,
    pub(crate) exit_item_id: MenuId,
}

impl App {
    /// Run the polling loop until the user exits from the tray menu.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) {
        info!("Big Picture Volume starting");

        // Menu event forwarding via single persistent blocking task.
        //
        // MenuEvent::receiver() returns a crossbeam_channel::Receiver which
        // HAS blocking recv() -- zero polling, instant response, one thread.
        //
        // Shutdown: when menu_rx is dropped (main loop breaks),
        // menu_tx.blocking_send() fails, breaking the blocking loop.
        let (menu_tx, mut menu_rx) = mpsc::channel(32);
        let forwarder = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        // An overrunning tick must not burst-replay afterwards; later
        // ticks simply shift. One task, so ticks never overlap either.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.on_tick();
                }

                Some(event) = menu_rx.recv() => {
                    if self.handle_menu_event(event) {
                        break;
                    }
                }

                else => {
                    info!("Menu channel closed, shutting down");
                    break;
                }
            }
        }

        drop(menu_rx);

        match tokio::time::timeout(Duration::from_secs(1), forwarder).await {
            Ok(Ok(())) => info!("Menu event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Menu event forwarder task panicked"),
            Err(_) => info!(
                "Menu event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        info!("Big Picture Volume shut down");
    }

    /// One polling cycle: read the activity signal, apply any transition.
    ///
    /// The controller decides first, then the side effects run, so the
    /// state advances even when the helper binary is absent.
    fn on_tick(&mut self) {
        let active = self.monitor.poll();

        if let Some(level) = self.controller.observe(active) {
            let launched = self.helper.set_app_volume(TARGET_PROCESS, level);
            info!(active, state = ?self.controller.state(), launched, "Volume state changed");

            if self
                .tray_proxy
                .send_event(TrayCommand::SetState(self.controller.state()))
                .is_err()
            {
                warn!("Event loop gone, tray status not updated");
            }
        }
    }

    /// Handle one tray menu event. Returns true when the app should exit.
    #[instrument(skip(self, event))]
    fn handle_menu_event(&mut self, event: MenuEvent) -> bool {
        let event_id = &event.id;

        if *event_id == self.attribution_item_id {
            let _ = open::that(ATTRIBUTION_URL);
            false
        } else if *event_id == self.donate_item_id {
            let _ = open::that(DONATE_URL);
            false
        } else if *event_id == self.startup_item_id {
            self.toggle_startup();
            false
        } else if *event_id == self.exit_item_id {
            info!("Exit requested from tray menu");
            let _ = self.tray_proxy.send_event(TrayCommand::Shutdown);
            true
        } else {
            false
        }
    }

    /// Flip the launch-at-login preference.
    ///
    /// The check item has already toggled itself in the menu, so the
    /// tracked flag flips unconditionally; a failed registry write only
    /// means the persisted side stays where it was (and is logged).
    fn toggle_startup(&mut self) {
        if self.startup_enabled {
            self.startup.disable();
            self.startup_enabled = false;
            return;
        }

        match std::env::current_exe() {
            Ok(exe) => self.startup.enable(exe.to_string_lossy().as_ref()),
            Err(e) => warn!(error = %e, "Executable path unavailable, preference not persisted"),
        }
        self.startup_enabled = true;
    }
}
