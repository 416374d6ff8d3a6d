//! Big Picture Volume: tray utility that unmutes the target application
//! while Steam Big Picture Mode is on screen and mutes it otherwise.
#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

mod app;
mod error;
mod platform;
mod tray_command;
mod tray_manager;
mod volume_helper;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    tray_command::TrayCommand,
    tray_manager::TrayManager,
    volume_helper::VolumeHelper,
};

use crate::platform::{RunKeyStore, WindowTitleProbe};

use big_picture_volume_core::{
    ActivityMonitor, StartupPreference, TARGET_WINDOW_TITLE, VolumeController,
};
use tao::{
    event::Event,
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tracing::error;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("big_picture_volume=debug")
        .init();

    // Self-heal the registered path before any other startup logic runs:
    // the binary may have moved since "Run on Startup" was last toggled.
    let mut startup = StartupPreference::new(RunKeyStore::new());
    if let Ok(exe) = std::env::current_exe() {
        startup.reconcile_path(exe.to_string_lossy().as_ref());
    }
    let startup_enabled = startup.is_enabled();

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // TrayManager lives on the main thread - TrayIcon is !Send on all platforms.
    let mut tray_manager = match TrayManager::new(startup_enabled) {
        Ok(tm) => tm,
        Err(e) => {
            error!("Failed to create TrayManager: {:?}", e);
            std::process::exit(1);
        }
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::SetState(state) => {
                    if let Err(e) = tray_manager.update_state(state) {
                        error!(error = ?e, "Failed to update tray status");
                    }
                }
                TrayCommand::Shutdown => {
                    // The polling loop already stopped before sending this;
                    // hide the icon, then end the process.
                    tray_manager.hide();
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(tao::event::StartCause::Init) => {
                let tray_proxy = tray_proxy.clone();
                let attribution_item_id = tray_manager.attribution_item_id().clone();
                let donate_item_id = tray_manager.donate_item_id().clone();
                let startup_item_id = tray_manager.startup_item_id().clone();
                let exit_item_id = tray_manager.exit_item_id().clone();

                // Spawn tokio runtime on a separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        let app = App {
                            monitor: ActivityMonitor::new(
                                WindowTitleProbe::new(),
                                TARGET_WINDOW_TITLE,
                            ),
                            controller: VolumeController::new(),
                            helper: VolumeHelper::beside_executable(),
                            startup: StartupPreference::new(RunKeyStore::new()),
                            startup_enabled,
                            tray_proxy,
                            attribution_item_id,
                            donate_item_id,
                            startup_item_id,
                            exit_item_id,
                        };

                        app.run().await;
                    });
                });
            }
            _ => {}
        }
    });
}
