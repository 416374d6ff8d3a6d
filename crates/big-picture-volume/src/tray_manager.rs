//! Notification-area icon and context menu.
//!
//! The menu carries a disabled title line, a live status line updated on
//! every volume transition, two external links, the "Run on Startup"
//! toggle and Exit. Icon loading can never fail the app: a broken
//! embedded asset falls back to a generated placeholder, and a tray
//! without any icon is still accepted.

use crate::{AppError, AppResult};

use std::panic::Location;

use big_picture_volume_core::VolumeState;
use error_location::ErrorLocation;
use tracing::{info, instrument, warn};
use tray_icon::menu::{CheckMenuItem, IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const APP_TITLE: &str = "Big Picture Volume Monitor v.1";
const TOOLTIP_BASE: &str = "Steam Big Picture Volume";

pub(crate) const ATTRIBUTION_LABEL: &str = "Made by @WooCash95";
pub(crate) const ATTRIBUTION_URL: &str = "https://x.com/woocash95";
pub(crate) const DONATE_LABEL: &str = "Get dev a beer - Thanks!";
pub(crate) const DONATE_URL: &str = "https://paypal.me/lmoczulski";

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    status_item: MenuItem,
    attribution_item_id: MenuId,
    donate_item_id: MenuId,
    startup_item_id: MenuId,
    exit_item_id: MenuId,
}

impl TrayManager {
    /// Build the tray icon with its full context menu.
    ///
    /// `startup_checked` seeds the "Run on Startup" check state from the
    /// persisted preference; afterwards the item tracks user clicks on
    /// its own.
    #[track_caller]
    #[instrument]
    pub fn new(startup_checked: bool) -> AppResult<Self> {
        let menu = Menu::new();

        let title_item = MenuItem::new(APP_TITLE, false, None);
        let status_item = MenuItem::new(Self::status_text(VolumeState::Unknown), false, None);
        let attribution_item = MenuItem::new(ATTRIBUTION_LABEL, true, None);
        let donate_item = MenuItem::new(DONATE_LABEL, true, None);
        let startup_item = CheckMenuItem::new("Run on Startup", true, startup_checked, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let attribution_id = attribution_item.id().clone();
        let donate_id = donate_item.id().clone();
        let startup_id = startup_item.id().clone();
        let exit_id = exit_item.id().clone();

        Self::append(&menu, &title_item)?;
        Self::append(&menu, &status_item)?;
        Self::append(&menu, &attribution_item)?;
        Self::append(&menu, &donate_item)?;
        Self::append(&menu, &PredefinedMenuItem::separator())?;
        Self::append(&menu, &startup_item)?;
        Self::append(&menu, &PredefinedMenuItem::separator())?;
        Self::append(&menu, &exit_item)?;

        let mut builder = TrayIconBuilder::new()
            .with_tooltip(TOOLTIP_BASE)
            .with_menu(Box::new(menu));

        if let Some(icon) = Self::load_icon() {
            builder = builder.with_icon(icon);
        }

        let tray_icon = builder.build().map_err(|e| AppError::Tray {
            reason: format!("Failed to create tray icon: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            status_item,
            attribution_item_id: attribution_id,
            donate_item_id: donate_id,
            startup_item_id: startup_id,
            exit_item_id: exit_id,
        })
    }

    /// Refresh the status menu line and the tooltip for a new state.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_state(&mut self, state: VolumeState) -> AppResult<()> {
        self.status_item.set_text(Self::status_text(state));

        let tooltip = match state {
            VolumeState::Unknown => TOOLTIP_BASE.to_string(),
            VolumeState::On => format!("{TOOLTIP_BASE} - ON"),
            VolumeState::Off => format!("{TOOLTIP_BASE} - OFF"),
        };

        self.tray_icon
            .set_tooltip(Some(tooltip.as_str()))
            .map_err(|e| AppError::Tray {
                reason: format!("Failed to update tooltip: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Remove the icon from the notification area ahead of process exit.
    pub fn hide(&self) {
        let _ = self.tray_icon.set_visible(false);
    }

    fn status_text(state: VolumeState) -> &'static str {
        match state {
            VolumeState::Unknown => "State: Unknown",
            VolumeState::On => "State: ON",
            VolumeState::Off => "State: OFF",
        }
    }

    #[track_caller]
    fn append(menu: &Menu, item: &dyn IsMenuItem) -> AppResult<()> {
        menu.append(item).map_err(|e| AppError::Tray {
            reason: format!("Failed to add menu item: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Decode the compile-time embedded PNG, falling back to a generated
    /// placeholder so a bad asset never takes the tray down.
    fn load_icon() -> Option<Icon> {
        let png_bytes: &[u8] = include_bytes!("../resources/icons/app.png");

        match image::load_from_memory(png_bytes) {
            Ok(img) => {
                let rgba = img.into_rgba8();
                let (width, height) = (rgba.width(), rgba.height());
                Icon::from_rgba(rgba.into_raw(), width, height)
                    .ok()
                    .or_else(Self::fallback_icon)
            }
            Err(e) => {
                warn!(error = %e, "Embedded icon did not decode, using placeholder");
                Self::fallback_icon()
            }
        }
    }

    fn fallback_icon() -> Option<Icon> {
        const SIZE: u32 = 32;

        let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
        for y in 0..SIZE {
            for x in 0..SIZE {
                let border = x < 2 || y < 2 || x >= SIZE - 2 || y >= SIZE - 2;
                let pixel: [u8; 4] = if border {
                    [235, 237, 240, 255]
                } else {
                    [30, 32, 38, 255]
                };
                rgba.extend_from_slice(&pixel);
            }
        }

        Icon::from_rgba(rgba, SIZE, SIZE).ok()
    }

    /// Get the attribution link menu item ID.
    pub fn attribution_item_id(&self) -> &MenuId {
        &self.attribution_item_id
    }

    /// Get the donation link menu item ID.
    pub fn donate_item_id(&self) -> &MenuId {
        &self.donate_item_id
    }

    /// Get the "Run on Startup" menu item ID.
    pub fn startup_item_id(&self) -> &MenuId {
        &self.startup_item_id
    }

    /// Get the exit menu item ID.
    pub fn exit_item_id(&self) -> &MenuId {
        &self.exit_item_id
    }
}
