//! Shell surface: overlay and screenshot handlers plus pass-throughs.

use super::Bridge;
use crate::domain::event::{OverlayActivated, ScreenshotReady};
use crate::domain::{AppId, LobbyId, OverlayPosition, ScreenshotHandle, UserId};
use crate::facade::PlatformFacade;

impl<F: PlatformFacade> Bridge<F> {
    /// Registers the handler for overlay open/close broadcasts.
    pub fn set_overlay_activated_handler(
        &mut self,
        handler: impl FnMut(OverlayActivated) + 'static,
    ) {
        self.shell.overlay_activated.set(handler);
    }

    /// Clears the overlay handler.
    pub fn clear_overlay_activated_handler(&mut self) {
        self.shell.overlay_activated.clear();
    }

    /// Registers the handler for screenshot-ready broadcasts.
    pub fn set_screenshot_ready_handler(
        &mut self,
        handler: impl FnMut(ScreenshotReady) + 'static,
    ) {
        self.shell.screenshot_ready.set(handler);
    }

    /// Clears the screenshot handler.
    pub fn clear_screenshot_ready_handler(&mut self) {
        self.shell.screenshot_ready.clear();
    }

    /// Opens the platform overlay on a named dialog.
    pub fn activate_overlay(&mut self, dialog: &str) {
        if let Some(facade) = self.facade.as_mut() {
            facade.activate_overlay(dialog);
        }
    }

    /// Opens an overlay dialog targeting another user.
    pub fn activate_overlay_to_user(&mut self, dialog: &str, user: UserId) {
        if let Some(facade) = self.facade.as_mut() {
            facade.activate_overlay_to_user(dialog, user);
        }
    }

    /// Opens the overlay web browser at a URL.
    pub fn activate_overlay_to_web_page(&mut self, url: &str) {
        if let Some(facade) = self.facade.as_mut() {
            facade.activate_overlay_to_web_page(url);
        }
    }

    /// Opens the overlay store page for an application.
    pub fn activate_overlay_to_store(&mut self, app: AppId) {
        if let Some(facade) = self.facade.as_mut() {
            facade.activate_overlay_to_store(app);
        }
    }

    /// Opens the overlay invite dialog for a lobby.
    pub fn activate_overlay_invite_dialog(&mut self, lobby: LobbyId) {
        if let Some(facade) = self.facade.as_mut() {
            facade.activate_overlay_invite_dialog(lobby);
        }
    }

    /// `true` when the overlay is enabled for this process.
    pub fn overlay_enabled(&self) -> bool {
        self.facade
            .as_ref()
            .is_some_and(PlatformFacade::overlay_enabled)
    }

    /// Moves notification pop-ups to a screen corner.
    pub fn set_notification_position(&mut self, position: OverlayPosition) {
        if let Some(facade) = self.facade.as_mut() {
            facade.set_notification_position(position.raw());
        }
    }

    /// Asks the platform to capture a screenshot next frame; the capture
    /// surfaces at the screenshot handler.
    pub fn trigger_screenshot(&mut self) {
        if let Some(facade) = self.facade.as_mut() {
            facade.trigger_screenshot();
        }
    }

    /// Tags a captured screenshot with an in-game location string.
    pub fn set_screenshot_location(
        &mut self,
        screenshot: ScreenshotHandle,
        location: &str,
    ) -> bool {
        self.facade
            .as_mut()
            .is_some_and(|facade| facade.set_screenshot_location(screenshot, location))
    }
}
