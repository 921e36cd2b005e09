//! Utils surface: session, device, and gamepad text-input pass-throughs.

use super::Bridge;
use crate::domain::{AppId, TextInputMode, TextLineMode};
use crate::facade::PlatformFacade;

impl<F: PlatformFacade> Bridge<F> {
    /// Application identifier of the running title; zero when the facade
    /// is unavailable.
    pub fn app_id(&self) -> AppId {
        self.facade
            .as_ref()
            .map_or(AppId::new(0), PlatformFacade::app_id)
    }

    /// Remaining battery in percent, `255` on mains power; zero when the
    /// facade is unavailable.
    pub fn battery_power(&self) -> u8 {
        self.facade
            .as_ref()
            .map_or(0, PlatformFacade::battery_power)
    }

    /// Two-letter country code derived from the user's IP; empty when
    /// the facade is unavailable.
    pub fn ip_country(&self) -> String {
        self.facade
            .as_ref()
            .map(PlatformFacade::ip_country)
            .unwrap_or_default()
    }

    /// Seconds since the running title became active.
    pub fn seconds_since_app_active(&self) -> u32 {
        self.facade
            .as_ref()
            .map_or(0, PlatformFacade::seconds_since_app_active)
    }

    /// Seconds since the computer last saw input.
    pub fn seconds_since_computer_active(&self) -> u32 {
        self.facade
            .as_ref()
            .map_or(0, PlatformFacade::seconds_since_computer_active)
    }

    /// Backend server time as a Unix timestamp.
    pub fn server_real_time(&self) -> u32 {
        self.facade
            .as_ref()
            .map_or(0, PlatformFacade::server_real_time)
    }

    /// Language of the platform client UI; empty when the facade is
    /// unavailable.
    pub fn ui_language(&self) -> String {
        self.facade
            .as_ref()
            .map(PlatformFacade::ui_language)
            .unwrap_or_default()
    }

    /// `true` when running inside big-picture mode.
    pub fn big_picture_mode(&self) -> bool {
        self.facade
            .as_ref()
            .is_some_and(PlatformFacade::big_picture_mode)
    }

    /// `true` when running in a VR session.
    pub fn vr_mode(&self) -> bool {
        self.facade.as_ref().is_some_and(PlatformFacade::vr_mode)
    }

    /// `true` when running on a handheld device.
    pub fn handheld_mode(&self) -> bool {
        self.facade
            .as_ref()
            .is_some_and(PlatformFacade::handheld_mode)
    }

    /// Shows the gamepad text-input prompt.
    pub fn show_gamepad_text_input(
        &mut self,
        mode: TextInputMode,
        line_mode: TextLineMode,
        description: &str,
        max_chars: u32,
        preset: &str,
    ) -> bool {
        self.facade.as_mut().is_some_and(|facade| {
            facade.show_gamepad_text_input(
                mode.raw(),
                line_mode.raw(),
                description,
                max_chars,
                preset,
            )
        })
    }

    /// Text the user committed in the last gamepad prompt; empty when
    /// the facade is unavailable.
    pub fn entered_gamepad_text(&self) -> String {
        self.facade
            .as_ref()
            .map(PlatformFacade::entered_gamepad_text)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::BridgeConfig;
    use crate::facade::testing::FakeFacade;

    #[test]
    fn session_queries_forward_when_available() {
        let bridge = Bridge::new(FakeFacade::new(), BridgeConfig::default());
        assert_eq!(bridge.app_id(), AppId::new(480));
        assert_eq!(bridge.battery_power(), 255);
        assert_eq!(bridge.ip_country(), "DE");
        assert_eq!(bridge.server_real_time(), 1_700_000_000);
        assert!(!bridge.big_picture_mode());
    }

    #[test]
    fn gamepad_prompt_translates_modes_to_raw() {
        let mut bridge = Bridge::new(FakeFacade::new(), BridgeConfig::default());
        assert!(bridge.show_gamepad_text_input(
            TextInputMode::Password,
            TextLineMode::SingleLine,
            "Enter passphrase",
            64,
            "",
        ));
        if let Some(facade) = bridge.facade.as_ref() {
            assert_eq!(
                facade.issued,
                vec!["show_gamepad_text_input:1:0:Enter passphrase:64"]
            );
        }
        assert_eq!(bridge.entered_gamepad_text(), "entered text");
    }

    #[test]
    fn session_queries_neutral_when_unavailable() {
        let bridge = Bridge::<FakeFacade>::without_facade(BridgeConfig::default());
        assert_eq!(bridge.app_id(), AppId::new(0));
        assert_eq!(bridge.battery_power(), 0);
        assert_eq!(bridge.ip_country(), "");
        assert_eq!(bridge.ui_language(), "");
        assert_eq!(bridge.entered_gamepad_text(), "");
        assert!(!bridge.vr_mode());
        assert!(!bridge.handheld_mode());
    }
}
