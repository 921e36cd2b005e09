//! Apps surface: ownership and installation queries.

use super::Bridge;
use crate::domain::AppId;
use crate::facade::PlatformFacade;

impl<F: PlatformFacade> Bridge<F> {
    /// `true` when the user owns the given application.
    pub fn is_subscribed_app(&self, app: AppId) -> bool {
        self.facade
            .as_ref()
            .is_some_and(|facade| facade.is_subscribed_app(app))
    }

    /// Number of DLC pieces for the running title.
    pub fn dlc_count(&self) -> u32 {
        self.facade.as_ref().map_or(0, PlatformFacade::dlc_count)
    }

    /// `true` when the given DLC is installed.
    pub fn is_dlc_installed(&self, app: AppId) -> bool {
        self.facade
            .as_ref()
            .is_some_and(|facade| facade.is_dlc_installed(app))
    }

    /// `true` when the given application is installed.
    pub fn is_app_installed(&self, app: AppId) -> bool {
        self.facade
            .as_ref()
            .is_some_and(|facade| facade.is_app_installed(app))
    }

    /// Language the user is running the title in; empty when the facade
    /// is unavailable.
    pub fn current_game_language(&self) -> String {
        self.facade
            .as_ref()
            .map(PlatformFacade::current_game_language)
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
    fn queries_forward_when_available() {
        let bridge = Bridge::new(FakeFacade::new(), BridgeConfig::default());
        assert!(bridge.is_subscribed_app(AppId::new(480)));
        assert!(!bridge.is_subscribed_app(AppId::new(9999)));
        assert_eq!(bridge.dlc_count(), 2);
        assert_eq!(bridge.current_game_language(), "english");
    }

    #[test]
    fn queries_neutral_when_unavailable() {
        let bridge = Bridge::<FakeFacade>::without_facade(BridgeConfig::default());
        assert!(!bridge.is_subscribed_app(AppId::new(480)));
        assert!(!bridge.is_dlc_installed(AppId::new(480)));
        assert!(!bridge.is_app_installed(AppId::new(480)));
        assert_eq!(bridge.dlc_count(), 0);
        assert_eq!(bridge.current_game_language(), "");
    }
}
