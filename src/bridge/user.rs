//! User surface: identity and profile pass-throughs.

use super::Bridge;
use crate::domain::UserId;
use crate::facade::PlatformFacade;

impl<F: PlatformFacade> Bridge<F> {
    /// Account identifier of the signed-in user; zero when the facade is
    /// unavailable.
    pub fn user_id(&self) -> UserId {
        self.facade
            .as_ref()
            .map_or(UserId::new(0), PlatformFacade::user_id)
    }

    /// `true` when the user is signed in to the platform backend.
    pub fn logged_on(&self) -> bool {
        self.facade.as_ref().is_some_and(PlatformFacade::logged_on)
    }

    /// Platform profile level of the signed-in user.
    pub fn user_level(&self) -> u32 {
        self.facade.as_ref().map_or(0, PlatformFacade::user_level)
    }

    /// Per-user writable data folder for the running title; empty when
    /// the facade is unavailable.
    pub fn user_data_folder(&self) -> String {
        self.facade
            .as_ref()
            .map(PlatformFacade::user_data_folder)
            .unwrap_or_default()
    }
}
