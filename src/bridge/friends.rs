//! Friends surface: presence, friend-list queries, and rich presence.

use super::Bridge;
use crate::domain::{FriendFlags, PersonaState, UserId};
use crate::facade::PlatformFacade;

impl<F: PlatformFacade> Bridge<F> {
    /// Number of friends matching the relationship mask.
    pub fn friend_count(&self, flags: FriendFlags) -> u32 {
        self.facade
            .as_ref()
            .map_or(0, |facade| facade.friend_count(flags.raw()))
    }

    /// Friend at `index` within the mask-filtered list.
    pub fn friend_by_index(&self, index: u32, flags: FriendFlags) -> UserId {
        self.facade
            .as_ref()
            .map_or(UserId::new(0), |facade| {
                facade.friend_by_index(index, flags.raw())
            })
    }

    /// Display name of the signed-in user; empty when the facade is
    /// unavailable.
    pub fn persona_name(&self) -> String {
        self.facade
            .as_ref()
            .map(PlatformFacade::persona_name)
            .unwrap_or_default()
    }

    /// Presence state of the signed-in user.
    pub fn persona_state(&self) -> PersonaState {
        self.facade
            .as_ref()
            .map_or(PersonaState::Offline, |facade| {
                PersonaState::from_raw(facade.persona_state())
            })
    }

    /// Display name of another user.
    ///
    /// Kicks off a profile fetch if the data is not cached yet and
    /// returns empty while it is still loading — call again on a later
    /// frame.
    pub fn friend_persona_name(&mut self, user: UserId) -> String {
        let Some(facade) = self.facade.as_mut() else {
            return String::new();
        };
        if user.raw() == 0 {
            return String::new();
        }
        let loading = facade.request_user_information(user, true);
        if loading {
            return String::new();
        }
        facade.friend_persona_name(user)
    }

    /// Publishes one rich-presence key for the current user.
    pub fn set_rich_presence(&mut self, key: &str, value: &str) -> bool {
        self.facade
            .as_mut()
            .is_some_and(|facade| facade.set_rich_presence(key, value))
    }

    /// Clears all rich-presence keys.
    pub fn clear_rich_presence(&mut self) {
        if let Some(facade) = self.facade.as_mut() {
            facade.clear_rich_presence();
        }
    }

    /// Invites a user into the current game session with a connect
    /// string.
    pub fn invite_friend(&mut self, user: UserId, connect_string: &str) {
        if let Some(facade) = self.facade.as_mut() {
            facade.invite_user_to_game(user, connect_string);
        }
    }

    /// Marks a user as recently played with.
    pub fn set_played_with(&mut self, user: UserId) {
        if let Some(facade) = self.facade.as_mut() {
            facade.set_played_with(user);
        }
    }
}
