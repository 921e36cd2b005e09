//! Matchmaking surface: lobby lifecycle pass-throughs.

use super::Bridge;
use crate::domain::{LobbyId, LobbyType, UserId};
use crate::facade::PlatformFacade;

impl<F: PlatformFacade> Bridge<F> {
    /// Creates a lobby of the given type.
    pub fn create_lobby(&mut self, lobby_type: LobbyType, max_members: u32) {
        if let Some(facade) = self.facade.as_mut() {
            facade.create_lobby(lobby_type.raw(), max_members);
        }
    }

    /// Joins an existing lobby.
    pub fn join_lobby(&mut self, lobby: LobbyId) {
        if let Some(facade) = self.facade.as_mut() {
            facade.join_lobby(lobby);
        }
    }

    /// Leaves a lobby.
    pub fn leave_lobby(&mut self, lobby: LobbyId) {
        if let Some(facade) = self.facade.as_mut() {
            facade.leave_lobby(lobby);
        }
    }

    /// Invites a user to a lobby.
    pub fn invite_user_to_lobby(&mut self, lobby: LobbyId, invitee: UserId) -> bool {
        self.facade
            .as_mut()
            .is_some_and(|facade| facade.invite_user_to_lobby(lobby, invitee))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::BridgeConfig;
    use crate::facade::testing::FakeFacade;

    #[test]
    fn lobby_type_is_translated_to_raw() {
        let mut bridge = Bridge::new(FakeFacade::new(), BridgeConfig::default());
        bridge.create_lobby(LobbyType::FriendsOnly, 4);
        bridge.join_lobby(LobbyId::new(900));
        bridge.leave_lobby(LobbyId::new(900));
        if let Some(facade) = bridge.facade.as_ref() {
            assert_eq!(
                facade.issued,
                vec!["create_lobby:1:4", "join_lobby:900", "leave_lobby:900"]
            );
        }
    }

    #[test]
    fn invite_is_neutral_when_unavailable() {
        let mut bridge = Bridge::<FakeFacade>::without_facade(BridgeConfig::default());
        assert!(!bridge.invite_user_to_lobby(LobbyId::new(900), UserId::new(1001)));
        bridge.create_lobby(LobbyType::Public, 8);
    }
}
