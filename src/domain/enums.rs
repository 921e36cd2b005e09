//! Integer-convention translations between the host and the facade.
//!
//! The facade speaks the platform's raw integer codes; the host speaks
//! these typed enums. Decoders (`from_raw`) fall back to the value the
//! platform itself would substitute for an out-of-range input rather
//! than failing.

/// Visibility class of a matchmaking lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LobbyType {
    /// Only invited users may join.
    Private,
    /// Friends of members may join.
    FriendsOnly,
    /// Listed publicly.
    Public,
    /// Joinable only by identifier, never listed.
    Invisible,
}

impl LobbyType {
    /// Decodes a raw code; out-of-range values fall back to `Invisible`.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Private,
            1 => Self::FriendsOnly,
            2 => Self::Public,
            _ => Self::Invisible,
        }
    }

    /// Returns the raw facade code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Private => 0,
            Self::FriendsOnly => 1,
            Self::Public => 2,
            Self::Invisible => 3,
        }
    }
}

/// Online presence state of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaState {
    /// Not signed in, or appearing offline.
    Offline,
    /// Signed in and active.
    Online,
    /// Signed in but busy.
    Busy,
    /// Auto-away.
    Away,
    /// Auto-away for a long period.
    Snooze,
    /// Flagged as looking to trade.
    LookingToTrade,
    /// Flagged as looking to play.
    LookingToPlay,
    /// Signed in but invisible to others.
    Invisible,
}

impl PersonaState {
    /// Decodes a raw code; out-of-range values fall back to `Offline`.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Online,
            2 => Self::Busy,
            3 => Self::Away,
            4 => Self::Snooze,
            5 => Self::LookingToTrade,
            6 => Self::LookingToPlay,
            7 => Self::Invisible,
            _ => Self::Offline,
        }
    }

    /// Returns the raw facade code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Offline => 0,
            Self::Online => 1,
            Self::Busy => 2,
            Self::Away => 3,
            Self::Snooze => 4,
            Self::LookingToTrade => 5,
            Self::LookingToPlay => 6,
            Self::Invisible => 7,
        }
    }
}

/// Screen corner for platform notification pop-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPosition {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl OverlayPosition {
    /// Returns the raw facade code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }
}

/// Visibility of a published workshop item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemVisibility {
    /// Visible to everyone.
    Public,
    /// Visible to the owner's friends.
    FriendsOnly,
    /// Visible to the owner only.
    Private,
}

impl ItemVisibility {
    /// Returns the raw facade code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Public => 0,
            Self::FriendsOnly => 1,
            Self::Private => 2,
        }
    }
}

/// Kind of workshop item being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFileType {
    /// Community-made content subscribed to through the workshop.
    Community,
    /// Content sold through the item store.
    Microtransaction,
}

impl ItemFileType {
    /// Returns the raw facade code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Community => 0,
            Self::Microtransaction => 1,
        }
    }
}

/// Stage of an in-flight workshop item upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// No update in progress for the queried handle.
    Invalid,
    /// Processing configuration.
    PreparingConfig,
    /// Reading and validating content files.
    PreparingContent,
    /// Uploading content to the backend.
    UploadingContent,
    /// Uploading the preview image.
    UploadingPreview,
    /// Committing the finished update.
    CommittingChanges,
}

impl UpdateStatus {
    /// Decodes a raw code; out-of-range values fall back to `Invalid`.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::PreparingConfig,
            2 => Self::PreparingContent,
            3 => Self::UploadingContent,
            4 => Self::UploadingPreview,
            5 => Self::CommittingChanges,
            _ => Self::Invalid,
        }
    }
}

/// Keyboard mode for the big-picture gamepad text prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputMode {
    /// Plain visible text.
    Normal,
    /// Obscured password entry.
    Password,
}

impl TextInputMode {
    /// Returns the raw facade code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Normal => 0,
            Self::Password => 1,
        }
    }
}

/// Line mode for the big-picture gamepad text prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextLineMode {
    /// Single-line entry.
    SingleLine,
    /// Multi-line entry.
    MultipleLines,
}

impl TextLineMode {
    /// Returns the raw facade code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::SingleLine => 0,
            Self::MultipleLines => 1,
        }
    }
}

/// Relationship filter mask for friend-list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendFlags(u16);

impl FriendFlags {
    /// No relationship.
    pub const NONE: Self = Self(0x0000);
    /// Users the current user has blocked.
    pub const BLOCKED: Self = Self(0x0001);
    /// Users who have requested friendship with the current user.
    pub const FRIENDSHIP_REQUESTED: Self = Self(0x0002);
    /// Regular (mutual) friends.
    pub const IMMEDIATE: Self = Self(0x0004);
    /// Users in a common clan or group.
    pub const CLAN_MEMBER: Self = Self(0x0008);
    /// Users on the same game server.
    pub const ON_GAME_SERVER: Self = Self(0x0010);
    /// Users the current user has sent a friendship request to.
    pub const REQUESTING_FRIENDSHIP: Self = Self(0x0080);
    /// Users whose information has been requested.
    pub const REQUESTING_INFO: Self = Self(0x0100);
    /// Users the current user is ignoring.
    pub const IGNORED: Self = Self(0x0200);
    /// Friends who are ignoring the current user.
    pub const IGNORED_FRIEND: Self = Self(0x0400);
    /// Every relationship class.
    pub const ALL: Self = Self(0xFFFF);

    /// Wraps a raw mask.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw mask.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Install/download state bitmask of a workshop item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState(u32);

impl ItemState {
    /// Item is not tracked on this client.
    pub const NONE: Self = Self(0);
    /// The current user is subscribed to the item.
    pub const SUBSCRIBED: Self = Self(1);
    /// The item was published through a legacy upload path.
    pub const LEGACY: Self = Self(2);
    /// The item is installed and usable.
    pub const INSTALLED: Self = Self(4);
    /// The installed copy is out of date.
    pub const NEEDS_UPDATE: Self = Self(8);
    /// A download is in progress right now.
    pub const DOWNLOADING: Self = Self(16);
    /// A download is queued but not started.
    pub const DOWNLOAD_PENDING: Self = Self(32);

    /// Wraps a raw facade bitmask.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The current user is subscribed to the item.
    #[must_use]
    pub const fn is_subscribed(self) -> bool {
        self.contains(Self::SUBSCRIBED)
    }

    /// The item is installed and usable.
    #[must_use]
    pub const fn is_installed(self) -> bool {
        self.contains(Self::INSTALLED)
    }

    /// The installed copy is out of date.
    #[must_use]
    pub const fn needs_update(self) -> bool {
        self.contains(Self::NEEDS_UPDATE)
    }

    /// A download is in progress or queued.
    #[must_use]
    pub const fn is_downloading(self) -> bool {
        self.contains(Self::DOWNLOADING) || self.contains(Self::DOWNLOAD_PENDING)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn lobby_type_round_trip() {
        for lobby_type in [
            LobbyType::Private,
            LobbyType::FriendsOnly,
            LobbyType::Public,
            LobbyType::Invisible,
        ] {
            assert_eq!(LobbyType::from_raw(lobby_type.raw()), lobby_type);
        }
    }

    #[test]
    fn unknown_lobby_type_falls_back_to_invisible() {
        assert_eq!(LobbyType::from_raw(17), LobbyType::Invisible);
        assert_eq!(LobbyType::from_raw(-1), LobbyType::Invisible);
    }

    #[test]
    fn unknown_persona_state_falls_back_to_offline() {
        assert_eq!(PersonaState::from_raw(99), PersonaState::Offline);
        assert_eq!(PersonaState::from_raw(1), PersonaState::Online);
    }

    #[test]
    fn update_status_falls_back_to_invalid() {
        assert_eq!(UpdateStatus::from_raw(0), UpdateStatus::Invalid);
        assert_eq!(UpdateStatus::from_raw(42), UpdateStatus::Invalid);
        assert_eq!(UpdateStatus::from_raw(3), UpdateStatus::UploadingContent);
    }

    #[test]
    fn item_state_bit_predicates() {
        let state = ItemState::from_raw(
            ItemState::SUBSCRIBED.raw() | ItemState::INSTALLED.raw() | ItemState::NEEDS_UPDATE.raw(),
        );
        assert!(state.is_subscribed());
        assert!(state.is_installed());
        assert!(state.needs_update());
        assert!(!state.is_downloading());
        assert!(!ItemState::NONE.is_subscribed());
    }

    #[test]
    fn friend_flags_contains() {
        assert!(FriendFlags::ALL.contains(FriendFlags::IMMEDIATE));
        assert!(!FriendFlags::BLOCKED.contains(FriendFlags::IMMEDIATE));
        assert_eq!(FriendFlags::from_raw(0x0004), FriendFlags::IMMEDIATE);
    }
}
