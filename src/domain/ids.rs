//! Type-safe identifier newtypes for facade-issued handles.
//!
//! Every handle the platform facade hands out is an opaque integer. Each
//! gets its own newtype so a lobby identifier cannot be confused with a
//! published-file identifier at a call site.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident, $raw:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($raw);

        impl $name {
            /// Wraps a raw facade-issued value.
            #[must_use]
            pub const fn new(raw: $raw) -> Self {
                Self(raw)
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn raw(self) -> $raw {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$raw> for $name {
            fn from(raw: $raw) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for $raw {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

id_type!(
    /// Application (title) identifier on the platform store.
    AppId,
    u32
);

id_type!(
    /// Platform account identifier for a user.
    UserId,
    u64
);

id_type!(
    /// Identifier of a matchmaking lobby.
    LobbyId,
    u64
);

id_type!(
    /// Opaque identifier of an in-flight asynchronous facade request.
    ///
    /// Issued by a request-issuing facade operation and unique while the
    /// request is in flight. The [`super::CallTracker`] keys its watch
    /// list on this.
    RequestId,
    u64
);

id_type!(
    /// Identifier of a published workshop item.
    PublishedFileId,
    u64
);

id_type!(
    /// Handle for an open workshop item update session.
    UpdateHandle,
    u64
);

id_type!(
    /// Handle to a leaderboard, obtained via a find request.
    LeaderboardHandle,
    u64
);

id_type!(
    /// Handle to a captured screenshot.
    ScreenshotHandle,
    u32
);
