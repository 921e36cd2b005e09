//! Event kinds and the decoded records handed to host callbacks.
//!
//! Handlers only ever see these records — raw facade payloads stop at
//! the decode layer in [`crate::facade::raw`].

use super::ids::{AppId, LeaderboardHandle, PublishedFileId, ScreenshotHandle, UserId};
use super::result_code::ResultCode;

/// Tag identifying one deliverable event kind.
///
/// One-shot kinds resolve a tracked request exactly once; broadcast kinds
/// arrive unsolicited and may repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// One-shot: a workshop item creation request completed.
    ItemCreated,
    /// One-shot: a workshop item update submission completed.
    ItemUpdated,
    /// One-shot: a workshop item details query completed.
    ItemDetails,
    /// One-shot: a workshop item deletion completed.
    ItemDeleted,
    /// One-shot: a leaderboard find request completed.
    LeaderboardFound,
    /// One-shot: aggregated global stats arrived.
    GlobalStatsReceived,
    /// Broadcast: a subscribed workshop item finished installing.
    ItemInstalled,
    /// Broadcast: a workshop item download finished.
    ItemDownloaded,
    /// Broadcast: the current user's stats arrived from the backend.
    UserStatsReceived,
    /// Broadcast: a stats store round-trip finished on the backend.
    UserStatsStored,
    /// Broadcast: the platform overlay opened or closed.
    OverlayActivated,
    /// Broadcast: a screenshot was captured and is ready for tagging.
    ScreenshotReady,
}

impl EventKind {
    /// Returns `true` for kinds that resolve a tracked one-shot request.
    #[must_use]
    pub const fn is_one_shot(self) -> bool {
        matches!(
            self,
            Self::ItemCreated
                | Self::ItemUpdated
                | Self::ItemDetails
                | Self::ItemDeleted
                | Self::LeaderboardFound
                | Self::GlobalStatsReceived
        )
    }

    /// Returns the event kind as a static string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ItemCreated => "item_created",
            Self::ItemUpdated => "item_updated",
            Self::ItemDetails => "item_details",
            Self::ItemDeleted => "item_deleted",
            Self::LeaderboardFound => "leaderboard_found",
            Self::GlobalStatsReceived => "global_stats_received",
            Self::ItemInstalled => "item_installed",
            Self::ItemDownloaded => "item_downloaded",
            Self::UserStatsReceived => "user_stats_received",
            Self::UserStatsStored => "user_stats_stored",
            Self::OverlayActivated => "overlay_activated",
            Self::ScreenshotReady => "screenshot_ready",
        }
    }
}

/// Result of a workshop item creation request.
///
/// Delivered for failures too — the handler inspects `result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCreated {
    /// Outcome reported by the backend.
    pub result: ResultCode,
    /// Identifier of the newly created item (meaningless unless `result` is ok).
    pub item: PublishedFileId,
    /// The user must accept the workshop legal agreement before the item
    /// becomes visible.
    pub legal_agreement_required: bool,
}

/// Result of a workshop item update submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdated {
    /// Outcome reported by the backend.
    pub result: ResultCode,
    /// The user must accept the workshop legal agreement.
    pub legal_agreement_required: bool,
}

/// Details of a published workshop item, from a details query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetails {
    /// Identifier of the queried item.
    pub item: PublishedFileId,
    /// Item title.
    pub title: String,
    /// Item description.
    pub description: String,
    /// Comma-joined tag list as published.
    pub tags: Vec<String>,
    /// Account that owns the item.
    pub owner: UserId,
    /// Unix time the item was first published.
    pub time_created: u32,
    /// Unix time of the last accepted update.
    pub time_updated: u32,
    /// Up-vote count.
    pub votes_up: u32,
    /// Down-vote count.
    pub votes_down: u32,
    /// Size of the primary content file in bytes.
    pub file_size: u64,
}

/// Result of a workshop item deletion (delivered only on success).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDeleted {
    /// Outcome reported by the backend.
    pub result: ResultCode,
    /// Identifier of the deleted item.
    pub item: PublishedFileId,
}

/// A workshop item download finished for this application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDownloaded {
    /// Outcome of the download.
    pub result: ResultCode,
    /// Application the item belongs to.
    pub app: AppId,
    /// The downloaded item.
    pub item: PublishedFileId,
}

/// A subscribed workshop item finished installing for this application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInstalled {
    /// Application the item belongs to.
    pub app: AppId,
    /// The installed item.
    pub item: PublishedFileId,
}

/// Result of a leaderboard find request.
///
/// A miss is delivered too — `found` is `false` and `handle` is
/// meaningless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardFound {
    /// Handle for subsequent leaderboard operations.
    pub handle: LeaderboardHandle,
    /// Whether a leaderboard with the requested name exists.
    pub found: bool,
}

/// Aggregated global stats arrived from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalStatsReceived {
    /// Game the stats belong to.
    pub game_id: u64,
    /// Outcome reported by the backend.
    pub result: ResultCode,
}

/// The current user's stats arrived from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStatsReceived {
    /// Game the stats belong to.
    pub game_id: u64,
    /// Outcome reported by the backend.
    pub result: ResultCode,
}

/// The platform overlay opened or closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayActivated {
    /// `true` when the overlay is now showing.
    pub active: bool,
}

/// A screenshot was captured and is ready for tagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotReady {
    /// Handle of the captured screenshot.
    pub screenshot: ScreenshotHandle,
    /// Outcome of writing the screenshot to disk.
    pub result: ResultCode,
}
