//! Raw payload records and the decode step.
//!
//! Facade payloads arrive as loosely-shaped JSON values; each event kind
//! has a raw record here that fixes the field contract, plus a conversion
//! into the typed domain record handlers receive. A payload that fails to
//! match its record is logged and dropped — decode failures never reach
//! the host.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::event::{
    GlobalStatsReceived, ItemCreated, ItemDeleted, ItemDetails, ItemDownloaded, ItemInstalled,
    ItemUpdated, LeaderboardFound, OverlayActivated, ScreenshotReady, UserStatsReceived,
};
use crate::domain::{
    AppId, EventKind, LeaderboardHandle, PublishedFileId, ResultCode, ScreenshotHandle, UserId,
};
use crate::error::BridgeError;

/// Decodes `payload` into `T`, logging and swallowing malformed input.
pub(crate) fn decode<T: DeserializeOwned>(kind: EventKind, payload: Value) -> Option<T> {
    match serde_json::from_value::<T>(payload) {
        Ok(record) => Some(record),
        Err(source) => {
            let err = BridgeError::MalformedPayload {
                kind: kind.as_str(),
                source,
            };
            tracing::warn!(code = err.error_code(), %err, "facade payload dropped");
            None
        }
    }
}

/// Wire record for [`EventKind::ItemCreated`].
#[derive(Debug, Deserialize)]
pub struct RawItemCreated {
    /// Raw outcome code.
    pub result: i32,
    /// Identifier of the created item.
    pub item: PublishedFileId,
    /// Whether the workshop legal agreement still needs acceptance.
    pub legal_agreement_required: bool,
}

impl From<RawItemCreated> for ItemCreated {
    fn from(raw: RawItemCreated) -> Self {
        Self {
            result: ResultCode::from_raw(raw.result),
            item: raw.item,
            legal_agreement_required: raw.legal_agreement_required,
        }
    }
}

/// Wire record for [`EventKind::ItemUpdated`].
#[derive(Debug, Deserialize)]
pub struct RawItemUpdated {
    /// Raw outcome code.
    pub result: i32,
    /// Whether the workshop legal agreement still needs acceptance.
    pub legal_agreement_required: bool,
}

impl From<RawItemUpdated> for ItemUpdated {
    fn from(raw: RawItemUpdated) -> Self {
        Self {
            result: ResultCode::from_raw(raw.result),
            legal_agreement_required: raw.legal_agreement_required,
        }
    }
}

/// Wire record for [`EventKind::ItemDetails`].
#[derive(Debug, Deserialize)]
pub struct RawItemDetails {
    /// Raw outcome code.
    pub result: i32,
    /// Identifier of the queried item.
    pub item: PublishedFileId,
    /// Item title.
    pub title: String,
    /// Item description.
    pub description: String,
    /// Published tag list.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Owning account.
    pub owner: UserId,
    /// Unix publication time.
    pub time_created: u32,
    /// Unix time of the last accepted update.
    pub time_updated: u32,
    /// Up-vote count.
    pub votes_up: u32,
    /// Down-vote count.
    pub votes_down: u32,
    /// Primary content file size in bytes.
    pub file_size: u64,
}

impl RawItemDetails {
    /// Decoded outcome code.
    #[must_use]
    pub fn result_code(&self) -> ResultCode {
        ResultCode::from_raw(self.result)
    }
}

impl From<RawItemDetails> for ItemDetails {
    fn from(raw: RawItemDetails) -> Self {
        Self {
            item: raw.item,
            title: raw.title,
            description: raw.description,
            tags: raw.tags,
            owner: raw.owner,
            time_created: raw.time_created,
            time_updated: raw.time_updated,
            votes_up: raw.votes_up,
            votes_down: raw.votes_down,
            file_size: raw.file_size,
        }
    }
}

/// Wire record for [`EventKind::ItemDeleted`].
#[derive(Debug, Deserialize)]
pub struct RawItemDeleted {
    /// Raw outcome code.
    pub result: i32,
    /// Identifier of the deleted item.
    pub item: PublishedFileId,
}

impl RawItemDeleted {
    /// Decoded outcome code.
    #[must_use]
    pub fn result_code(&self) -> ResultCode {
        ResultCode::from_raw(self.result)
    }
}

impl From<RawItemDeleted> for ItemDeleted {
    fn from(raw: RawItemDeleted) -> Self {
        Self {
            result: ResultCode::from_raw(raw.result),
            item: raw.item,
        }
    }
}

/// Wire record for [`EventKind::ItemDownloaded`].
#[derive(Debug, Deserialize)]
pub struct RawItemDownloaded {
    /// Raw outcome code.
    pub result: i32,
    /// Application the item belongs to.
    pub app: AppId,
    /// The downloaded item.
    pub item: PublishedFileId,
}

impl RawItemDownloaded {
    /// Decoded outcome code.
    #[must_use]
    pub fn result_code(&self) -> ResultCode {
        ResultCode::from_raw(self.result)
    }
}

impl From<RawItemDownloaded> for ItemDownloaded {
    fn from(raw: RawItemDownloaded) -> Self {
        Self {
            result: ResultCode::from_raw(raw.result),
            app: raw.app,
            item: raw.item,
        }
    }
}

/// Wire record for [`EventKind::ItemInstalled`].
#[derive(Debug, Deserialize)]
pub struct RawItemInstalled {
    /// Application the item belongs to.
    pub app: AppId,
    /// The installed item.
    pub item: PublishedFileId,
}

impl From<RawItemInstalled> for ItemInstalled {
    fn from(raw: RawItemInstalled) -> Self {
        Self {
            app: raw.app,
            item: raw.item,
        }
    }
}

/// Wire record for [`EventKind::LeaderboardFound`].
#[derive(Debug, Deserialize)]
pub struct RawLeaderboardFound {
    /// Handle for subsequent leaderboard calls.
    pub handle: LeaderboardHandle,
    /// Whether the requested leaderboard exists.
    pub found: bool,
}

impl From<RawLeaderboardFound> for LeaderboardFound {
    fn from(raw: RawLeaderboardFound) -> Self {
        Self {
            handle: raw.handle,
            found: raw.found,
        }
    }
}

/// Wire record for [`EventKind::GlobalStatsReceived`].
#[derive(Debug, Deserialize)]
pub struct RawGlobalStatsReceived {
    /// Game the stats belong to.
    pub game_id: u64,
    /// Raw outcome code.
    pub result: i32,
}

impl RawGlobalStatsReceived {
    /// Decoded outcome code.
    #[must_use]
    pub fn result_code(&self) -> ResultCode {
        ResultCode::from_raw(self.result)
    }
}

impl From<RawGlobalStatsReceived> for GlobalStatsReceived {
    fn from(raw: RawGlobalStatsReceived) -> Self {
        Self {
            game_id: raw.game_id,
            result: ResultCode::from_raw(raw.result),
        }
    }
}

/// Wire record for [`EventKind::UserStatsReceived`].
#[derive(Debug, Deserialize)]
pub struct RawUserStatsReceived {
    /// Game the stats belong to.
    pub game_id: u64,
    /// Raw outcome code.
    pub result: i32,
}

impl RawUserStatsReceived {
    /// Decoded outcome code.
    #[must_use]
    pub fn result_code(&self) -> ResultCode {
        ResultCode::from_raw(self.result)
    }
}

impl From<RawUserStatsReceived> for UserStatsReceived {
    fn from(raw: RawUserStatsReceived) -> Self {
        Self {
            game_id: raw.game_id,
            result: ResultCode::from_raw(raw.result),
        }
    }
}

/// Wire record for [`EventKind::UserStatsStored`].
///
/// Never surfaced to the host — it only feeds the stats-resync rule in
/// [`crate::service::stats::StatsService`].
#[derive(Debug, Deserialize)]
pub struct RawUserStatsStored {
    /// Game the store round-trip belongs to.
    pub game_id: u64,
    /// Raw outcome code.
    pub result: i32,
}

impl RawUserStatsStored {
    /// Decoded outcome code.
    #[must_use]
    pub fn result_code(&self) -> ResultCode {
        ResultCode::from_raw(self.result)
    }
}

/// Wire record for [`EventKind::OverlayActivated`].
#[derive(Debug, Deserialize)]
pub struct RawOverlayActivated {
    /// `true` when the overlay is now showing.
    pub active: bool,
}

impl From<RawOverlayActivated> for OverlayActivated {
    fn from(raw: RawOverlayActivated) -> Self {
        Self { active: raw.active }
    }
}

/// Wire record for [`EventKind::ScreenshotReady`].
#[derive(Debug, Deserialize)]
pub struct RawScreenshotReady {
    /// Handle of the captured screenshot.
    pub screenshot: ScreenshotHandle,
    /// Raw outcome code.
    pub result: i32,
}

impl RawScreenshotReady {
    /// Decoded outcome code.
    #[must_use]
    pub fn result_code(&self) -> ResultCode {
        ResultCode::from_raw(self.result)
    }
}

impl From<RawScreenshotReady> for ScreenshotReady {
    fn from(raw: RawScreenshotReady) -> Self {
        Self {
            screenshot: raw.screenshot,
            result: ResultCode::from_raw(raw.result),
        }
    }
}
