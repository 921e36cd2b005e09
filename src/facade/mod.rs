//! Boundary with the platform SDK facade.
//!
//! [`PlatformFacade`] is the single external collaborator of the bridge:
//! it issues asynchronous requests, surfaces ready completions and
//! broadcasts through [`PlatformFacade::poll`], and answers the
//! synchronous pass-through queries. Enum-like arguments cross this
//! boundary as the platform's raw integer codes; the typed translations
//! live in [`crate::domain::enums`].

pub mod raw;

#[cfg(test)]
pub(crate) mod testing;

use serde_json::Value;

use crate::domain::{
    AppId, EventKind, LobbyId, PublishedFileId, RequestId, ScreenshotHandle, UpdateHandle, UserId,
};

/// One ready delivery surfaced by [`PlatformFacade::poll`].
#[derive(Debug, Clone)]
pub enum FacadeNotice {
    /// A tracked one-shot request completed.
    Completion {
        /// The request this completion resolves.
        request: RequestId,
        /// Raw result record; shape is per event kind (see [`raw`]).
        payload: Value,
        /// The local transport failed — the payload is meaningless.
        io_failure: bool,
    },
    /// An unsolicited platform-originated event.
    Broadcast {
        /// Which event arrived.
        kind: EventKind,
        /// Raw event record; shape is per event kind (see [`raw`]).
        payload: Value,
    },
}

/// Progress snapshot of an in-flight workshop item upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProgress {
    /// Raw stage code as reported by the facade.
    pub status: i32,
    /// Bytes uploaded so far.
    pub bytes_processed: u64,
    /// Total bytes to upload.
    pub bytes_total: u64,
}

impl UpdateProgress {
    /// Decoded upload stage.
    #[must_use]
    pub const fn status_code(&self) -> crate::domain::UpdateStatus {
        crate::domain::UpdateStatus::from_raw(self.status)
    }
}

/// On-disk install location of a workshop item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInstallInfo {
    /// Installed size in bytes.
    pub size_on_disk: u64,
    /// Absolute folder the content is installed in.
    pub folder: String,
    /// Unix time the content was last updated on disk.
    pub timestamp: u32,
}

/// Download progress of a workshop item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDownloadInfo {
    /// Bytes downloaded so far.
    pub bytes_downloaded: u64,
    /// Total bytes to download.
    pub bytes_total: u64,
}

/// The platform SDK surface the bridge forwards to.
///
/// Implementations wrap the vendor SDK; the bridge never talks to the
/// network or disk directly. All request-issuing operations return an
/// opaque [`RequestId`] immediately — the result surfaces later through
/// [`PlatformFacade::poll`]. The facade guarantees request identifiers
/// are unique while in flight.
pub trait PlatformFacade {
    // --- session ---

    /// Application identifier of the running title.
    fn app_id(&self) -> AppId;

    /// Account identifier of the signed-in user.
    fn user_id(&self) -> UserId;

    /// `true` when the user is signed in to the platform backend.
    fn logged_on(&self) -> bool;

    /// Releases the underlying SDK. Called once at bridge shutdown.
    fn shutdown(&mut self);

    /// Drains every currently-ready completion and broadcast.
    ///
    /// Must never block; returns an empty vector when nothing is ready.
    fn poll(&mut self) -> Vec<FacadeNotice>;

    // --- workshop ---

    /// Starts creating a new workshop item for `consumer_app`.
    fn create_item(&mut self, consumer_app: AppId, file_type: i32) -> RequestId;

    /// Opens an update session for an existing item.
    fn start_item_update(&mut self, consumer_app: AppId, item: PublishedFileId) -> UpdateHandle;

    /// Stages a new title on an open update session.
    fn set_item_title(&mut self, update: UpdateHandle, title: &str) -> bool;

    /// Stages a new description on an open update session.
    fn set_item_description(&mut self, update: UpdateHandle, description: &str) -> bool;

    /// Stages the language of the staged title and description.
    fn set_item_update_language(&mut self, update: UpdateHandle, language: &str) -> bool;

    /// Stages a developer metadata blob on an open update session.
    fn set_item_metadata(&mut self, update: UpdateHandle, metadata: &str) -> bool;

    /// Stages the item's visibility (raw code).
    fn set_item_visibility(&mut self, update: UpdateHandle, visibility: i32) -> bool;

    /// Replaces the item's tag list.
    fn set_item_tags(&mut self, update: UpdateHandle, tags: &[String]) -> bool;

    /// Stages the folder whose contents become the item's payload.
    fn set_item_content(&mut self, update: UpdateHandle, content_folder: &str) -> bool;

    /// Stages the preview image file.
    fn set_item_preview(&mut self, update: UpdateHandle, preview_file: &str) -> bool;

    /// Commits an update session with a change note.
    fn submit_item_update(&mut self, update: UpdateHandle, change_note: &str) -> RequestId;

    /// Progress of an in-flight committed update.
    fn item_update_progress(&self, update: UpdateHandle) -> UpdateProgress;

    /// Requests full details of a published item.
    fn query_item_details(&mut self, item: PublishedFileId) -> RequestId;

    /// Deletes a published item.
    fn delete_item(&mut self, item: PublishedFileId) -> RequestId;

    /// Starts (or re-prioritizes) a download of a subscribed item.
    fn download_item(&mut self, item: PublishedFileId, high_priority: bool) -> bool;

    /// Items the current user is subscribed to.
    fn subscribed_items(&self) -> Vec<PublishedFileId>;

    /// Raw install/download state bitmask of an item.
    fn item_state(&self, item: PublishedFileId) -> u32;

    /// Install location of an item, if installed.
    fn item_install_info(&self, item: PublishedFileId) -> Option<ItemInstallInfo>;

    /// Download progress of an item, if a download is tracked.
    fn item_download_info(&self, item: PublishedFileId) -> Option<ItemDownloadInfo>;

    // --- stats & achievements ---

    /// Requests the current user's stats; arrives as a
    /// [`EventKind::UserStatsReceived`] broadcast.
    fn request_current_stats(&mut self) -> bool;

    /// Requests aggregated global stats for the trailing `history_days`.
    fn request_global_stats(&mut self, history_days: u32) -> RequestId;

    /// Persists locally staged stats and achievements to the backend.
    fn store_stats(&mut self) -> bool;

    /// Resets all stats, optionally including achievements.
    fn reset_all_stats(&mut self, achievements_too: bool) -> bool;

    /// `true` when the named achievement is unlocked.
    fn achievement(&self, name: &str) -> bool;

    /// Unlocks the named achievement (staged until stats are stored).
    fn set_achievement(&mut self, name: &str) -> bool;

    /// Relocks the named achievement.
    fn clear_achievement(&mut self, name: &str) -> bool;

    /// Shows a progress notification for an achievement.
    fn indicate_achievement_progress(&mut self, name: &str, current: u32, max: u32) -> bool;

    /// Current value of an integer stat.
    fn stat_i32(&self, name: &str) -> i32;

    /// Current value of a float stat.
    fn stat_f32(&self, name: &str) -> f32;

    /// Stages a new value for an integer stat.
    fn set_stat_i32(&mut self, name: &str, value: i32) -> bool;

    /// Stages a new value for a float stat.
    fn set_stat_f32(&mut self, name: &str, value: f32) -> bool;

    /// Aggregated global value of an integer stat.
    fn global_stat_i64(&self, name: &str) -> i64;

    /// Aggregated global value of a float stat.
    fn global_stat_f64(&self, name: &str) -> f64;

    /// Looks up a leaderboard by name.
    fn find_leaderboard(&mut self, name: &str) -> RequestId;

    // --- apps ---

    /// `true` when the user owns the given application.
    fn is_subscribed_app(&self, app: AppId) -> bool;

    /// Number of DLC pieces for the running title.
    fn dlc_count(&self) -> u32;

    /// `true` when the given DLC is installed.
    fn is_dlc_installed(&self, app: AppId) -> bool;

    /// `true` when the given application is installed.
    fn is_app_installed(&self, app: AppId) -> bool;

    /// Language the user is running the title in.
    fn current_game_language(&self) -> String;

    // --- friends ---

    /// Number of friends matching a raw relationship mask.
    fn friend_count(&self, flags: u16) -> u32;

    /// Friend at `index` within the mask-filtered list.
    fn friend_by_index(&self, index: u32, flags: u16) -> UserId;

    /// Display name of the signed-in user.
    fn persona_name(&self) -> String;

    /// Raw presence state code of the signed-in user.
    fn persona_state(&self) -> i32;

    /// Begins fetching another user's profile data.
    ///
    /// Returns `true` while the data is still loading.
    fn request_user_information(&mut self, user: UserId, name_only: bool) -> bool;

    /// Display name of another user, if cached locally.
    fn friend_persona_name(&self, user: UserId) -> String;

    /// Publishes one rich-presence key for the current user.
    fn set_rich_presence(&mut self, key: &str, value: &str) -> bool;

    /// Clears all rich-presence keys.
    fn clear_rich_presence(&mut self);

    /// Invites a user into the current game session.
    fn invite_user_to_game(&mut self, user: UserId, connect_string: &str);

    /// Marks a user as recently played with.
    fn set_played_with(&mut self, user: UserId);

    // --- overlay & screenshots ---

    /// Opens the platform overlay on a named dialog.
    fn activate_overlay(&mut self, dialog: &str);

    /// Opens an overlay dialog targeting another user.
    fn activate_overlay_to_user(&mut self, dialog: &str, user: UserId);

    /// Opens the overlay web browser at a URL.
    fn activate_overlay_to_web_page(&mut self, url: &str);

    /// Opens the overlay store page for an application.
    fn activate_overlay_to_store(&mut self, app: AppId);

    /// Opens the overlay invite dialog for a lobby.
    fn activate_overlay_invite_dialog(&mut self, lobby: LobbyId);

    /// `true` when the overlay is enabled for this process.
    fn overlay_enabled(&self) -> bool;

    /// Moves notification pop-ups to a screen corner (raw code).
    fn set_notification_position(&mut self, position: i32);

    /// Asks the platform to capture a screenshot next frame.
    fn trigger_screenshot(&mut self);

    /// Tags a captured screenshot with an in-game location string.
    fn set_screenshot_location(&mut self, screenshot: ScreenshotHandle, location: &str) -> bool;

    // --- matchmaking ---

    /// Creates a lobby of the given raw type code.
    fn create_lobby(&mut self, lobby_type: i32, max_members: u32);

    /// Joins an existing lobby.
    fn join_lobby(&mut self, lobby: LobbyId);

    /// Leaves a lobby.
    fn leave_lobby(&mut self, lobby: LobbyId);

    /// Invites a user to a lobby.
    fn invite_user_to_lobby(&mut self, lobby: LobbyId, invitee: UserId) -> bool;

    // --- music ---

    /// `true` when the platform music player is enabled.
    fn music_enabled(&self) -> bool;

    /// `true` when music is currently playing.
    fn music_playing(&self) -> bool;

    /// Current music volume in `0.0..=1.0`.
    fn music_volume(&self) -> f32;

    /// Pauses playback.
    fn music_pause(&mut self);

    /// Resumes playback.
    fn music_play(&mut self);

    /// Skips to the next track.
    fn music_play_next(&mut self);

    /// Returns to the previous track.
    fn music_play_previous(&mut self);

    /// Sets the music volume in `0.0..=1.0`.
    fn music_set_volume(&mut self, volume: f32);

    // --- user ---

    /// Platform profile level of the signed-in user.
    fn user_level(&self) -> u32;

    /// Per-user writable data folder for the running title.
    fn user_data_folder(&self) -> String;

    // --- utils ---

    /// Remaining battery in percent, `255` on mains power.
    fn battery_power(&self) -> u8;

    /// Two-letter country code derived from the user's IP.
    fn ip_country(&self) -> String;

    /// Seconds since the running title became active.
    fn seconds_since_app_active(&self) -> u32;

    /// Seconds since the computer last saw input.
    fn seconds_since_computer_active(&self) -> u32;

    /// Backend server time as a Unix timestamp.
    fn server_real_time(&self) -> u32;

    /// Language of the platform client UI.
    fn ui_language(&self) -> String;

    /// `true` when running inside big-picture mode.
    fn big_picture_mode(&self) -> bool;

    /// `true` when running in a VR session.
    fn vr_mode(&self) -> bool;

    /// `true` when running on a handheld device.
    fn handheld_mode(&self) -> bool;

    /// Shows the gamepad text-input prompt (raw mode codes).
    fn show_gamepad_text_input(
        &mut self,
        mode: i32,
        line_mode: i32,
        description: &str,
        max_chars: u32,
        preset: &str,
    ) -> bool;

    /// Text the user committed in the last gamepad prompt.
    fn entered_gamepad_text(&self) -> String;
}
