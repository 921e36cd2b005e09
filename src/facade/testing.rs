//! Hand-rolled facade double for bridge tests.

use serde_json::Value;

use super::{FacadeNotice, ItemDownloadInfo, ItemInstallInfo, PlatformFacade, UpdateProgress};
use crate::domain::{
    AppId, EventKind, LobbyId, PublishedFileId, RequestId, ScreenshotHandle, UpdateHandle, UserId,
};

/// In-memory [`PlatformFacade`] with canned answers and a call log.
///
/// Request-issuing operations hand out sequential request identifiers and
/// append a line to [`FakeFacade::issued`]; tests queue notices with
/// [`FakeFacade::queue_completion`] / [`FakeFacade::queue_broadcast`] and
/// drain them through the bridge's pump.
#[derive(Debug)]
pub(crate) struct FakeFacade {
    pub app: AppId,
    pub user: UserId,
    pub logged_on: bool,
    pub next_request: u64,
    pub notices: Vec<FacadeNotice>,
    pub issued: Vec<String>,
    pub sync_ok: bool,
    pub persona_state_raw: i32,
    pub user_info_loading: bool,
    pub shut_down: bool,
}

impl Default for FakeFacade {
    fn default() -> Self {
        Self {
            app: AppId::new(480),
            user: UserId::new(76_561_198_000_000_000),
            logged_on: true,
            next_request: 1,
            notices: Vec::new(),
            issued: Vec::new(),
            sync_ok: true,
            persona_state_raw: 1,
            user_info_loading: false,
            shut_down: false,
        }
    }
}

impl FakeFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_completion(&mut self, request: RequestId, payload: Value, io_failure: bool) {
        self.notices.push(FacadeNotice::Completion {
            request,
            payload,
            io_failure,
        });
    }

    pub fn queue_broadcast(&mut self, kind: EventKind, payload: Value) {
        self.notices.push(FacadeNotice::Broadcast { kind, payload });
    }

    fn issue(&mut self, call: String) -> RequestId {
        self.issued.push(call);
        let request = RequestId::new(self.next_request);
        self.next_request += 1;
        request
    }

    fn log(&mut self, call: String) {
        self.issued.push(call);
    }
}

impl PlatformFacade for FakeFacade {
    fn app_id(&self) -> AppId {
        self.app
    }

    fn user_id(&self) -> UserId {
        self.user
    }

    fn logged_on(&self) -> bool {
        self.logged_on
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn poll(&mut self) -> Vec<FacadeNotice> {
        std::mem::take(&mut self.notices)
    }

    fn create_item(&mut self, consumer_app: AppId, file_type: i32) -> RequestId {
        self.issue(format!("create_item:{consumer_app}:{file_type}"))
    }

    fn start_item_update(&mut self, consumer_app: AppId, item: PublishedFileId) -> UpdateHandle {
        self.log(format!("start_item_update:{consumer_app}:{item}"));
        UpdateHandle::new(500 + item.raw())
    }

    fn set_item_title(&mut self, update: UpdateHandle, title: &str) -> bool {
        self.log(format!("set_item_title:{update}:{title}"));
        self.sync_ok
    }

    fn set_item_description(&mut self, update: UpdateHandle, description: &str) -> bool {
        self.log(format!("set_item_description:{update}:{description}"));
        self.sync_ok
    }

    fn set_item_update_language(&mut self, update: UpdateHandle, language: &str) -> bool {
        self.log(format!("set_item_update_language:{update}:{language}"));
        self.sync_ok
    }

    fn set_item_metadata(&mut self, update: UpdateHandle, metadata: &str) -> bool {
        self.log(format!("set_item_metadata:{update}:{metadata}"));
        self.sync_ok
    }

    fn set_item_visibility(&mut self, update: UpdateHandle, visibility: i32) -> bool {
        self.log(format!("set_item_visibility:{update}:{visibility}"));
        self.sync_ok
    }

    fn set_item_tags(&mut self, update: UpdateHandle, tags: &[String]) -> bool {
        self.log(format!("set_item_tags:{update}:{}", tags.join(",")));
        self.sync_ok
    }

    fn set_item_content(&mut self, update: UpdateHandle, content_folder: &str) -> bool {
        self.log(format!("set_item_content:{update}:{content_folder}"));
        self.sync_ok
    }

    fn set_item_preview(&mut self, update: UpdateHandle, preview_file: &str) -> bool {
        self.log(format!("set_item_preview:{update}:{preview_file}"));
        self.sync_ok
    }

    fn submit_item_update(&mut self, update: UpdateHandle, change_note: &str) -> RequestId {
        self.issue(format!("submit_item_update:{update}:{change_note}"))
    }

    fn item_update_progress(&self, _update: UpdateHandle) -> UpdateProgress {
        UpdateProgress {
            status: 3,
            bytes_processed: 512,
            bytes_total: 2048,
        }
    }

    fn query_item_details(&mut self, item: PublishedFileId) -> RequestId {
        self.issue(format!("query_item_details:{item}"))
    }

    fn delete_item(&mut self, item: PublishedFileId) -> RequestId {
        self.issue(format!("delete_item:{item}"))
    }

    fn download_item(&mut self, item: PublishedFileId, high_priority: bool) -> bool {
        self.log(format!("download_item:{item}:{high_priority}"));
        self.sync_ok
    }

    fn subscribed_items(&self) -> Vec<PublishedFileId> {
        vec![PublishedFileId::new(11), PublishedFileId::new(22)]
    }

    fn item_state(&self, _item: PublishedFileId) -> u32 {
        5 // subscribed | installed
    }

    fn item_install_info(&self, item: PublishedFileId) -> Option<ItemInstallInfo> {
        Some(ItemInstallInfo {
            size_on_disk: 4096,
            folder: format!("/workshop/content/{item}"),
            timestamp: 1_700_000_000,
        })
    }

    fn item_download_info(&self, _item: PublishedFileId) -> Option<ItemDownloadInfo> {
        Some(ItemDownloadInfo {
            bytes_downloaded: 1024,
            bytes_total: 4096,
        })
    }

    fn request_current_stats(&mut self) -> bool {
        self.log("request_current_stats".to_string());
        self.sync_ok
    }

    fn request_global_stats(&mut self, history_days: u32) -> RequestId {
        self.issue(format!("request_global_stats:{history_days}"))
    }

    fn store_stats(&mut self) -> bool {
        self.log("store_stats".to_string());
        self.sync_ok
    }

    fn reset_all_stats(&mut self, achievements_too: bool) -> bool {
        self.log(format!("reset_all_stats:{achievements_too}"));
        self.sync_ok
    }

    fn achievement(&self, name: &str) -> bool {
        name == "ACH_WIN_ONE_GAME"
    }

    fn set_achievement(&mut self, name: &str) -> bool {
        self.log(format!("set_achievement:{name}"));
        self.sync_ok
    }

    fn clear_achievement(&mut self, name: &str) -> bool {
        self.log(format!("clear_achievement:{name}"));
        self.sync_ok
    }

    fn indicate_achievement_progress(&mut self, name: &str, current: u32, max: u32) -> bool {
        self.log(format!("indicate_achievement_progress:{name}:{current}:{max}"));
        self.sync_ok
    }

    fn stat_i32(&self, _name: &str) -> i32 {
        42
    }

    fn stat_f32(&self, _name: &str) -> f32 {
        4.2
    }

    fn set_stat_i32(&mut self, name: &str, value: i32) -> bool {
        self.log(format!("set_stat_i32:{name}:{value}"));
        self.sync_ok
    }

    fn set_stat_f32(&mut self, name: &str, value: f32) -> bool {
        self.log(format!("set_stat_f32:{name}:{value}"));
        self.sync_ok
    }

    fn global_stat_i64(&self, _name: &str) -> i64 {
        1_000_000
    }

    fn global_stat_f64(&self, _name: &str) -> f64 {
        0.5
    }

    fn find_leaderboard(&mut self, name: &str) -> RequestId {
        self.issue(format!("find_leaderboard:{name}"))
    }

    fn is_subscribed_app(&self, app: AppId) -> bool {
        app == self.app
    }

    fn dlc_count(&self) -> u32 {
        2
    }

    fn is_dlc_installed(&self, _app: AppId) -> bool {
        true
    }

    fn is_app_installed(&self, app: AppId) -> bool {
        app == self.app
    }

    fn current_game_language(&self) -> String {
        "english".to_string()
    }

    fn friend_count(&self, _flags: u16) -> u32 {
        3
    }

    fn friend_by_index(&self, index: u32, _flags: u16) -> UserId {
        UserId::new(1000 + u64::from(index))
    }

    fn persona_name(&self) -> String {
        "TestPlayer".to_string()
    }

    fn persona_state(&self) -> i32 {
        self.persona_state_raw
    }

    fn request_user_information(&mut self, user: UserId, name_only: bool) -> bool {
        self.log(format!("request_user_information:{user}:{name_only}"));
        self.user_info_loading
    }

    fn friend_persona_name(&self, user: UserId) -> String {
        format!("Friend{user}")
    }

    fn set_rich_presence(&mut self, key: &str, value: &str) -> bool {
        self.log(format!("set_rich_presence:{key}:{value}"));
        self.sync_ok
    }

    fn clear_rich_presence(&mut self) {
        self.log("clear_rich_presence".to_string());
    }

    fn invite_user_to_game(&mut self, user: UserId, connect_string: &str) {
        self.log(format!("invite_user_to_game:{user}:{connect_string}"));
    }

    fn set_played_with(&mut self, user: UserId) {
        self.log(format!("set_played_with:{user}"));
    }

    fn activate_overlay(&mut self, dialog: &str) {
        self.log(format!("activate_overlay:{dialog}"));
    }

    fn activate_overlay_to_user(&mut self, dialog: &str, user: UserId) {
        self.log(format!("activate_overlay_to_user:{dialog}:{user}"));
    }

    fn activate_overlay_to_web_page(&mut self, url: &str) {
        self.log(format!("activate_overlay_to_web_page:{url}"));
    }

    fn activate_overlay_to_store(&mut self, app: AppId) {
        self.log(format!("activate_overlay_to_store:{app}"));
    }

    fn activate_overlay_invite_dialog(&mut self, lobby: LobbyId) {
        self.log(format!("activate_overlay_invite_dialog:{lobby}"));
    }

    fn overlay_enabled(&self) -> bool {
        true
    }

    fn set_notification_position(&mut self, position: i32) {
        self.log(format!("set_notification_position:{position}"));
    }

    fn trigger_screenshot(&mut self) {
        self.log("trigger_screenshot".to_string());
    }

    fn set_screenshot_location(&mut self, screenshot: ScreenshotHandle, location: &str) -> bool {
        self.log(format!("set_screenshot_location:{screenshot}:{location}"));
        self.sync_ok
    }

    fn create_lobby(&mut self, lobby_type: i32, max_members: u32) {
        self.log(format!("create_lobby:{lobby_type}:{max_members}"));
    }

    fn join_lobby(&mut self, lobby: LobbyId) {
        self.log(format!("join_lobby:{lobby}"));
    }

    fn leave_lobby(&mut self, lobby: LobbyId) {
        self.log(format!("leave_lobby:{lobby}"));
    }

    fn invite_user_to_lobby(&mut self, lobby: LobbyId, invitee: UserId) -> bool {
        self.log(format!("invite_user_to_lobby:{lobby}:{invitee}"));
        self.sync_ok
    }

    fn music_enabled(&self) -> bool {
        true
    }

    fn music_playing(&self) -> bool {
        false
    }

    fn music_volume(&self) -> f32 {
        0.8
    }

    fn music_pause(&mut self) {
        self.log("music_pause".to_string());
    }

    fn music_play(&mut self) {
        self.log("music_play".to_string());
    }

    fn music_play_next(&mut self) {
        self.log("music_play_next".to_string());
    }

    fn music_play_previous(&mut self) {
        self.log("music_play_previous".to_string());
    }

    fn music_set_volume(&mut self, volume: f32) {
        self.log(format!("music_set_volume:{volume}"));
    }

    fn user_level(&self) -> u32 {
        12
    }

    fn user_data_folder(&self) -> String {
        "/userdata/480".to_string()
    }

    fn battery_power(&self) -> u8 {
        255
    }

    fn ip_country(&self) -> String {
        "DE".to_string()
    }

    fn seconds_since_app_active(&self) -> u32 {
        60
    }

    fn seconds_since_computer_active(&self) -> u32 {
        120
    }

    fn server_real_time(&self) -> u32 {
        1_700_000_000
    }

    fn ui_language(&self) -> String {
        "english".to_string()
    }

    fn big_picture_mode(&self) -> bool {
        false
    }

    fn vr_mode(&self) -> bool {
        false
    }

    fn handheld_mode(&self) -> bool {
        false
    }

    fn show_gamepad_text_input(
        &mut self,
        mode: i32,
        line_mode: i32,
        description: &str,
        max_chars: u32,
        _preset: &str,
    ) -> bool {
        self.log(format!(
            "show_gamepad_text_input:{mode}:{line_mode}:{description}:{max_chars}"
        ));
        self.sync_ok
    }

    fn entered_gamepad_text(&self) -> String {
        "entered text".to_string()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn poll_drains_queued_notices() {
        let mut facade = FakeFacade::new();
        facade.queue_broadcast(EventKind::OverlayActivated, json!({ "active": true }));
        facade.queue_completion(RequestId::new(1), json!({}), false);

        assert_eq!(facade.poll().len(), 2);
        assert!(facade.poll().is_empty());
    }

    #[test]
    fn issued_requests_get_sequential_identifiers() {
        let mut facade = FakeFacade::new();
        let first = facade.create_item(AppId::new(480), 0);
        let second = facade.find_leaderboard("Quickest Win");
        assert_eq!(first, RequestId::new(1));
        assert_eq!(second, RequestId::new(2));
        assert_eq!(facade.issued.len(), 2);
    }

    #[test]
    fn shutdown_is_recorded() {
        let mut facade = FakeFacade::new();
        assert!(!facade.shut_down);
        facade.shutdown();
        assert!(facade.shut_down);
    }
}
