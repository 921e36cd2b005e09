//! Workshop surface: handler registration, request issuance, and
//! update-session plumbing.

use super::Bridge;
use crate::domain::event::{
    ItemCreated, ItemDeleted, ItemDetails, ItemDownloaded, ItemInstalled, ItemUpdated,
};
use crate::domain::{
    AppId, EventKind, ItemFileType, ItemState, ItemVisibility, PublishedFileId, UpdateHandle,
};
use crate::error::BridgeError;
use crate::facade::{ItemDownloadInfo, ItemInstallInfo, PlatformFacade, UpdateProgress};

/// Logs and rejects a staged text field that exceeds its byte limit.
fn text_within_limit(field: &'static str, text: &str, max: usize) -> bool {
    if text.len() > max {
        let err = BridgeError::InvalidInput(format!(
            "{field} is {} bytes, limit is {max}",
            text.len()
        ));
        tracing::warn!(code = err.error_code(), %err, "update field rejected");
        return false;
    }
    true
}

impl<F: PlatformFacade> Bridge<F> {
    /// Registers the handler for item-creation results.
    pub fn set_item_created_handler(&mut self, handler: impl FnMut(ItemCreated) + 'static) {
        self.workshop.item_created.set(handler);
    }

    /// Clears the item-creation handler.
    pub fn clear_item_created_handler(&mut self) {
        self.workshop.item_created.clear();
    }

    /// Registers the handler for item-update results.
    pub fn set_item_updated_handler(&mut self, handler: impl FnMut(ItemUpdated) + 'static) {
        self.workshop.item_updated.set(handler);
    }

    /// Clears the item-update handler.
    pub fn clear_item_updated_handler(&mut self) {
        self.workshop.item_updated.clear();
    }

    /// Registers the handler for details-query results.
    pub fn set_item_details_handler(&mut self, handler: impl FnMut(ItemDetails) + 'static) {
        self.workshop.item_details.set(handler);
    }

    /// Clears the details-query handler.
    pub fn clear_item_details_handler(&mut self) {
        self.workshop.item_details.clear();
    }

    /// Registers the handler for item-deletion results.
    pub fn set_item_deleted_handler(&mut self, handler: impl FnMut(ItemDeleted) + 'static) {
        self.workshop.item_deleted.set(handler);
    }

    /// Clears the item-deletion handler.
    pub fn clear_item_deleted_handler(&mut self) {
        self.workshop.item_deleted.clear();
    }

    /// Registers the handler for install broadcasts.
    pub fn set_item_installed_handler(&mut self, handler: impl FnMut(ItemInstalled) + 'static) {
        self.workshop.item_installed.set(handler);
    }

    /// Clears the install-broadcast handler.
    pub fn clear_item_installed_handler(&mut self) {
        self.workshop.item_installed.clear();
    }

    /// Registers the handler for download broadcasts.
    pub fn set_item_downloaded_handler(&mut self, handler: impl FnMut(ItemDownloaded) + 'static) {
        self.workshop.item_downloaded.set(handler);
    }

    /// Clears the download-broadcast handler.
    pub fn clear_item_downloaded_handler(&mut self) {
        self.workshop.item_downloaded.clear();
    }

    /// Starts creating a new workshop item; the result arrives at the
    /// item-created handler. Returns `false` when the facade is
    /// unavailable.
    pub fn create_item(&mut self, consumer_app: AppId, file_type: ItemFileType) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        let request = facade.create_item(consumer_app, file_type.raw());
        self.tracker.track(request, EventKind::ItemCreated);
        true
    }

    /// Opens an update session for an existing item.
    pub fn start_item_update(
        &mut self,
        consumer_app: AppId,
        item: PublishedFileId,
    ) -> Option<UpdateHandle> {
        let facade = self.facade.as_mut()?;
        Some(facade.start_item_update(consumer_app, item))
    }

    /// Stages a new title, enforcing the configured byte limit.
    pub fn set_item_title(&mut self, update: UpdateHandle, title: &str) -> bool {
        let max = self.config.max_title_len;
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        if !text_within_limit("title", title, max) {
            return false;
        }
        facade.set_item_title(update, title)
    }

    /// Stages a new description, enforcing the configured byte limit.
    pub fn set_item_description(&mut self, update: UpdateHandle, description: &str) -> bool {
        let max = self.config.max_description_len;
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        if !text_within_limit("description", description, max) {
            return false;
        }
        facade.set_item_description(update, description)
    }

    /// Stages the language of the staged title and description.
    pub fn set_item_update_language(&mut self, update: UpdateHandle, language: &str) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        facade.set_item_update_language(update, language)
    }

    /// Stages a developer metadata blob, enforcing the configured byte
    /// limit.
    pub fn set_item_metadata(&mut self, update: UpdateHandle, metadata: &str) -> bool {
        let max = self.config.max_metadata_len;
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        if !text_within_limit("metadata", metadata, max) {
            return false;
        }
        facade.set_item_metadata(update, metadata)
    }

    /// Stages the item's visibility.
    pub fn set_item_visibility(&mut self, update: UpdateHandle, visibility: ItemVisibility) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        facade.set_item_visibility(update, visibility.raw())
    }

    /// Replaces the item's tag list.
    pub fn set_item_tags(&mut self, update: UpdateHandle, tags: &[String]) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        facade.set_item_tags(update, tags)
    }

    /// Stages the folder whose contents become the item's payload.
    pub fn set_item_content(&mut self, update: UpdateHandle, content_folder: &str) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        facade.set_item_content(update, content_folder)
    }

    /// Stages the preview image file.
    pub fn set_item_preview(&mut self, update: UpdateHandle, preview_file: &str) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        facade.set_item_preview(update, preview_file)
    }

    /// Commits an update session; the result arrives at the item-updated
    /// handler. Returns `false` when the facade is unavailable.
    pub fn submit_item_update(&mut self, update: UpdateHandle, change_note: &str) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        let request = facade.submit_item_update(update, change_note);
        self.tracker.track(request, EventKind::ItemUpdated);
        true
    }

    /// Progress of an in-flight committed update.
    pub fn item_update_progress(&self, update: UpdateHandle) -> Option<UpdateProgress> {
        let facade = self.facade.as_ref()?;
        Some(facade.item_update_progress(update))
    }

    /// Requests full details of a published item; the result arrives at
    /// the details handler.
    pub fn query_item_details(&mut self, item: PublishedFileId) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        let request = facade.query_item_details(item);
        self.tracker.track(request, EventKind::ItemDetails);
        true
    }

    /// Deletes a published item; a success arrives at the item-deleted
    /// handler.
    pub fn delete_item(&mut self, item: PublishedFileId) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        let request = facade.delete_item(item);
        self.tracker.track(request, EventKind::ItemDeleted);
        true
    }

    /// Starts (or re-prioritizes) a download of a subscribed item;
    /// completion arrives at the download-broadcast handler.
    pub fn download_item(&mut self, item: PublishedFileId, high_priority: bool) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        facade.download_item(item, high_priority)
    }

    /// Items the current user is subscribed to.
    pub fn subscribed_items(&self) -> Vec<PublishedFileId> {
        self.facade
            .as_ref()
            .map(PlatformFacade::subscribed_items)
            .unwrap_or_default()
    }

    /// Install/download state of an item.
    pub fn item_state(&self, item: PublishedFileId) -> ItemState {
        self.facade
            .as_ref()
            .map_or(ItemState::NONE, |facade| {
                ItemState::from_raw(facade.item_state(item))
            })
    }

    /// Install location of an item, if installed.
    pub fn item_install_info(&self, item: PublishedFileId) -> Option<ItemInstallInfo> {
        self.facade.as_ref()?.item_install_info(item)
    }

    /// Download progress of an item, if a download is tracked.
    pub fn item_download_info(&self, item: PublishedFileId) -> Option<ItemDownloadInfo> {
        self.facade.as_ref()?.item_download_info(item)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::BridgeConfig;
    use crate::facade::testing::FakeFacade;

    fn bridge() -> Bridge<FakeFacade> {
        Bridge::new(FakeFacade::new(), BridgeConfig::default())
    }

    fn issued(bridge: &Bridge<FakeFacade>) -> Vec<String> {
        bridge
            .facade
            .as_ref()
            .map(|facade| facade.issued.clone())
            .unwrap_or_default()
    }

    #[test]
    fn oversized_title_never_reaches_the_facade() {
        let mut bridge = bridge();
        let update = UpdateHandle::new(501);

        let oversized = "x".repeat(129);
        assert!(!bridge.set_item_title(update, &oversized));
        assert!(issued(&bridge).is_empty());

        let at_limit = "x".repeat(128);
        assert!(bridge.set_item_title(update, &at_limit));
        assert_eq!(issued(&bridge).len(), 1);
    }

    #[test]
    fn oversized_description_and_metadata_are_rejected() {
        let mut bridge = bridge();
        let update = UpdateHandle::new(501);

        assert!(!bridge.set_item_description(update, &"d".repeat(8001)));
        assert!(!bridge.set_item_metadata(update, &"m".repeat(5001)));
        assert!(issued(&bridge).is_empty());

        assert!(bridge.set_item_description(update, "fine"));
        assert!(bridge.set_item_metadata(update, "fine"));
        assert_eq!(issued(&bridge).len(), 2);
    }

    #[test]
    fn create_item_tracks_a_one_shot() {
        let mut bridge = bridge();
        assert!(bridge.create_item(AppId::new(480), ItemFileType::Community));
        assert!(bridge.tracker.is_watching(EventKind::ItemCreated));
        assert_eq!(issued(&bridge), vec!["create_item:480:0"]);
    }

    #[test]
    fn delete_and_details_track_their_kinds() {
        let mut bridge = bridge();
        assert!(bridge.query_item_details(PublishedFileId::new(7)));
        assert!(bridge.delete_item(PublishedFileId::new(7)));
        assert!(bridge.tracker.is_watching(EventKind::ItemDetails));
        assert!(bridge.tracker.is_watching(EventKind::ItemDeleted));
        assert_eq!(bridge.tracker.len(), 2);
    }

    #[test]
    fn update_session_round_trip() {
        let mut bridge = bridge();
        let update = bridge.start_item_update(AppId::new(480), PublishedFileId::new(7));
        let Some(update) = update else {
            panic!("expected an update handle");
        };
        assert!(bridge.set_item_visibility(update, ItemVisibility::Public));
        assert!(bridge.set_item_tags(update, &["terrain".to_string()]));
        assert!(bridge.submit_item_update(update, "initial upload"));
        assert!(bridge.tracker.is_watching(EventKind::ItemUpdated));

        let progress = bridge.item_update_progress(update);
        assert_eq!(
            progress.map(|p| p.status_code()),
            Some(crate::domain::UpdateStatus::UploadingContent)
        );
    }

    #[test]
    fn item_state_wraps_the_raw_mask() {
        let bridge = bridge();
        let state = bridge.item_state(PublishedFileId::new(7));
        assert!(state.is_subscribed());
        assert!(state.is_installed());
        assert!(!state.needs_update());
    }

    #[test]
    fn unavailable_facade_neutralizes_the_surface() {
        let mut bridge = Bridge::<FakeFacade>::without_facade(BridgeConfig::default());
        let update = UpdateHandle::new(501);

        assert!(!bridge.create_item(AppId::new(480), ItemFileType::Community));
        assert!(bridge.start_item_update(AppId::new(480), PublishedFileId::new(7)).is_none());
        assert!(!bridge.set_item_title(update, "fine"));
        assert!(!bridge.download_item(PublishedFileId::new(7), true));
        assert!(bridge.subscribed_items().is_empty());
        assert_eq!(bridge.item_state(PublishedFileId::new(7)), ItemState::NONE);
        assert!(bridge.item_install_info(PublishedFileId::new(7)).is_none());
        assert!(bridge.item_update_progress(update).is_none());
        assert!(bridge.tracker.is_empty());
    }
}
