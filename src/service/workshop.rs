//! Workshop façade: user-generated-content slots and delivery rules.

use serde_json::Value;

use crate::domain::event::{
    ItemCreated, ItemDeleted, ItemDetails, ItemDownloaded, ItemInstalled, ItemUpdated,
};
use crate::domain::{AppId, CallbackSlot, EventKind};
use crate::facade::raw::{
    self, RawItemCreated, RawItemDeleted, RawItemDetails, RawItemDownloaded, RawItemInstalled,
    RawItemUpdated,
};

/// Callback slots and delivery rules for workshop events.
///
/// Creation, update, details, and deletion results resolve tracked
/// one-shot requests; install and download completions arrive as
/// broadcasts filtered to the running application.
#[derive(Debug, Default)]
pub struct WorkshopService {
    pub(crate) item_created: CallbackSlot<ItemCreated>,
    pub(crate) item_updated: CallbackSlot<ItemUpdated>,
    pub(crate) item_details: CallbackSlot<ItemDetails>,
    pub(crate) item_deleted: CallbackSlot<ItemDeleted>,
    pub(crate) item_installed: CallbackSlot<ItemInstalled>,
    pub(crate) item_downloaded: CallbackSlot<ItemDownloaded>,
}

impl WorkshopService {
    /// Creates the façade with all slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a completed item-creation request.
    ///
    /// Failure outcomes are delivered too — the record carries the code.
    pub(crate) fn resolve_item_created(&mut self, payload: Value) {
        let Some(record) = raw::decode::<RawItemCreated>(EventKind::ItemCreated, payload) else {
            return;
        };
        if !self.item_created.invoke(record.into()) {
            tracing::trace!("item_created resolved with no handler registered");
        }
    }

    /// Resolves a completed item-update submission.
    pub(crate) fn resolve_item_updated(&mut self, payload: Value) {
        let Some(record) = raw::decode::<RawItemUpdated>(EventKind::ItemUpdated, payload) else {
            return;
        };
        if !self.item_updated.invoke(record.into()) {
            tracing::trace!("item_updated resolved with no handler registered");
        }
    }

    /// Resolves a completed details query. Non-ok outcomes are dropped —
    /// there is no meaningful record to hand over.
    pub(crate) fn resolve_item_details(&mut self, payload: Value) {
        let Some(record) = raw::decode::<RawItemDetails>(EventKind::ItemDetails, payload) else {
            return;
        };
        if !record.result_code().is_ok() {
            tracing::debug!(result = %record.result_code(), "item details query failed; dropped");
            return;
        }
        if !self.item_details.invoke(record.into()) {
            tracing::trace!("item_details resolved with no handler registered");
        }
    }

    /// Resolves a completed deletion request; only successes reach the host.
    pub(crate) fn resolve_item_deleted(&mut self, payload: Value) {
        let Some(record) = raw::decode::<RawItemDeleted>(EventKind::ItemDeleted, payload) else {
            return;
        };
        if !record.result_code().is_ok() {
            tracing::debug!(result = %record.result_code(), "item deletion failed; dropped");
            return;
        }
        if !self.item_deleted.invoke(record.into()) {
            tracing::trace!("item_deleted resolved with no handler registered");
        }
    }

    /// Delivers an install broadcast if it belongs to the running
    /// application.
    pub(crate) fn deliver_item_installed(&mut self, payload: Value, app: AppId) {
        let Some(record) = raw::decode::<RawItemInstalled>(EventKind::ItemInstalled, payload)
        else {
            return;
        };
        if record.app != app {
            tracing::trace!(event_app = %record.app, "item install for another app; dropped");
            return;
        }
        self.item_installed.invoke(record.into());
    }

    /// Delivers a download broadcast if it belongs to the running
    /// application and succeeded.
    pub(crate) fn deliver_item_downloaded(&mut self, payload: Value, app: AppId) {
        let Some(record) = raw::decode::<RawItemDownloaded>(EventKind::ItemDownloaded, payload)
        else {
            return;
        };
        if record.app != app || !record.result_code().is_ok() {
            tracing::trace!(
                event_app = %record.app,
                result = %record.result_code(),
                "item download broadcast filtered out"
            );
            return;
        }
        self.item_downloaded.invoke(record.into());
    }
}
