//! Shell façade: overlay and screenshot broadcast slots.

use serde_json::Value;

use crate::domain::event::{OverlayActivated, ScreenshotReady};
use crate::domain::{CallbackSlot, EventKind};
use crate::facade::raw::{self, RawOverlayActivated, RawScreenshotReady};

/// Callback slots and delivery rules for platform shell events.
#[derive(Debug, Default)]
pub struct ShellService {
    pub(crate) overlay_activated: CallbackSlot<OverlayActivated>,
    pub(crate) screenshot_ready: CallbackSlot<ScreenshotReady>,
}

impl ShellService {
    /// Creates the façade with all slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers an overlay open/close broadcast. Unfiltered.
    pub(crate) fn deliver_overlay_activated(&mut self, payload: Value) {
        let Some(record) = raw::decode::<RawOverlayActivated>(EventKind::OverlayActivated, payload)
        else {
            return;
        };
        self.overlay_activated.invoke(record.into());
    }

    /// Delivers a screenshot-ready broadcast; failed captures are dropped.
    pub(crate) fn deliver_screenshot_ready(&mut self, payload: Value) {
        let Some(record) = raw::decode::<RawScreenshotReady>(EventKind::ScreenshotReady, payload)
        else {
            return;
        };
        if !record.result_code().is_ok() {
            tracing::debug!(result = %record.result_code(), "screenshot capture failed; dropped");
            return;
        }
        self.screenshot_ready.invoke(record.into());
    }
}
