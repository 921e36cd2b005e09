//! Stats façade: user/global stats slots, session filters, and the
//! constraint-violation resync rule.

use serde_json::Value;

use crate::domain::event::{GlobalStatsReceived, UserStatsReceived};
use crate::domain::{AppId, CallbackSlot, EventKind, ResultCode};
use crate::facade::raw::{
    self, RawGlobalStatsReceived, RawUserStatsReceived, RawUserStatsStored,
};

/// Callback slots and delivery rules for stats events.
#[derive(Debug, Default)]
pub struct StatsService {
    pub(crate) user_stats_received: CallbackSlot<UserStatsReceived>,
    pub(crate) global_stats_received: CallbackSlot<GlobalStatsReceived>,
}

impl StatsService {
    /// Creates the façade with all slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a completed global-stats request.
    ///
    /// Delivered only when the outcome is ok **and** the embedded game
    /// identifier matches the running application — a mismatch behaves
    /// like an I/O failure.
    pub(crate) fn resolve_global_stats(&mut self, payload: Value, app: AppId) {
        let Some(record) =
            raw::decode::<RawGlobalStatsReceived>(EventKind::GlobalStatsReceived, payload)
        else {
            return;
        };
        if !record.result_code().is_ok() || record.game_id != u64::from(app.raw()) {
            tracing::debug!(
                game_id = record.game_id,
                result = %record.result_code(),
                "global stats result filtered out"
            );
            return;
        }
        if !self.global_stats_received.invoke(record.into()) {
            tracing::trace!("global_stats_received resolved with no handler registered");
        }
    }

    /// Delivers a user-stats broadcast for the running application.
    pub(crate) fn deliver_user_stats_received(&mut self, payload: Value, app: AppId) {
        let Some(record) =
            raw::decode::<RawUserStatsReceived>(EventKind::UserStatsReceived, payload)
        else {
            return;
        };
        self.dispatch_user_stats_received(record.into(), app);
    }

    /// Handles a stats-store broadcast.
    ///
    /// A store that came back with [`ResultCode::InvalidParam`] for the
    /// running application means one or more previously set values broke
    /// a backend constraint and were reverted. The host's local copy is
    /// now stale, so a synthetic [`UserStatsReceived`] with an ok outcome
    /// is dispatched to force a reload. Everything else is dropped — a
    /// successful store needs no reaction.
    pub(crate) fn deliver_user_stats_stored(&mut self, payload: Value, app: AppId) {
        let Some(record) = raw::decode::<RawUserStatsStored>(EventKind::UserStatsStored, payload)
        else {
            return;
        };
        let game_id = u64::from(app.raw());
        if record.game_id != game_id || record.result_code() != ResultCode::InvalidParam {
            return;
        }
        tracing::debug!("stored stats were reverted by the backend; forcing resync");
        self.dispatch_user_stats_received(
            UserStatsReceived {
                game_id,
                result: ResultCode::Ok,
            },
            app,
        );
    }

    /// Common delivery path for real and synthetic user-stats events:
    /// session and outcome filters, then the slot.
    fn dispatch_user_stats_received(&mut self, event: UserStatsReceived, app: AppId) {
        if event.game_id != u64::from(app.raw()) || !event.result.is_ok() {
            tracing::trace!(
                game_id = event.game_id,
                result = %event.result,
                "user stats event filtered out"
            );
            return;
        }
        self.user_stats_received.invoke(event);
    }
}
