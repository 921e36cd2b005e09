//! Leaderboard façade: find-result slot and delivery.

use serde_json::Value;

use crate::domain::event::LeaderboardFound;
use crate::domain::{CallbackSlot, EventKind};
use crate::facade::raw::{self, RawLeaderboardFound};

/// Callback slot and delivery rule for leaderboard lookups.
#[derive(Debug, Default)]
pub struct LeaderboardService {
    pub(crate) leaderboard_found: CallbackSlot<LeaderboardFound>,
}

impl LeaderboardService {
    /// Creates the façade with the slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a completed find request.
    ///
    /// A miss (`found == false`) is delivered too — the host decides what
    /// a missing leaderboard means.
    pub(crate) fn resolve_find(&mut self, payload: Value) {
        let Some(record) = raw::decode::<RawLeaderboardFound>(EventKind::LeaderboardFound, payload)
        else {
            return;
        };
        if !self.leaderboard_found.invoke(record.into()) {
            tracing::trace!("leaderboard_found resolved with no handler registered");
        }
    }
}
