//! Host-facing bridge context and drive loop.
//!
//! [`Bridge`] is the explicit process-wide context the host threads
//! through every operation: it owns the facade, the one-shot watch list,
//! and the four domain façades. The host registers handlers, issues
//! requests, and calls [`Bridge::pump`] at a regular cadence; every
//! handler invocation happens synchronously inside that call, on the
//! calling thread.
//!
//! The whole bridge is single-threaded by design. Nothing here blocks,
//! locks, or spawns — any concurrency must be layered outside by the
//! host.

mod apps;
mod friends;
mod leaderboard;
mod matchmaking;
mod music;
mod shell;
mod stats;
mod user;
mod utils;
mod workshop;

use std::fmt;

use serde_json::Value;

use crate::config::BridgeConfig;
use crate::domain::{AppId, CallTracker, EventKind, RequestId};
use crate::facade::{FacadeNotice, PlatformFacade};
use crate::service::{LeaderboardService, ShellService, StatsService, WorkshopService};

/// Process-wide bridge context.
///
/// Constructed once at startup — with a facade when the platform client
/// is running, or via [`Bridge::without_facade`] when it is not, in which
/// case every operation returns its neutral value and [`Bridge::pump`]
/// is a no-op.
pub struct Bridge<F: PlatformFacade> {
    pub(crate) facade: Option<F>,
    pub(crate) config: BridgeConfig,
    pub(crate) tracker: CallTracker,
    pub(crate) workshop: WorkshopService,
    pub(crate) leaderboard: LeaderboardService,
    pub(crate) stats: StatsService,
    pub(crate) shell: ShellService,
}

impl<F: PlatformFacade> Bridge<F> {
    /// Creates a bridge driving the given facade.
    #[must_use]
    pub fn new(facade: F, config: BridgeConfig) -> Self {
        tracing::info!(app = %facade.app_id(), "bridge initialized");
        Self {
            facade: Some(facade),
            config,
            tracker: CallTracker::new(),
            workshop: WorkshopService::new(),
            leaderboard: LeaderboardService::new(),
            stats: StatsService::new(),
            shell: ShellService::new(),
        }
    }

    /// Creates a bridge with no facade attached.
    ///
    /// Handler registration still works; everything else degrades to
    /// neutral return values.
    #[must_use]
    pub fn without_facade(config: BridgeConfig) -> Self {
        tracing::info!("bridge initialized without a platform facade");
        Self {
            facade: None,
            config,
            tracker: CallTracker::new(),
            workshop: WorkshopService::new(),
            leaderboard: LeaderboardService::new(),
            stats: StatsService::new(),
            shell: ShellService::new(),
        }
    }

    /// `true` while a facade is attached.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.facade.is_some()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Releases the facade. Subsequent operations return neutral values;
    /// idempotent.
    pub fn shutdown(&mut self) {
        if let Some(mut facade) = self.facade.take() {
            facade.shutdown();
            tracing::info!("bridge shut down");
        }
    }

    /// Drains every ready completion and broadcast from the facade and
    /// routes each to its façade synchronously.
    ///
    /// Must be called at a regular cadence from a single thread; never
    /// blocks, returns immediately when nothing is ready.
    pub fn pump(&mut self) {
        let Some(facade) = self.facade.as_mut() else {
            return;
        };
        let app = facade.app_id();
        let notices = facade.poll();

        for notice in notices {
            match notice {
                FacadeNotice::Completion {
                    request,
                    payload,
                    io_failure,
                } => self.route_completion(request, payload, io_failure, app),
                FacadeNotice::Broadcast { kind, payload } => {
                    self.route_broadcast(kind, payload, app);
                }
            }
        }
    }

    /// Resolves one completed one-shot request.
    ///
    /// The watch entry is removed on the first observation, whatever the
    /// outcome — re-delivery never occurs. An I/O failure discards the
    /// payload silently: the local transport failed, so the result means
    /// nothing.
    fn route_completion(
        &mut self,
        request: RequestId,
        payload: Value,
        io_failure: bool,
        app: AppId,
    ) {
        let Some(kind) = self.tracker.resolve(request) else {
            tracing::trace!(%request, "completion for an unwatched request; dropped");
            return;
        };
        if io_failure {
            tracing::debug!(%request, kind = kind.as_str(), "completion lost to io failure");
            return;
        }
        match kind {
            EventKind::ItemCreated => self.workshop.resolve_item_created(payload),
            EventKind::ItemUpdated => self.workshop.resolve_item_updated(payload),
            EventKind::ItemDetails => self.workshop.resolve_item_details(payload),
            EventKind::ItemDeleted => self.workshop.resolve_item_deleted(payload),
            EventKind::LeaderboardFound => self.leaderboard.resolve_find(payload),
            EventKind::GlobalStatsReceived => self.stats.resolve_global_stats(payload, app),
            other => {
                tracing::debug!(kind = other.as_str(), "broadcast kind as completion; dropped");
            }
        }
    }

    /// Routes one unsolicited broadcast to the façade that owns its kind.
    fn route_broadcast(&mut self, kind: EventKind, payload: Value, app: AppId) {
        match kind {
            EventKind::ItemInstalled => self.workshop.deliver_item_installed(payload, app),
            EventKind::ItemDownloaded => self.workshop.deliver_item_downloaded(payload, app),
            EventKind::UserStatsReceived => self.stats.deliver_user_stats_received(payload, app),
            EventKind::UserStatsStored => self.stats.deliver_user_stats_stored(payload, app),
            EventKind::OverlayActivated => self.shell.deliver_overlay_activated(payload),
            EventKind::ScreenshotReady => self.shell.deliver_screenshot_ready(payload),
            other => {
                tracing::debug!(kind = other.as_str(), "one-shot kind as broadcast; dropped");
            }
        }
    }
}

impl<F: PlatformFacade> fmt::Debug for Bridge<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("available", &self.is_available())
            .field("tracker", &self.tracker)
            .field("workshop", &self.workshop)
            .field("leaderboard", &self.leaderboard)
            .field("stats", &self.stats)
            .field("shell", &self.shell)
            .finish_non_exhaustive()
    }
}
