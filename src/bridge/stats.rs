//! Stats surface: handler registration, stats requests, and the
//! achievement/stat pass-throughs.

use super::Bridge;
use crate::domain::EventKind;
use crate::domain::event::{GlobalStatsReceived, UserStatsReceived};
use crate::facade::PlatformFacade;

impl<F: PlatformFacade> Bridge<F> {
    /// Registers the handler for user-stats arrivals (including the
    /// synthetic resync after a rejected store).
    pub fn set_user_stats_received_handler(
        &mut self,
        handler: impl FnMut(UserStatsReceived) + 'static,
    ) {
        self.stats.user_stats_received.set(handler);
    }

    /// Clears the user-stats handler.
    pub fn clear_user_stats_received_handler(&mut self) {
        self.stats.user_stats_received.clear();
    }

    /// Registers the handler for global-stats results.
    pub fn set_global_stats_received_handler(
        &mut self,
        handler: impl FnMut(GlobalStatsReceived) + 'static,
    ) {
        self.stats.global_stats_received.set(handler);
    }

    /// Clears the global-stats handler.
    pub fn clear_global_stats_received_handler(&mut self) {
        self.stats.global_stats_received.clear();
    }

    /// Requests the current user's stats from the backend; arrival
    /// surfaces at the user-stats handler. Requires a signed-in user.
    pub fn request_current_stats(&mut self) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        if !facade.logged_on() {
            return false;
        }
        facade.request_current_stats()
    }

    /// Requests aggregated global stats for the trailing `history_days`;
    /// the result arrives at the global-stats handler.
    pub fn request_global_stats(&mut self, history_days: u32) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        let request = facade.request_global_stats(history_days);
        self.tracker.track(request, EventKind::GlobalStatsReceived);
        true
    }

    /// Persists locally staged stats and achievements to the backend.
    pub fn store_stats(&mut self) -> bool {
        self.facade
            .as_mut()
            .is_some_and(PlatformFacade::store_stats)
    }

    /// Resets all stats, optionally including achievements.
    pub fn reset_all_stats(&mut self, achievements_too: bool) -> bool {
        self.facade
            .as_mut()
            .is_some_and(|facade| facade.reset_all_stats(achievements_too))
    }

    /// `true` when the named achievement is unlocked.
    pub fn achievement(&self, name: &str) -> bool {
        self.facade
            .as_ref()
            .is_some_and(|facade| facade.achievement(name))
    }

    /// Unlocks the named achievement (staged until stats are stored).
    pub fn set_achievement(&mut self, name: &str) -> bool {
        self.facade
            .as_mut()
            .is_some_and(|facade| facade.set_achievement(name))
    }

    /// Relocks the named achievement.
    pub fn clear_achievement(&mut self, name: &str) -> bool {
        self.facade
            .as_mut()
            .is_some_and(|facade| facade.clear_achievement(name))
    }

    /// Shows a progress notification for an achievement.
    pub fn indicate_achievement_progress(&mut self, name: &str, current: u32, max: u32) -> bool {
        self.facade
            .as_mut()
            .is_some_and(|facade| facade.indicate_achievement_progress(name, current, max))
    }

    /// Current value of an integer stat.
    pub fn stat_i32(&self, name: &str) -> i32 {
        self.facade
            .as_ref()
            .map_or(0, |facade| facade.stat_i32(name))
    }

    /// Current value of a float stat.
    pub fn stat_f32(&self, name: &str) -> f32 {
        self.facade
            .as_ref()
            .map_or(0.0, |facade| facade.stat_f32(name))
    }

    /// Stages a new value for an integer stat.
    pub fn set_stat_i32(&mut self, name: &str, value: i32) -> bool {
        self.facade
            .as_mut()
            .is_some_and(|facade| facade.set_stat_i32(name, value))
    }

    /// Stages a new value for a float stat.
    pub fn set_stat_f32(&mut self, name: &str, value: f32) -> bool {
        self.facade
            .as_mut()
            .is_some_and(|facade| facade.set_stat_f32(name, value))
    }

    /// Aggregated global value of an integer stat.
    pub fn global_stat_i64(&self, name: &str) -> i64 {
        self.facade
            .as_ref()
            .map_or(0, |facade| facade.global_stat_i64(name))
    }

    /// Aggregated global value of a float stat.
    pub fn global_stat_f64(&self, name: &str) -> f64 {
        self.facade
            .as_ref()
            .map_or(0.0, |facade| facade.global_stat_f64(name))
    }
}
