//! Domain façades: each bundles the callback slots it owns plus the
//! decode-and-filter logic that turns raw facade payloads into handler
//! invocations. Request issuance and input validation live on the
//! host-facing [`crate::bridge::Bridge`] surface.

pub mod leaderboard;
pub mod shell;
pub mod stats;
pub mod workshop;

pub use leaderboard::LeaderboardService;
pub use shell::ShellService;
pub use stats::StatsService;
pub use workshop::WorkshopService;
