//! # arcade-bridge
//!
//! Single-threaded callback bridge exposing a poll-driven game-platform SDK
//! (achievements, stats, workshop content, lobbies, overlay, friends, music,
//! screenshots) to a host program.
//!
//! The SDK surface lives behind the [`facade::PlatformFacade`] trait — this
//! crate never touches network or disk itself. Asynchronous SDK requests
//! resolve through two channels: one-shot call results matched by request
//! identifier, and unsolicited broadcast events matched by event kind. Both
//! are routed to single-handler callback slots the host registers, and all
//! delivery happens synchronously inside [`bridge::Bridge::pump`] on the
//! host's thread.
//!
//! ## Architecture
//!
//! ```text
//! Host program
//!     │  register handlers / issue requests / pump()
//!     ├── Bridge (bridge/)
//!     │       ├── CallTracker          one-shot watch list (domain/)
//!     │       ├── WorkshopService      slots + decode + filters (service/)
//!     │       ├── LeaderboardService
//!     │       ├── StatsService
//!     │       └── ShellService
//!     │
//!     └── PlatformFacade (facade/)
//!             └── vendor SDK (out of scope)
//! ```

pub mod bridge;
pub mod config;
pub mod domain;
pub mod error;
pub mod facade;
pub mod service;
