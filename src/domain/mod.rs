//! Domain layer: identifiers, result codes, event records, and the two
//! bridge primitives — the callback slot and the one-shot call tracker.

pub mod enums;
pub mod event;
pub mod ids;
pub mod result_code;
pub mod slot;
pub mod tracker;

pub use enums::{
    FriendFlags, ItemFileType, ItemState, ItemVisibility, LobbyType, OverlayPosition, PersonaState,
    TextInputMode, TextLineMode, UpdateStatus,
};
pub use event::EventKind;
pub use ids::{
    AppId, LeaderboardHandle, LobbyId, PublishedFileId, RequestId, ScreenshotHandle, UpdateHandle,
    UserId,
};
pub use result_code::ResultCode;
pub use slot::CallbackSlot;
pub use tracker::CallTracker;
