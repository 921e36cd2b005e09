//! Platform result codes carried by completion and broadcast payloads.

use std::fmt;

/// Outcome code attached to most facade results.
///
/// The facade reports these as raw integers; [`ResultCode::from_raw`]
/// decodes the values the bridge dispatches on and keeps everything else
/// as [`ResultCode::Unknown`] so unrecognized codes survive a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    /// The operation succeeded.
    Ok,
    /// Generic failure.
    Failure,
    /// No connection to the platform backend.
    NoConnection,
    /// A supplied value broke a server-side constraint and was reverted.
    InvalidParam,
    /// The caller is not allowed to perform the operation.
    AccessDenied,
    /// The operation timed out.
    Timeout,
    /// A rate or count limit was exceeded.
    LimitExceeded,
    /// Any code this bridge does not dispatch on.
    Unknown(i32),
}

impl ResultCode {
    /// Decodes a raw facade code.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Ok,
            2 => Self::Failure,
            3 => Self::NoConnection,
            8 => Self::InvalidParam,
            15 => Self::AccessDenied,
            16 => Self::Timeout,
            25 => Self::LimitExceeded,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw facade code.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Ok => 1,
            Self::Failure => 2,
            Self::NoConnection => 3,
            Self::InvalidParam => 8,
            Self::AccessDenied => 15,
            Self::Timeout => 16,
            Self::LimitExceeded => 25,
            Self::Unknown(other) => other,
        }
    }

    /// Returns `true` for [`ResultCode::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Failure => write!(f, "failure"),
            Self::NoConnection => write!(f, "no_connection"),
            Self::InvalidParam => write!(f, "invalid_param"),
            Self::AccessDenied => write!(f, "access_denied"),
            Self::Timeout => write!(f, "timeout"),
            Self::LimitExceeded => write!(f, "limit_exceeded"),
            Self::Unknown(raw) => write!(f, "unknown({raw})"),
        }
    }
}
