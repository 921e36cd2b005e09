//! Watch list for in-flight one-shot requests.

use std::collections::HashMap;

use super::event::EventKind;
use super::ids::RequestId;

/// Associates in-flight request identifiers with the event kind that
/// consumes their single resolution.
///
/// At most one request is watched per event kind: tracking a new request
/// of a kind already present replaces the old entry, so the abandoned
/// request's eventual completion arrives unmatched and is dropped. An
/// entry is removed the moment [`CallTracker::resolve`] observes its
/// completion — re-delivery never occurs.
#[derive(Debug, Default)]
pub struct CallTracker {
    pending: HashMap<RequestId, EventKind>,
}

impl CallTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers interest in `request`'s completion.
    ///
    /// Any request already watched for the same `kind` is forgotten —
    /// last request wins.
    pub fn track(&mut self, request: RequestId, kind: EventKind) {
        self.pending.retain(|_, watched| *watched != kind);
        self.pending.insert(request, kind);
    }

    /// Removes and returns the event kind watched for `request`, or
    /// `None` if the request is not (or no longer) watched.
    pub fn resolve(&mut self, request: RequestId) -> Option<EventKind> {
        self.pending.remove(&request)
    }

    /// Returns `true` if a request of `kind` is currently in flight.
    #[must_use]
    pub fn is_watching(&self, kind: EventKind) -> bool {
        self.pending.values().any(|watched| *watched == kind)
    }

    /// Returns the number of in-flight watched requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no requests are in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
