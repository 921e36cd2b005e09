//! Leaderboard surface: handler registration and find requests.

use super::Bridge;
use crate::domain::EventKind;
use crate::domain::event::LeaderboardFound;
use crate::facade::PlatformFacade;

impl<F: PlatformFacade> Bridge<F> {
    /// Registers the handler for leaderboard find results.
    pub fn set_leaderboard_found_handler(
        &mut self,
        handler: impl FnMut(LeaderboardFound) + 'static,
    ) {
        self.leaderboard.leaderboard_found.set(handler);
    }

    /// Clears the leaderboard find handler.
    pub fn clear_leaderboard_found_handler(&mut self) {
        self.leaderboard.leaderboard_found.clear();
    }

    /// Looks up a leaderboard by name; the result (hit or miss) arrives
    /// at the find handler. Returns `false` when the facade is
    /// unavailable.
    pub fn find_leaderboard(&mut self, name: &str) -> bool {
        let Some(facade) = self.facade.as_mut() else {
            return false;
        };
        let request = facade.find_leaderboard(name);
        self.tracker.track(request, EventKind::LeaderboardFound);
        true
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::config::BridgeConfig;
    use crate::domain::{LeaderboardHandle, RequestId};
    use crate::facade::testing::FakeFacade;

    #[test]
    fn find_resolves_through_the_pump() {
        let mut bridge = Bridge::new(FakeFacade::new(), BridgeConfig::default());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        bridge.set_leaderboard_found_handler(move |event| sink.borrow_mut().push(event));

        assert!(bridge.find_leaderboard("Quickest Win"));
        if let Some(facade) = bridge.facade.as_mut() {
            assert_eq!(facade.issued, vec!["find_leaderboard:Quickest Win"]);
            facade.queue_completion(
                RequestId::new(1),
                json!({ "handle": 31, "found": true }),
                false,
            );
        }
        bridge.pump();

        let events = seen.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events.first().map(|e| e.handle),
            Some(LeaderboardHandle::new(31))
        );
    }
}
