//! Single-handler callback storage cell.

use std::fmt;

/// One overwritable storage cell holding at most one registered handler
/// for one event kind.
///
/// Registering a new handler silently replaces the previous one; an empty
/// slot means "no delivery", never an error. Slots are mutated only by
/// explicit [`CallbackSlot::set`] / [`CallbackSlot::clear`] calls from the
/// host — dispatch never changes registration state.
pub struct CallbackSlot<T> {
    handler: Option<Box<dyn FnMut(T)>>,
}

impl<T> CallbackSlot<T> {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self { handler: None }
    }

    /// Stores `handler`, replacing any previous one.
    pub fn set<H>(&mut self, handler: H)
    where
        H: FnMut(T) + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// Empties the slot. Idempotent.
    pub fn clear(&mut self) {
        self.handler = None;
    }

    /// Returns `true` if a handler is currently registered.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.handler.is_some()
    }

    /// Invokes the registered handler synchronously with `event`.
    ///
    /// Returns `false` (and drops the event) when the slot is empty.
    pub fn invoke(&mut self, event: T) -> bool {
        match self.handler.as_mut() {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for CallbackSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CallbackSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("registered", &self.is_registered())
            .finish()
    }
}
