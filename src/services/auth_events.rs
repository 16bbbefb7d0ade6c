// ============================================================================
// AUTH EVENTS - Transport → session owner notification channel
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// An authenticated request came back with HTTP 401
    Rejected,
}

type Listener = Rc<dyn Fn(AuthEvent)>;

/// Fan-out of authentication events. The HTTP client emits, the session
/// view-model listens; neither knows the other's internals.
#[derive(Clone, Default)]
pub struct AuthEvents {
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(AuthEvent) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn emit(&self, event: AuthEvent) {
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}
