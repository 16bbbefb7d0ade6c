// ============================================================================
// APP STATE - Global application state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::CancelToken;
use crate::state::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "notice notice-info",
            Self::Success => "notice notice-success",
            Self::Error => "notice notice-error",
        }
    }
}

/// One-line banner above the current view
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Global application state
#[derive(Clone, Default)]
pub struct AppState {
    pub auth: AuthState,

    // UI State
    pub notice: Rc<RefCell<Option<Notice>>>,
    pub busy: Rc<RefCell<bool>>,

    /// Cancels the loads started by the view currently on screen
    view_token: Rc<RefCell<CancelToken>>,

    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to UI-level changes (notice, busy flag)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    pub fn show_notice(&self, kind: NoticeKind, text: impl Into<String>) {
        *self.notice.borrow_mut() = Some(Notice {
            kind,
            text: text.into(),
        });
        self.notify_subscribers();
    }

    pub fn clear_notice(&self) {
        if self.notice.borrow_mut().take().is_some() {
            self.notify_subscribers();
        }
    }

    pub fn set_busy(&self, busy: bool) {
        let changed = {
            let mut current = self.busy.borrow_mut();
            let changed = *current != busy;
            *current = busy;
            changed
        };
        if changed {
            self.notify_subscribers();
        }
    }

    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    /// Token for loads owned by the view being shown
    pub fn view_token(&self) -> CancelToken {
        self.view_token.borrow().clone()
    }

    /// Called on navigation: abandons the previous view's pending loads
    pub fn renew_view_token(&self) -> CancelToken {
        let fresh = CancelToken::new();
        let previous = self.view_token.replace(fresh.clone());
        previous.cancel();
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn navigation_cancels_previous_view_loads() {
        let state = AppState::new();
        let first = state.view_token();
        let second = state.renew_view_token();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(!state.view_token().is_cancelled());
    }

    #[test]
    fn notices_notify_only_on_change() {
        let state = AppState::new();
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        state.subscribe_to_changes(move || seen.set(seen.get() + 1));

        state.clear_notice();
        state.show_notice(NoticeKind::Error, "Seat already taken");
        state.clear_notice();
        state.set_busy(false);
        state.set_busy(true);

        assert_eq!(hits.get(), 3);
        assert!(state.is_busy());
    }
}
