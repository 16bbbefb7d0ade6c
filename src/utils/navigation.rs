// ============================================================================
// NAVIGATION - Route table and the navigator port
// ============================================================================

use crate::state::auth_state::PresentationRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Register,
    Passenger,
    Staff,
    Admin,
    Crew,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Passenger => "/passenger",
            Self::Staff => "/staff",
            Self::Admin => "/admin",
            Self::Crew => "/crew",
        }
    }

    /// Unknown paths resolve to the root
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or("/");
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed {
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/passenger" => Self::Passenger,
            "/staff" => Self::Staff,
            "/admin" => Self::Admin,
            "/crew" => Self::Crew,
            _ => Self::Root,
        }
    }

    /// Landing route of a presentation role; unknown roles land on the root
    /// where the shell shows the error screen.
    pub fn for_role(role: &PresentationRole) -> Self {
        match role {
            PresentationRole::Passenger => Self::Passenger,
            PresentationRole::Staff => Self::Staff,
            PresentationRole::Admin => Self::Admin,
            PresentationRole::Crew => Self::Crew,
            PresentationRole::Unknown(_) => Self::Root,
        }
    }
}

/// Moves the client to another route.
pub trait Navigator {
    fn navigate(&self, route: Route);
    fn current(&self) -> Route;
}

#[cfg(target_arch = "wasm32")]
pub use browser::HistoryNavigator;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::JsValue;

    use super::{Navigator, Route};

    /// `history.pushState` navigator; re-renders the app after each move
    #[derive(Clone, Default)]
    pub struct HistoryNavigator;

    impl HistoryNavigator {
        pub fn new() -> Self {
            Self
        }
    }

    impl Navigator for HistoryNavigator {
        fn navigate(&self, route: Route) {
            let Some(window) = web_sys::window() else {
                return;
            };
            if self.current() != route {
                if let Ok(history) = window.history() {
                    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                        log::error!("❌ [NAV] pushState to {} failed: {:?}", route.path(), e);
                    }
                }
            }
            log::info!("🧭 [NAV] → {}", route.path());
            crate::schedule_rerender();
        }

        fn current(&self) -> Route {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .map(|path| Route::from_path(&path))
                .unwrap_or(Route::Root)
        }
    }
}
