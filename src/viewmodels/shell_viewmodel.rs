// ============================================================================
// SHELL VIEWMODEL - Which top-level view the app shows
// ============================================================================

use crate::state::{AuthStatus, PresentationRole};
use crate::utils::navigation::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellView {
    Splash,
    Login,
    Register,
    PassengerDashboard,
    StaffDashboard,
    AdminDashboard,
    CrewDashboard,
    /// Signed in with a role that has no dashboard
    UnknownRole(String),
}

impl ShellView {
    pub fn is_dashboard(&self) -> bool {
        matches!(
            self,
            Self::PassengerDashboard | Self::StaffDashboard | Self::AdminDashboard | Self::CrewDashboard
        )
    }
}

/// Pure dispatch on auth status and current route.
///
/// Nothing but the splash is shown until restore has settled.
pub fn select_view(status: &AuthStatus, route: Route) -> ShellView {
    match status {
        AuthStatus::Restoring => ShellView::Splash,
        AuthStatus::Unauthenticated => match route {
            Route::Register => ShellView::Register,
            _ => ShellView::Login,
        },
        AuthStatus::Authenticated(session) => match session.role() {
            PresentationRole::Passenger => ShellView::PassengerDashboard,
            PresentationRole::Staff => ShellView::StaffDashboard,
            PresentationRole::Admin => ShellView::AdminDashboard,
            PresentationRole::Crew => ShellView::CrewDashboard,
            PresentationRole::Unknown(role) => ShellView::UnknownRole(role),
        },
    }
}

/// Route the address bar should move to so it matches what is shown
pub fn redirect_for(status: &AuthStatus, route: Route) -> Option<Route> {
    let target = match status {
        AuthStatus::Restoring => return None,
        AuthStatus::Unauthenticated => match route {
            Route::Login | Route::Register => return None,
            _ => Route::Login,
        },
        AuthStatus::Authenticated(session) => Route::for_role(&session.role()),
    };
    (target != route).then_some(target)
}
