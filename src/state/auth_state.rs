// ============================================================================
// AUTH STATE - The single session container
// ============================================================================

use std::fmt;

use crate::models::{AuthPayload, Employee, Passenger, Position, User, UserRole};
use crate::state::reactivity::ReactiveState;

/// Role used to pick a dashboard. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PresentationRole {
    Passenger,
    Staff,
    Admin,
    Crew,
    /// Authenticated with a role the client has no dashboard for
    Unknown(String),
}

impl PresentationRole {
    /// Employee payload wins: `TICKETING` desks are staff, every other
    /// position is crew. Without one the server role is used, lowercased.
    pub fn derive(role: &UserRole, position: Option<&Position>) -> Self {
        match position {
            Some(position) if position.is_ticketing() => Self::Staff,
            Some(_) => Self::Crew,
            None => match role.as_str().to_lowercase().as_str() {
                "passenger" => Self::Passenger,
                "staff" => Self::Staff,
                "admin" => Self::Admin,
                "crew" => Self::Crew,
                other => Self::Unknown(other.to_string()),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Passenger => "passenger",
            Self::Staff => "staff",
            Self::Admin => "admin",
            Self::Crew => "crew",
            Self::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for PresentationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated identity plus its token pair
#[derive(Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
    pub employee: Option<Employee>,
    pub passenger: Option<Passenger>,
}

impl Session {
    pub fn role(&self) -> PresentationRole {
        PresentationRole::derive(
            &self.user.role,
            self.employee.as_ref().map(|employee| &employee.position),
        )
    }

    pub fn display_name(&self) -> &str {
        if let Some(employee) = self.employee.as_ref().filter(|e| !e.full_name.is_empty()) {
            return &employee.full_name;
        }
        if let Some(passenger) = self.passenger.as_ref().filter(|p| !p.full_name.is_empty()) {
            return &passenger.full_name;
        }
        &self.user.username
    }
}

impl From<AuthPayload> for Session {
    fn from(payload: AuthPayload) -> Self {
        Self {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
            user: payload.user,
            employee: payload.employee,
            passenger: payload.passenger,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("employee", &self.employee)
            .field("passenger", &self.passenger)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthStatus {
    /// Startup, before `restore()` has settled
    #[default]
    Restoring,
    Unauthenticated,
    Authenticated(Session),
}

impl AuthStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Restoring)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Process-wide authentication state.
///
/// Readable from everywhere; written only by the session view-model.
#[derive(Clone, Default)]
pub struct AuthState {
    status: ReactiveState<AuthStatus>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_settled(&self) -> bool {
        self.status.with(AuthStatus::is_settled)
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.with(|status| status.session().is_some())
    }

    pub fn session(&self) -> Option<Session> {
        self.status.with(|status| status.session().cloned())
    }

    pub fn user(&self) -> Option<User> {
        self.status.with(|status| status.session().map(|s| s.user.clone()))
    }

    pub fn employee(&self) -> Option<Employee> {
        self.status
            .with(|status| status.session().and_then(|s| s.employee.clone()))
    }

    pub fn passenger(&self) -> Option<Passenger> {
        self.status
            .with(|status| status.session().and_then(|s| s.passenger.clone()))
    }

    pub fn role(&self) -> Option<PresentationRole> {
        self.status.with(|status| status.session().map(Session::role))
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.status.subscribe(callback);
    }

    pub(crate) fn establish(&self, session: Session) {
        self.status.set(AuthStatus::Authenticated(session));
    }

    /// Moves to `Unauthenticated`; returns false when already there
    pub(crate) fn clear(&self) -> bool {
        self.status.update(|status| {
            if *status == AuthStatus::Unauthenticated {
                return false;
            }
            *status = AuthStatus::Unauthenticated;
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: 1,
            username: "alice".into(),
            email: None,
            phone: None,
            role,
            created_at: None,
        }
    }

    fn employee(position: Position) -> Employee {
        Employee {
            id: 9,
            employee_code: None,
            full_name: "Alice Tran".into(),
            position,
            flight_hours: 0.0,
            monthly_flight_hours: 0.0,
            assignments: Vec::new(),
        }
    }

    #[test]
    fn employee_position_decides_staff_or_crew() {
        for role in UserRole::all() {
            assert_eq!(
                PresentationRole::derive(&role, Some(&Position::Ticketing)),
                PresentationRole::Staff
            );
            assert_eq!(
                PresentationRole::derive(&role, Some(&Position::Pilot)),
                PresentationRole::Crew
            );
            assert_eq!(
                PresentationRole::derive(&role, Some(&Position::Other("MECHANIC".into()))),
                PresentationRole::Crew
            );
        }
    }

    #[test]
    fn without_employee_server_role_is_lowercased() {
        assert_eq!(
            PresentationRole::derive(&UserRole::Passenger, None),
            PresentationRole::Passenger
        );
        assert_eq!(PresentationRole::derive(&UserRole::Admin, None), PresentationRole::Admin);
        assert_eq!(PresentationRole::derive(&UserRole::Staff, None), PresentationRole::Staff);
        assert_eq!(PresentationRole::derive(&UserRole::Crew, None), PresentationRole::Crew);
        assert_eq!(
            PresentationRole::derive(&UserRole::Pilot, None),
            PresentationRole::Unknown("pilot".into())
        );
        assert_eq!(
            PresentationRole::derive(&UserRole::Other("AUDITOR".into()), None),
            PresentationRole::Unknown("auditor".into())
        );
    }

    #[test]
    fn session_role_tracks_current_fields() {
        let mut session = Session {
            access_token: "T".into(),
            refresh_token: "R".into(),
            user: user(UserRole::Staff),
            employee: Some(employee(Position::Ticketing)),
            passenger: None,
        };
        assert_eq!(session.role(), PresentationRole::Staff);
        assert_eq!(session.display_name(), "Alice Tran");

        session.employee = Some(employee(Position::FlightAttendant));
        assert_eq!(session.role(), PresentationRole::Crew);
    }

    #[test]
    fn clear_reports_whether_anything_changed() {
        let state = AuthState::new();
        assert!(!state.is_settled());
        assert!(state.clear());
        assert!(!state.clear());
        assert!(state.is_settled());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn debug_output_hides_tokens() {
        let session = Session {
            access_token: "secret-token".into(),
            refresh_token: "secret-refresh".into(),
            user: user(UserRole::Passenger),
            employee: None,
            passenger: None,
        };
        assert!(!format!("{:?}", session).contains("secret"));
    }
}
