use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role as reported by the server.
///
/// Unrecognised values are kept verbatim so a new server role degrades to
/// an explicit "unknown role" screen instead of a failed login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Passenger,
    Staff,
    Admin,
    Crew,
    Pilot,
    Other(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Passenger => "PASSENGER",
            Self::Staff => "STAFF",
            Self::Admin => "ADMIN",
            Self::Crew => "CREW",
            Self::Pilot => "PILOT",
            Self::Other(raw) => raw,
        }
    }

    pub fn all() -> [UserRole; 5] {
        [Self::Passenger, Self::Staff, Self::Admin, Self::Crew, Self::Pilot]
    }
}

impl From<String> for UserRole {
    fn from(raw: String) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "PASSENGER" => Self::Passenger,
            "STAFF" => Self::Staff,
            "ADMIN" => Self::Admin,
            "CREW" => Self::Crew,
            "PILOT" => Self::Pilot,
            _ => Self::Other(raw),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_and_unknown_values() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"username":"alice","email":"a@x.io","phone":null,"role":"PASSENGER"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Passenger);

        let odd: User =
            serde_json::from_str(r#"{"id":2,"username":"bob","role":"AUDITOR"}"#).unwrap();
        assert_eq!(odd.role, UserRole::Other("AUDITOR".to_string()));
        assert_eq!(serde_json::to_value(&odd.role).unwrap(), "AUDITOR");
    }
}
