use serde::{Deserialize, Serialize};

use crate::models::{Employee, Passenger, User};

#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body returned by both the login and the "who am I" endpoints
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    /// Empty when the profile endpoint does not rotate tokens
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub user: User,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub passenger: Option<Passenger>,
}

impl std::fmt::Debug for AuthPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthPayload")
            .field("user", &self.user)
            .field("employee", &self.employee)
            .field("passenger", &self.passenger)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub full_name: String,
    pub password: String,
}

impl RegisterRequest {
    /// Presence and format checks done before the form is sent
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().len() < 3 {
            return Err("Username must be at least 3 characters".to_string());
        }
        if !is_plausible_email(&self.email) {
            return Err("Please enter a valid email address".to_string());
        }
        let digits = self.phone.chars().filter(char::is_ascii_digit).count();
        if digits < 9 || !self.phone.chars().all(|c| c.is_ascii_digit() || "+- ".contains(c)) {
            return Err("Please enter a valid phone number".to_string());
        }
        if self.full_name.trim().is_empty() {
            return Err("Full name is required".to_string());
        }
        if self.password.len() < 6 {
            return Err("Password must be at least 6 characters".to_string());
        }
        Ok(())
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            username: "alice".into(),
            email: "alice@example.com".into(),
            phone: "+84 912 345 678".into(),
            full_name: "Alice Nguyen".into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn registration_field_checks() {
        let bad_email = RegisterRequest { email: "alice@".into(), ..request() };
        assert!(bad_email.validate().is_err());

        let bad_phone = RegisterRequest { phone: "12ab".into(), ..request() };
        assert!(bad_phone.validate().is_err());

        let short_password = RegisterRequest { password: "123".into(), ..request() };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let login = LoginRequest {
            username: "alice".into(),
            password: "secret".into(),
        };
        assert!(!format!("{:?}", login).contains("secret"));
    }
}
