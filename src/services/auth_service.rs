use crate::error::{ApiError, ApiResult};
use crate::models::{AuthPayload, LoginRequest, RegisterRequest, User};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

const AUTH_PATH: &str = "/auth";

impl<T: Transport> ApiClient<T> {
    /// `POST /auth/login`, sent without a bearer token
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthPayload> {
        log::info!("🔐 [AUTH] Signing in as {}", request.username);
        self.post_anonymous(&format!("{}/login", AUTH_PATH), request)
            .await
    }

    /// Profile behind the stored access token
    pub async fn me(&self) -> ApiResult<AuthPayload> {
        self.get(&format!("{}/me", AUTH_PATH), &[]).await
    }

    /// Creates a passenger account; does not sign in
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<User> {
        request.validate().map_err(ApiError::Validation)?;
        log::info!("📝 [AUTH] Registering {}", request.username);
        self.post_anonymous(&format!("{}/register", AUTH_PATH), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ApiError;
    use crate::models::{LoginRequest, RegisterRequest, UserRole};
    use crate::services::testing::{client, ok, signed_in_client};

    const PAYLOAD: &str = r#"{
        "accessToken": "T1",
        "refreshToken": "R1",
        "user": {"id": 1, "username": "alice", "role": "PASSENGER"},
        "passenger": {"id": 9, "fullName": "Alice Nguyen", "loyaltyPoints": 120}
    }"#;

    #[tokio::test]
    async fn login_posts_credentials_without_token() {
        let (api, _storage) = signed_in_client(vec![ok(PAYLOAD)]);
        let payload = api
            .login(&LoginRequest {
                username: "alice".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(payload.access_token, "T1");
        assert_eq!(payload.user.role, UserRole::Passenger);

        let request = api.transport().last_request();
        assert_eq!(request.url, "http://api.test/v1/auth/login");
        assert_eq!(request.header("Authorization"), None);
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["username"], "alice");
        assert_eq!(body["password"], "secret");
    }

    #[tokio::test]
    async fn me_sends_bearer_token() {
        let (api, _storage) = signed_in_client(vec![ok(PAYLOAD)]);
        let payload = api.me().await.unwrap();
        assert_eq!(payload.user.username, "alice");
        assert_eq!(
            api.transport().last_request().header("Authorization"),
            Some("Bearer T1")
        );
    }

    #[tokio::test]
    async fn invalid_registration_never_reaches_the_server() {
        let (api, _storage) = client(vec![]);
        let err = api
            .register(&RegisterRequest {
                username: "bob".to_string(),
                email: "not-an-email".to_string(),
                phone: "0900000000".to_string(),
                full_name: "Bob".to_string(),
                password: "longenough".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(api.transport().requests.borrow().is_empty());
    }
}
