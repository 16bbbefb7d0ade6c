// ============================================================================
// API CLIENT - Authenticated HTTP + envelope unwrapping
// ============================================================================
// Attaches the bearer token, unwraps `{code, message, data, errors, timestamp}`
// and reports 401s on the auth event channel. No business logic here; the
// per-resource methods live in the *_service modules.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::RetryConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::ApiEnvelope;
use crate::services::auth_events::{AuthEvent, AuthEvents};
use crate::services::query::encode_pairs;
use crate::services::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::utils::storage::TokenStorage;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Lets a caller abandon a request whose result it no longer needs.
/// Checked before every attempt and before the result is handed back.
#[derive(Clone, Default, Debug)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Whether a request carries the stored bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    Bearer,
    /// Login / registration: no token sent, and a 401 is a credential
    /// rejection for the caller, not a session expiry
    Anonymous,
}

pub struct ApiClient<T: Transport> {
    base_url: String,
    transport: T,
    storage: Rc<dyn TokenStorage>,
    events: AuthEvents,
    retry: RetryConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T, storage: Rc<dyn TokenStorage>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            storage,
            events: AuthEvents::new(),
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = RetryConfig {
            attempts: retry.attempts.max(1),
            ..retry
        };
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Channel on which 401 responses are announced
    pub fn events(&self) -> &AuthEvents {
        &self.events
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ------------------------------------------------------------------------
    // Verbs
    // ------------------------------------------------------------------------

    pub async fn get<R: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> ApiResult<R> {
        self.execute(Method::Get, path, query, None, Auth::Bearer, None).await
    }

    pub async fn get_cancellable<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        cancel: &CancelToken,
    ) -> ApiResult<R> {
        self.execute(Method::Get, path, query, None, Auth::Bearer, Some(cancel))
            .await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let body = serde_json::to_string(body)?;
        self.execute(Method::Post, path, &[], Some(body), Auth::Bearer, None)
            .await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let body = serde_json::to_string(body)?;
        self.execute(Method::Put, path, &[], Some(body), Auth::Bearer, None)
            .await
    }

    pub async fn patch<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<R> {
        let body = serde_json::to_string(body)?;
        self.execute(Method::Patch, path, &[], Some(body), Auth::Bearer, None)
            .await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(Method::Delete, path, &[], None, Auth::Bearer, None)
            .await
    }

    pub(crate) async fn post_anonymous<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        let body = serde_json::to_string(body)?;
        self.execute(Method::Post, path, &[], Some(body), Auth::Anonymous, None)
            .await
    }

    // ------------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------------

    pub(crate) fn url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&encode_pairs(query));
        }
        url
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<String>,
        auth: Auth,
        cancel: Option<&CancelToken>,
    ) -> ApiResult<R> {
        let url = self.url(path, query);
        let attempts = if method.is_retryable() {
            self.retry.attempts.max(1)
        } else {
            1
        };
        let is_cancelled = || cancel.map(CancelToken::is_cancelled).unwrap_or(false);

        let mut attempt = 0;
        loop {
            if is_cancelled() {
                return Err(ApiError::Cancelled);
            }
            attempt += 1;

            let result = self
                .send_once(method, &url, path, body.clone(), auth)
                .await;

            match result {
                Err(err) if err.is_transient() && attempt < attempts => {
                    let delay = self.backoff(attempt);
                    log::warn!(
                        "⚠️ [API] {} {} failed ({}), retry {}/{} in {}ms",
                        method,
                        path,
                        err,
                        attempt,
                        attempts - 1,
                        delay.as_millis()
                    );
                    self.transport.sleep(delay).await;
                }
                Err(err) => return Err(err),
                Ok(_) if is_cancelled() => return Err(ApiError::Cancelled),
                Ok(response) => return unwrap_envelope(&response),
            }
        }
    }

    /// `backoff_ms * 2^(attempt - 1)`
    fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(u64::from(self.retry.backoff_ms).saturating_mul(factor))
    }

    async fn send_once(
        &self,
        method: Method,
        url: &str,
        path: &str,
        body: Option<String>,
        auth: Auth,
    ) -> ApiResult<HttpResponse> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let mut request = HttpRequest::new(method, url)
            .with_header("Accept", "application/json")
            .with_header("X-Request-Id", request_id.clone());

        if auth == Auth::Bearer {
            if let Some(token) = self.storage.access_token() {
                request = request.with_header("Authorization", format!("Bearer {}", token));
            }
        }
        if let Some(body) = body {
            request = request.with_json_body(body);
        }

        log::debug!("➡️ [API] {} {} ({})", method, path, request_id);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [API] {} {} ({}): {}", method, path, request_id, e);
            ApiError::Network(e)
        })?;

        log::debug!(
            "⬅️ [API] {} {} ({}) → {}",
            method,
            path,
            request_id,
            response.status
        );

        if response.status == 401 && auth == Auth::Bearer {
            log::warn!(
                "🔒 [API] {} {} ({}) rejected with 401, announcing session expiry",
                method,
                path,
                request_id
            );
            self.events.emit(AuthEvent::Rejected);
            return Err(ApiError::Unauthorized);
        }

        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                message: error_message(&response.body),
            });
        }

        Ok(response)
    }
}

/// Turns a 2xx body into the `data` payload
fn unwrap_envelope<R: DeserializeOwned>(response: &HttpResponse) -> ApiResult<R> {
    let envelope: ApiEnvelope<Value> = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Decode(format!("invalid envelope: {}", e)))?;

    if envelope.is_failure() {
        return Err(ApiError::Api {
            code: envelope.code,
            message: envelope.message,
            errors: envelope.errors.unwrap_or_default(),
        });
    }

    let data = envelope.data.unwrap_or(Value::Null);
    let missing = data.is_null();
    serde_json::from_value(data).map_err(|e| {
        if missing {
            ApiError::Decode("response carried no data".to_string())
        } else {
            ApiError::Decode(e.to_string())
        }
    })
}

/// Best human-readable message out of an error body
fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiEnvelope<Value>>(body) {
        let details = envelope.errors.unwrap_or_default();
        return match (envelope.message.is_empty(), details.is_empty()) {
            (false, _) => envelope.message,
            (true, false) => details.join("; "),
            (true, true) => String::new(),
        };
    }
    body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::services::testing::{client, ok};

    #[tokio::test]
    async fn bearer_token_and_envelope_data() {
        let (api, storage) = client(vec![ok("[1,2,3]")]);
        storage.store_tokens("T1", "R1").unwrap();

        let data: Vec<u32> = api
            .get("/flights", &[("page".to_string(), "0".to_string())])
            .await
            .unwrap();
        assert_eq!(data, vec![1, 2, 3]);

        let requests = api.transport().requests.borrow();
        assert_eq!(requests[0].url, "http://api.test/v1/flights?page=0");
        assert_eq!(requests[0].header("Authorization"), Some("Bearer T1"));
        assert!(requests[0].header("X-Request-Id").is_some());
    }

    #[tokio::test]
    async fn no_token_means_no_authorization_header() {
        let (api, _storage) = client(vec![ok("null")]);
        let _: () = api.get("/statistics/overview", &[]).await.unwrap();
        assert_eq!(api.transport().requests.borrow()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn unauthorized_emits_rejection_once_per_response() {
        let (api, storage) = client(vec![Ok(HttpResponse::new(401, ""))]);
        storage.store_tokens("stale", "R").unwrap();
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        api.events().subscribe(move |_| seen.set(seen.get() + 1));

        let err = api.get::<Value>("/auth/me", &[]).await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(hits.get(), 1);
        // 401 is never retried
        assert_eq!(api.transport().requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn anonymous_401_is_a_plain_error() {
        let (api, _storage) = client(vec![Ok(HttpResponse::new(
            401,
            r#"{"code":401,"message":"Invalid username or password","data":null}"#,
        ))]);
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        api.events().subscribe(move |_| seen.set(seen.get() + 1));

        let err = api
            .post_anonymous::<_, Value>("/auth/login", &serde_json::json!({"username": "x"}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 401,
                message: "Invalid username or password".to_string()
            }
        );
        assert_eq!(hits.get(), 0);
        assert_eq!(api.transport().requests.borrow()[0].header("Authorization"), None);
    }

    #[tokio::test]
    async fn transient_get_failures_retry_with_backoff() {
        let (api, _storage) = client(vec![
            Err("connection reset".to_string()),
            Ok(HttpResponse::new(503, "busy")),
            ok("7"),
        ]);
        let value: u32 = api.get("/flights/7", &[]).await.unwrap();
        assert_eq!(value, 7);
        assert_eq!(api.transport().requests.borrow().len(), 3);
        assert_eq!(
            *api.transport().sleeps.borrow(),
            vec![Duration::from_millis(100), Duration::from_millis(200)]
        );
    }

    #[tokio::test]
    async fn retries_stop_at_the_attempt_limit() {
        let (api, _storage) = client(vec![
            Err("down".to_string()),
            Err("down".to_string()),
            Err("down".to_string()),
            ok("1"),
        ]);
        let err = api.get::<u32>("/flights", &[]).await.unwrap_err();
        assert_eq!(err, ApiError::Network("down".to_string()));
        assert_eq!(api.transport().requests.borrow().len(), 3);
    }

    #[tokio::test]
    async fn client_errors_and_mutations_are_not_retried() {
        let (api, _storage) = client(vec![
            Ok(HttpResponse::new(404, r#"{"code":404,"message":"Flight not found"}"#)),
            Err("down".to_string()),
        ]);
        let err = api.get::<Value>("/flights/99", &[]).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 404,
                message: "Flight not found".to_string()
            }
        );

        let err = api
            .post::<_, Value>("/tickets", &serde_json::json!({"flightId": 1}))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(api.transport().requests.borrow().len(), 2);
        assert!(api.transport().sleeps.borrow().is_empty());
    }

    #[tokio::test]
    async fn failure_code_inside_2xx_envelope() {
        let (api, _storage) = client(vec![Ok(HttpResponse::new(
            200,
            r#"{"code":409,"message":"Seat already taken","data":null,"errors":["seat 12A"]}"#,
        ))]);
        let err = api
            .post::<_, Value>("/tickets", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Api {
                code: 409,
                message: "Seat already taken".to_string(),
                errors: vec!["seat 12A".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn missing_data_is_a_decode_error_unless_optional() {
        let (api, _storage) = client(vec![ok("null"), ok("null")]);
        let err = api.get::<Vec<u32>>("/flights", &[]).await.unwrap_err();
        assert_eq!(err, ApiError::Decode("response carried no data".to_string()));

        let maybe: Option<u32> = api.get("/flights/1", &[]).await.unwrap();
        assert_eq!(maybe, None);
    }

    #[tokio::test]
    async fn cancelled_token_short_circuits() {
        let (api, _storage) = client(vec![ok("1")]);
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = api
            .get_cancellable::<u32>("/flights", &[], &cancel)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Cancelled);
        assert!(api.transport().requests.borrow().is_empty());
    }

    #[test]
    fn error_message_prefers_envelope_fields() {
        assert_eq!(error_message(r#"{"code":400,"message":"Bad input"}"#), "Bad input");
        assert_eq!(
            error_message(r#"{"code":400,"message":"","errors":["a","b"]}"#),
            "a; b"
        );
        assert_eq!(error_message("  gateway timeout  "), "gateway timeout");
    }
}
