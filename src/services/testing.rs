//! Scripted transport shared by the service unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::services::api_client::ApiClient;
use crate::services::transport::{HttpRequest, HttpResponse, Transport};
use crate::utils::storage::{MemoryStorage, TokenStorage};

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    pub responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
    pub sleeps: RefCell<Vec<Duration>>,
}

impl ScriptedTransport {
    pub fn with(responses: Vec<Result<HttpResponse, String>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_string()))
    }

    async fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}

/// 200 envelope around raw JSON `data`
pub(crate) fn ok(data: &str) -> Result<HttpResponse, String> {
    Ok(HttpResponse::new(
        200,
        format!(r#"{{"code":200,"message":"OK","data":{}}}"#, data),
    ))
}

/// Client against `http://api.test/v1` holding the token `T1`
pub(crate) fn signed_in_client(
    responses: Vec<Result<HttpResponse, String>>,
) -> (ApiClient<ScriptedTransport>, MemoryStorage) {
    let (client, storage) = client(responses);
    storage
        .store_tokens("T1", "R1")
        .expect("memory storage never fails");
    (client, storage)
}

/// Client against `http://api.test/v1` with empty storage
pub(crate) fn client(
    responses: Vec<Result<HttpResponse, String>>,
) -> (ApiClient<ScriptedTransport>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let client = ApiClient::new(
        "http://api.test/v1/",
        ScriptedTransport::with(responses),
        Rc::new(storage.clone()),
    )
    .with_retry(RetryConfig {
        attempts: 3,
        backoff_ms: 100,
    });
    (client, storage)
}
