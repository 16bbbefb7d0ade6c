//! Test doubles for the browser ports.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use skydesk::services::{ApiClient, HttpRequest, HttpResponse, Transport};
use skydesk::state::AuthState;
use skydesk::utils::{MemoryStorage, Navigator, Route};
use skydesk::viewmodels::SessionViewModel;

/// Answers requests from a queue, yielding once so concurrent calls
/// interleave the way they do in the browser
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<HttpResponse>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(request);
        tokio::task::yield_now().await;
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| "connection refused".to_string())
    }

    async fn sleep(&self, _duration: Duration) {}
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: RefCell<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }

    fn current(&self) -> Route {
        self.routes.borrow().last().copied().unwrap_or(Route::Root)
    }
}

pub struct Harness {
    pub vm: SessionViewModel<FakeTransport>,
    pub state: AuthState,
    pub storage: MemoryStorage,
    pub navigator: Rc<RecordingNavigator>,
}

impl Harness {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        let storage = MemoryStorage::new();
        let state = AuthState::new();
        let navigator = Rc::new(RecordingNavigator::default());
        let api = ApiClient::new(
            "https://api.skydesk.test/api",
            FakeTransport::new(responses),
            Rc::new(storage.clone()),
        );
        let vm = SessionViewModel::new(
            Rc::new(api),
            state.clone(),
            Rc::new(storage.clone()),
            navigator.clone(),
        );
        Self {
            vm,
            state,
            storage,
            navigator,
        }
    }

    pub fn routes(&self) -> Vec<Route> {
        self.navigator.routes.borrow().clone()
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.vm.api().transport().requests.borrow().clone()
    }
}

pub fn envelope(data: &str) -> HttpResponse {
    HttpResponse::new(200, format!(r#"{{"code":200,"message":"OK","data":{}}}"#, data))
}

pub fn rejected(message: &str) -> HttpResponse {
    HttpResponse::new(401, format!(r#"{{"code":401,"message":"{}"}}"#, message))
}

pub fn auth_payload(token: &str, user: &str, employee: Option<&str>) -> String {
    format!(
        r#"{{"accessToken":"{}","refreshToken":"R{}","user":{},"employee":{}}}"#,
        token,
        &token[1..],
        user,
        employee.unwrap_or("null")
    )
}
