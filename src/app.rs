// ============================================================================
// APP - Browser wiring and the top-level render
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, get_element_by_id, on_popstate};
use crate::services::{ApiClient, FetchTransport};
use crate::state::AppState;
use crate::utils::navigation::{HistoryNavigator, Navigator, Route};
use crate::utils::storage::{LocalTokenStorage, TokenStorage};
use crate::viewmodels::{redirect_for, select_view, SessionViewModel};
use crate::views::app::update_notice;
use crate::views::render_app;

pub type Api = ApiClient<FetchTransport>;

/// Everything a view needs; cheap to clone into event handlers
#[derive(Clone)]
pub struct AppContext {
    pub state: AppState,
    pub session: Rc<SessionViewModel<FetchTransport>>,
    pub navigator: Rc<HistoryNavigator>,
}

impl AppContext {
    pub fn api(&self) -> Rc<Api> {
        self.session.api().clone()
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }
}

pub struct App {
    context: AppContext,
    root: Element,
    last_route: Cell<Option<Route>>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let storage: Rc<dyn TokenStorage> = Rc::new(LocalTokenStorage::new());
        let api = ApiClient::new(CONFIG.api_base_url(), FetchTransport::new(), storage.clone())
            .with_retry(CONFIG.retry);
        let state = AppState::new();
        let navigator = Rc::new(HistoryNavigator::new());
        let session = SessionViewModel::new(
            Rc::new(api),
            state.auth.clone(),
            storage,
            navigator.clone(),
        );

        state.auth.subscribe(crate::schedule_rerender);
        state.subscribe_to_changes(|| {
            crate::with_app(|app| {
                if let Err(e) = update_notice(&app.context) {
                    log::error!("❌ [SHELL] Notice update failed: {:?}", e);
                }
            });
        });
        on_popstate(|_| crate::schedule_rerender())?;

        Ok(Self {
            context: AppContext {
                state,
                session: Rc::new(session),
                navigator,
            },
            root,
            last_route: Cell::new(None),
        })
    }

    /// Settles the session from the stored token; the shell shows only the
    /// splash until this finishes
    pub fn start_restore() {
        let Some(context) = crate::with_app(|app| app.context.clone()) else {
            return;
        };
        spawn_local(async move {
            context.session.restore().await;
        });
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let status = self.context.state.auth.status();
        let mut route = self.context.navigator.current();

        if let Some(target) = redirect_for(&status, route) {
            log::debug!("🧭 [SHELL] {} → {}", route.path(), target.path());
            self.context.navigate(target);
            route = target;
        }

        if self.last_route.replace(Some(route)) != Some(route) {
            self.context.state.renew_view_token();
        }

        let view = select_view(&status, route);
        log::debug!("🎬 [SHELL] Rendering {:?} at {}", view, route.path());

        clear_children(&self.root);
        let content = render_app(&self.context, &view)?;
        append_child(&self.root, &content)
    }
}
