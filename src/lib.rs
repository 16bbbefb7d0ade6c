// ============================================================================
// SKYDESK - AIRLINE OPERATIONS CLIENT (PURE RUST, MVVM)
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: session and shell logic
// - Services: API communication only
// - State: Rc<RefCell> state with subscribers
// - Models: shapes shared with the backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let level = if CONFIG.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Warn
        };
        wasm_logger::init(wasm_logger::Config::new(level));
        log::info!(
            "🚀 SkyDesk starting ({}, API {})",
            CONFIG.environment,
            CONFIG.api_base_url()
        );

        let app = App::new()?;
        app.render()?;
        APP.with(|cell| *cell.borrow_mut() = Some(app));

        App::start_restore();
        Ok(())
    }

    /// Full re-render of the current route
    pub fn rerender_app() {
        APP.with(|cell| {
            if let Some(app) = cell.borrow().as_ref() {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] {:?}", e);
                }
            } else {
                log::warn!("⚠️ [RERENDER] App not initialised");
            }
        });
    }

    /// Batches state changes from one tick into a single re-render
    pub fn schedule_rerender() {
        Timeout::new(0, rerender_app).forget();
    }

    /// Runs `f` against the live app, if any
    pub(crate) fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
        APP.with(|cell| cell.borrow().as_ref().map(f))
    }

    /// Callable from JavaScript (service worker update, devtools)
    #[wasm_bindgen]
    pub fn rerender_app_wasm() {
        rerender_app();
    }
}
