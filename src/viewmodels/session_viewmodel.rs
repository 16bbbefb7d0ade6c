// ============================================================================
// SESSION VIEWMODEL - Restore / login / logout and 401 handling
// ============================================================================
// The only writer of the session state and of the stored tokens.
// ============================================================================

use std::rc::Rc;

use crate::error::{ApiError, ApiResult};
use crate::models::{AuthPayload, LoginRequest};
use crate::services::{ApiClient, AuthEvent, Transport};
use crate::state::{AuthState, PresentationRole, Session};
use crate::utils::navigation::{Navigator, Route};
use crate::utils::storage::TokenStorage;

pub struct SessionViewModel<T: Transport> {
    api: Rc<ApiClient<T>>,
    state: AuthState,
    storage: Rc<dyn TokenStorage>,
    navigator: Rc<dyn Navigator>,
}

impl<T: Transport> SessionViewModel<T> {
    /// Wires the 401 handler onto the client's auth events. Build one per
    /// client; every instance adds its own listener.
    pub fn new(
        api: Rc<ApiClient<T>>,
        state: AuthState,
        storage: Rc<dyn TokenStorage>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        {
            let state = state.clone();
            let storage = storage.clone();
            let navigator = navigator.clone();
            api.events().subscribe(move |event| match event {
                AuthEvent::Rejected => {
                    if expire_session(&state, storage.as_ref(), navigator.as_ref()) {
                        log::warn!("🔒 [SESSION] Session rejected by the server, signed out");
                    }
                }
            });
        }

        Self {
            api,
            state,
            storage,
            navigator,
        }
    }

    pub fn api(&self) -> &Rc<ApiClient<T>> {
        &self.api
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Startup check of the stored token. Never surfaces an error: any
    /// failure ends signed out.
    pub async fn restore(&self) {
        if self.state.is_settled() {
            return;
        }

        let Some(stored_access) = self.storage.access_token() else {
            log::info!("🔓 [SESSION] No stored token, starting signed out");
            self.state.clear();
            return;
        };

        log::info!("🔄 [SESSION] Restoring session from stored token");
        match self.api.me().await {
            Ok(payload) => {
                if self.state.is_settled() {
                    log::debug!("🔄 [SESSION] Session settled while restoring, result dropped");
                    return;
                }
                let session = self.adopt_payload(payload, stored_access);
                log::info!(
                    "✅ [SESSION] Restored {} as {}",
                    session.user.username,
                    session.role()
                );
                self.state.establish(session);
            }
            Err(ApiError::Unauthorized) => {
                // the rejection listener already cleared the session
                expire_session(&self.state, self.storage.as_ref(), self.navigator.as_ref());
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] Restore failed, signing out: {}", e);
                expire_session(&self.state, self.storage.as_ref(), self.navigator.as_ref());
            }
        }
    }

    /// Signs in and lands on the dashboard of the derived role.
    ///
    /// On failure the session stays exactly as it was. A failed token write
    /// is a failure too.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<PresentationRole> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "Please enter your username and password".to_string(),
            ));
        }

        let payload = self
            .api
            .login(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await
            .map_err(|e| {
                log::warn!("❌ [SESSION] Login failed for {}: {}", username, e);
                e
            })?;

        if payload.access_token.is_empty() {
            return Err(ApiError::Decode(
                "login response carried no access token".to_string(),
            ));
        }

        // every later request reads its bearer token from storage
        self.storage
            .store_tokens(&payload.access_token, &payload.refresh_token)
            .map_err(|e| {
                log::error!("❌ [SESSION] Could not persist tokens, login abandoned: {}", e);
                ApiError::Storage(e)
            })?;

        let session = Session::from(payload);
        let role = session.role();
        log::info!("✅ [SESSION] Signed in {} as {}", session.user.username, role);
        self.state.establish(session);
        self.navigator.navigate(Route::for_role(&role));
        Ok(role)
    }

    /// Idempotent; always ends on the login route
    pub fn logout(&self) {
        log::info!("👋 [SESSION] Logging out");
        if let Err(e) = self.storage.clear_tokens() {
            log::error!("❌ [SESSION] Could not clear stored tokens: {}", e);
        }
        self.state.clear();
        self.navigator.navigate(Route::Login);
    }

    /// Builds the restored session, keeping the stored tokens when the
    /// profile response does not rotate them
    fn adopt_payload(&self, mut payload: AuthPayload, stored_access: String) -> Session {
        if payload.access_token.is_empty() {
            payload.access_token = stored_access;
            payload.refresh_token = self.storage.refresh_token().unwrap_or_default();
        } else if let Err(e) = self
            .storage
            .store_tokens(&payload.access_token, &payload.refresh_token)
        {
            log::error!("❌ [SESSION] Could not persist refreshed tokens: {}", e);
        }
        Session::from(payload)
    }
}

/// Clears tokens and session and sends the user to the login route.
/// A second call finds nothing to clear and does nothing, which keeps
/// concurrent 401s down to one redirect.
fn expire_session(state: &AuthState, storage: &dyn TokenStorage, navigator: &dyn Navigator) -> bool {
    let had_tokens = storage.access_token().is_some() || storage.refresh_token().is_some();
    if had_tokens {
        if let Err(e) = storage.clear_tokens() {
            log::error!("❌ [SESSION] Could not clear stored tokens: {}", e);
        }
    }
    let changed = state.clear();
    if had_tokens || changed {
        navigator.navigate(Route::Login);
        true
    } else {
        false
    }
}
