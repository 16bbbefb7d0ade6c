// ============================================================================
// TOKEN STORAGE - Durable key/value store for the session tokens
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// String key/value store that survives a page reload.
///
/// Writers: the session view-model (login, logout, restore) and its
/// rejection handler. Everyone else only reads.
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;

    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn refresh_token(&self) -> Option<String> {
        self.get(REFRESH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn store_tokens(&self, access_token: &str, refresh_token: &str) -> Result<(), String> {
        self.set(ACCESS_TOKEN_KEY, access_token)?;
        self.set(REFRESH_TOKEN_KEY, refresh_token)
    }

    /// Removes both tokens; keeps going if the first removal fails
    fn clear_tokens(&self) -> Result<(), String> {
        let access = self.remove(ACCESS_TOKEN_KEY);
        let refresh = self.remove(REFRESH_TOKEN_KEY);
        access.and(refresh)
    }
}

/// In-memory store, used when `localStorage` is unavailable (private mode,
/// storage disabled) and in tests.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalTokenStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{MemoryStorage, TokenStorage};

    /// `window.localStorage`, raw strings (no JSON quoting) so the keys stay
    /// readable by other tooling. Falls back to memory when unavailable.
    #[derive(Clone, Default)]
    pub struct LocalTokenStorage {
        fallback: MemoryStorage,
    }

    impl LocalTokenStorage {
        pub fn new() -> Self {
            if Self::raw().is_none() {
                log::warn!("⚠️ [STORAGE] localStorage unavailable, tokens will not survive a reload");
            }
            Self::default()
        }

        fn raw() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl TokenStorage for LocalTokenStorage {
        fn get(&self, key: &str) -> Option<String> {
            match Self::raw() {
                Some(storage) => storage.get_item(key).ok().flatten(),
                None => self.fallback.get(key),
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            match Self::raw() {
                Some(storage) => storage
                    .set_item(key, value)
                    .map_err(|_| format!("Could not write '{}' to localStorage", key)),
                None => self.fallback.set(key, value),
            }
        }

        fn remove(&self, key: &str) -> Result<(), String> {
            match Self::raw() {
                Some(storage) => storage
                    .remove_item(key)
                    .map_err(|_| format!("Could not remove '{}' from localStorage", key)),
                None => self.fallback.remove(key),
            }
        }
    }
}
