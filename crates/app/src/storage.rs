//! Typed persistence for the console session.
//!
//! The session lives in context (`SessionState`); this module is only the
//! layer that survives a page reload. Browser local storage on wasm32, an
//! in-memory map elsewhere (desktop builds, host tests).

use shared_types::{Role, Session};

const TOKEN_KEY: &str = "saletap.token";
const ROLE_KEY: &str = "saletap.role";

/// Persist the session for the next page load.
pub fn save_session(session: &Session) {
    backend::set(TOKEN_KEY, &session.token);
    backend::set(ROLE_KEY, session.role.as_str());
}

/// Read back a previously saved session. `None` when either key is absent.
pub fn load_session() -> Option<Session> {
    let token = backend::get(TOKEN_KEY)?;
    let role = backend::get(ROLE_KEY)?;
    Some(Session::new(token, Role::from_str_or_default(&role)))
}

/// Drop both keys.
pub fn clear_session() {
    backend::remove(TOKEN_KEY);
    backend::remove(ROLE_KEY);
}

#[cfg(target_arch = "wasm32")]
mod backend {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    pub fn set(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}
