use dioxus::prelude::*;
use shared_types::Session;

use crate::storage;

/// Global session state, provided via context at the app root.
///
/// This is the explicit session object the rest of the app reads; local
/// storage is only the persistence layer behind it.
#[derive(Clone, Copy)]
pub struct SessionState {
    pub current: Signal<Option<Session>>,
}

impl SessionState {
    /// Hydrate from storage so a reload keeps the user signed in.
    pub fn new() -> Self {
        Self {
            current: Signal::new(storage::load_session()),
        }
    }

    /// Whether the current session may enter the console.
    pub fn is_authorized(&self) -> bool {
        self.current.read().as_ref().is_some_and(Session::authorizes)
    }

    /// Bearer token for report requests. Non-reactive read.
    pub fn token(&self) -> Option<String> {
        self.current.peek().as_ref().map(|s| s.token.clone())
    }

    pub fn sign_in(&mut self, session: Session) {
        storage::save_session(&session);
        self.current.set(Some(session));
    }

    pub fn sign_out(&mut self) {
        tracing::info!("signing out");
        storage::clear_session();
        self.current.set(None);
    }
}

/// Hook to access the session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
