use std::sync::Mutex;

/// Holder of the current session token.
///
/// The API layer deletes the token on 401 responses and on logout; everything
/// else only reads it.
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: String);
    fn delete_token(&self);
}

/// Process-local token store. The browser original kept the token in
/// localStorage; a desktop client keeps it for the lifetime of the session.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.lock().expect("token lock poisoned").clone()
    }

    fn set_token(&self, token: String) {
        *self.token.lock().expect("token lock poisoned") = Some(token);
    }

    fn delete_token(&self) {
        *self.token.lock().expect("token lock poisoned") = None;
    }
}
