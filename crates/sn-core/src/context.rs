//! Application context: the session store plus the plugins that act on it.

use tracing::warn;

use crate::error::Result;
use crate::models::{Credentials, User};
use crate::session::SessionStore;
use crate::traits::AuthProvider;

/// Constructed once per application session and handed to whatever drives
/// the views. There is no global instance.
pub struct AppContext {
    pub store: SessionStore,
    auth: Box<dyn AuthProvider>,
}

impl AppContext {
    pub fn new(store: SessionStore, auth: Box<dyn AuthProvider>) -> Self {
        Self { store, auth }
    }

    /// Fabricates a user from `credentials` and logs them in.
    /// Blank credentials are rejected before a user id is drawn. A provider
    /// rejection still consumes the id, but leaves the logged-in user as it was.
    pub fn sign_in(&mut self, credentials: &Credentials) -> Result<&User> {
        credentials
            .validate()
            .inspect_err(|e| warn!(error = %e, "sign-in rejected"))?;
        let user_id = self.store.next_id();
        let user = self
            .auth
            .sign_in(credentials, self.store.communities(), user_id)
            .inspect_err(|e| warn!(error = %e, "sign-in rejected"))?;
        Ok(self.store.login(user))
    }

    pub fn sign_out(&mut self) {
        self.store.logout();
    }
}
