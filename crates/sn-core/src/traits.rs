//! # Core Traits (Ports)
//!
//! Plugins implement these traits to be wired into an `AppContext`.

use crate::error::Result;
use crate::models::{Community, Credentials, User};
use uuid::Uuid;

/// Turns login form input into a session user.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AuthProvider: Send + Sync {
    /// Builds the `User` for `credentials`, using `user_id` as its identity.
    /// `communities` is the store's seeded reference data.
    fn sign_in(
        &self,
        credentials: &Credentials,
        communities: &[Community],
        user_id: Uuid,
    ) -> Result<User>;
}

/// Source of record identifiers. Must never repeat within a process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> Uuid;
}
