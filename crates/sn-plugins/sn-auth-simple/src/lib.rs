//! # sn-auth-simple
//!
//! Trusting implementation of `AuthProvider`.
//! Any non-blank email and password signs in; the user record is fabricated
//! from the email and the chosen community, with a random community score.

use std::ops::Range;

use chrono::Utc;
use rand::Rng;
use sn_core::error::{AppError, Result};
use sn_core::models::{Community, Credentials, User, UNKNOWN_COMMUNITY};
use sn_core::traits::AuthProvider;
use tracing::debug;
use uuid::Uuid;

/// Scores handed out when no range is configured: 50 to 149.
pub const DEFAULT_SCORE_RANGE: Range<u32> = 50..150;

pub struct SimpleAuthProvider {
    /// Fabricated community scores are drawn uniformly from here
    score_range: Range<u32>,
}

impl SimpleAuthProvider {
    pub fn new() -> Self {
        Self {
            score_range: DEFAULT_SCORE_RANGE,
        }
    }

    /// Accepts a custom score range (e.g., from settings).
    /// An empty range is rejected.
    pub fn with_score_range(score_range: Range<u32>) -> Result<Self> {
        if score_range.is_empty() {
            return Err(AppError::validation(format!(
                "score range {}..{} is empty",
                score_range.start, score_range.end
            )));
        }
        Ok(Self { score_range })
    }

    pub fn score_range(&self) -> Range<u32> {
        self.score_range.clone()
    }
}

impl Default for SimpleAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// "jane.doe@example.com" becomes "Jane.doe".
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl AuthProvider for SimpleAuthProvider {
    fn sign_in(
        &self,
        credentials: &Credentials,
        communities: &[Community],
        user_id: Uuid,
    ) -> Result<User> {
        credentials.validate()?;
        let email = credentials.email.trim();

        let community_name = communities
            .iter()
            .find(|c| c.id == credentials.community_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN_COMMUNITY.to_string());

        let community_score = rand::thread_rng().gen_range(self.score_range.clone());
        debug!(%user_id, community_id = credentials.community_id, community_score, "fabricated user");

        Ok(User {
            id: user_id,
            name: display_name(email),
            email: email.to_string(),
            community_id: credentials.community_id,
            community_name,
            profile_photo: None,
            join_date: Utc::now(),
            community_score,
            contact_info: None,
        })
    }
}
