//! Read-only projections over a `SessionStore`: browse filters, request
//! suggestions, per-member listings and community totals.
//!
//! Nothing here mutates the store or links a request to an item.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Category, Community, Condition, Item, Request};
use crate::session::SessionStore;

/// Browse criteria. `None` (or a blank search) means "all".
/// The search term is trimmed before matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemFilter {
    pub search: Option<String>,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
}

impl ItemFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn matches(&self, item: &Item) -> bool {
        let text_ok = match self.search.as_deref() {
            Some(term) => mentions(item, &term.trim().to_lowercase()),
            None => true,
        };
        text_ok
            && self.category.map_or(true, |c| item.category == c)
            && self.condition.map_or(true, |c| item.condition == c)
    }
}

/// Case-insensitive substring match on title or description.
/// `needle` must already be lowercase.
fn mentions(item: &Item, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle) || item.description.to_lowercase().contains(needle)
}

/// Sums over every seeded community.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityTotals {
    pub members: u64,
    pub items_shared: u64,
    #[serde(rename = "co2Saved")]
    pub co2_saved_kg: u64,
}

impl CommunityTotals {
    pub fn of(communities: &[Community]) -> Self {
        communities.iter().fold(Self::default(), |acc, c| Self {
            members: acc.members + u64::from(c.member_count),
            items_shared: acc.items_shared + u64::from(c.items_shared),
            co2_saved_kg: acc.co2_saved_kg + u64::from(c.co2_saved_kg),
        })
    }
}

impl SessionStore {
    /// Items matching `filter`, newest first.
    pub fn browse_items(&self, filter: &ItemFilter) -> Vec<&Item> {
        self.items().iter().filter(|item| filter.matches(item)).collect()
    }

    /// Up to `limit` items whose title or description mention `title`.
    /// A blank title suggests nothing.
    pub fn suggest_items(&self, title: &str, limit: usize) -> Vec<&Item> {
        let needle = title.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.items()
            .iter()
            .filter(|item| mentions(item, &needle))
            .take(limit)
            .collect()
    }

    pub fn items_by_donor(&self, donor_id: Uuid) -> Vec<&Item> {
        self.items()
            .iter()
            .filter(|item| item.donor_id == donor_id)
            .collect()
    }

    pub fn requests_by_requester(&self, requester_id: Uuid) -> Vec<&Request> {
        self.requests()
            .iter()
            .filter(|request| request.requester_id == requester_id)
            .collect()
    }

    /// The current user's listings; empty when signed out.
    pub fn my_items(&self) -> Vec<&Item> {
        self.current_user()
            .map(|user| self.items_by_donor(user.id))
            .unwrap_or_default()
    }

    pub fn my_requests(&self) -> Vec<&Request> {
        self.current_user()
            .map(|user| self.requests_by_requester(user.id))
            .unwrap_or_default()
    }

    pub fn community(&self, id: u32) -> Option<&Community> {
        self.communities().iter().find(|c| c.id == id)
    }

    /// The seeded community the current user belongs to, if any.
    pub fn current_community(&self) -> Option<&Community> {
        self.current_user()
            .and_then(|user| self.community(user.community_id))
    }

    pub fn community_totals(&self) -> CommunityTotals {
        CommunityTotals::of(self.communities())
    }
}
