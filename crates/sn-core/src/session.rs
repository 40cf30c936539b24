//! # Session Store
//!
//! Single authority for session state. Every read and write of the current
//! user, items and requests goes through a `SessionStore`; communities are
//! seeded at construction and never change.
//!
//! Mutations are total. An id that matches nothing makes `update_*` and
//! `delete_*` a no-op reported as `false`, never an error.

use std::fmt;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::ids::UuidV7Generator;
use crate::models::{
    Community, Item, ItemDetails, ItemPatch, NewItem, NewRequest, Request, RequestDetails,
    RequestPatch, User,
};
use crate::traits::IdGenerator;

pub struct SessionStore {
    current_user: Option<User>,
    /// Newest first
    items: Vec<Item>,
    /// Newest first
    requests: Vec<Request>,
    communities: Vec<Community>,
    ids: Box<dyn IdGenerator>,
}

impl SessionStore {
    /// Fresh store with seeded communities and UUID v7 ids.
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidV7Generator))
    }

    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            current_user: None,
            items: Vec::new(),
            requests: Vec::new(),
            communities: Community::seed(),
            ids,
        }
    }

    /// Draws an id from the store's generator (used for fabricated users).
    pub fn next_id(&mut self) -> Uuid {
        self.ids.next_id()
    }

    // --- Reads ---

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    pub fn item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn request(&self, id: Uuid) -> Option<&Request> {
        self.requests.iter().find(|request| request.id == id)
    }

    // --- Session ---

    /// Replaces the current user unconditionally.
    pub fn login(&mut self, user: User) -> &User {
        info!(user_id = %user.id, community_id = user.community_id, "user logged in");
        self.current_user.insert(user)
    }

    /// Ends the session: drops the user and every item and request.
    /// Communities are kept.
    pub fn logout(&mut self) {
        info!(
            items = self.items.len(),
            requests = self.requests.len(),
            "user logged out, session data cleared"
        );
        self.current_user = None;
        self.items.clear();
        self.requests.clear();
    }

    // --- Items ---

    /// Stamps `new` with an id and the current time and puts it first.
    /// Field presence is the caller's concern.
    pub fn add_item(&mut self, new: NewItem) -> &Item {
        let item = Item {
            id: self.ids.next_id(),
            title: new.title,
            description: new.description,
            category: new.category,
            condition: new.condition,
            availability: new.availability,
            photo: new.photo,
            location: new.location,
            donor_id: new.donor_id,
            donor_name: new.donor_name,
            is_available: new.is_available,
            date_posted: Utc::now(),
        };
        debug!(item_id = %item.id, donor_id = %item.donor_id, category = %item.category, "item added");
        self.items.insert(0, item);
        &self.items[0]
    }

    /// Merges `patch` into the item with `id`. Returns whether one matched.
    pub fn update_item(&mut self, id: Uuid, patch: ItemPatch) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(_) if patch.is_empty() => {
                debug!(item_id = %id, "empty patch, item unchanged");
                true
            }
            Some(item) => {
                patch.apply(item);
                debug!(item_id = %id, "item updated");
                true
            }
            None => {
                debug!(item_id = %id, "update ignored, no such item");
                false
            }
        }
    }

    /// Removes the item with `id`, keeping the others in order.
    pub fn delete_item(&mut self, id: Uuid) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                debug!(item_id = %id, remaining = self.items.len(), "item deleted");
                true
            }
            None => false,
        }
    }

    /// Flips the availability flag and returns its new value.
    pub fn toggle_item_availability(&mut self, id: Uuid) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.is_available = !item.is_available;
        debug!(item_id = %id, is_available = item.is_available, "item availability toggled");
        Some(item.is_available)
    }

    // --- Requests ---

    pub fn add_request(&mut self, new: NewRequest) -> &Request {
        let request = Request {
            id: self.ids.next_id(),
            title: new.title,
            description: new.description,
            urgency: new.urgency,
            location: new.location,
            requester_id: new.requester_id,
            requester_name: new.requester_name,
            date_requested: Utc::now(),
            is_active: new.is_active,
        };
        debug!(request_id = %request.id, urgency = %request.urgency, "request added");
        self.requests.insert(0, request);
        &self.requests[0]
    }

    pub fn update_request(&mut self, id: Uuid, patch: RequestPatch) -> bool {
        match self.requests.iter_mut().find(|request| request.id == id) {
            Some(_) if patch.is_empty() => {
                debug!(request_id = %id, "empty patch, request unchanged");
                true
            }
            Some(request) => {
                patch.apply(request);
                debug!(request_id = %id, "request updated");
                true
            }
            None => {
                debug!(request_id = %id, "update ignored, no such request");
                false
            }
        }
    }

    pub fn delete_request(&mut self, id: Uuid) -> bool {
        match self.requests.iter().position(|request| request.id == id) {
            Some(index) => {
                self.requests.remove(index);
                debug!(request_id = %id, remaining = self.requests.len(), "request deleted");
                true
            }
            None => false,
        }
    }

    // --- Acting as the signed-in user ---

    fn require_user(&self) -> Result<&User> {
        self.current_user
            .as_ref()
            .ok_or_else(|| AppError::unauthorized("no user is logged in"))
    }

    /// Lists an item on behalf of the current user.
    pub fn donate(&mut self, details: ItemDetails) -> Result<&Item> {
        let new = NewItem::from_details(details, self.require_user()?);
        Ok(self.add_item(new))
    }

    /// Posts a need on behalf of the current user.
    pub fn post_request(&mut self, details: RequestDetails) -> Result<&Request> {
        let new = NewRequest::from_details(details, self.require_user()?);
        Ok(self.add_request(new))
    }

    /// True when the item exists and the current user listed it.
    pub fn can_manage_item(&self, id: Uuid) -> bool {
        match (self.current_user(), self.item(id)) {
            (Some(user), Some(item)) => item.donor_id == user.id,
            _ => false,
        }
    }

    pub fn can_manage_request(&self, id: Uuid) -> bool {
        match (self.current_user(), self.request(id)) {
            (Some(user), Some(request)) => request.requester_id == user.id,
            _ => false,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("current_user", &self.current_user)
            .field("items", &self.items.len())
            .field("requests", &self.requests.len())
            .field("communities", &self.communities.len())
            .finish_non_exhaustive()
    }
}
