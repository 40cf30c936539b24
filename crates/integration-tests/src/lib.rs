//! Shared fixtures for the cross-crate test suites.

use chrono::Utc;
use sn_core::{
    Availability, Category, Condition, NewItem, NewRequest, SequentialIdGenerator, SessionStore,
    Urgency, User,
};
use uuid::Uuid;

/// Store with deterministic ids (1, 2, 3, ...).
pub fn sequential_store() -> SessionStore {
    SessionStore::with_id_generator(Box::new(SequentialIdGenerator::new()))
}

/// A member of the Downtown Community.
pub fn member(id: u128, name: &str) -> User {
    User {
        id: Uuid::from_u128(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        community_id: 1,
        community_name: "Downtown Community".to_string(),
        profile_photo: None,
        join_date: Utc::now(),
        community_score: 75,
        contact_info: Some("555-0100".to_string()),
    }
}

pub fn listing(title: &str, donor: &User) -> NewItem {
    NewItem {
        title: title.to_string(),
        description: format!("{} in working order", title),
        category: Category::Other,
        condition: Condition::Used,
        availability: Availability::Permanent,
        photo: "photo.jpg".to_string(),
        location: "Main Street".to_string(),
        donor_id: donor.id,
        donor_name: donor.name.clone(),
        is_available: true,
    }
}

pub fn need(title: &str, requester: &User) -> NewRequest {
    NewRequest {
        title: title.to_string(),
        description: format!("Looking for a {}", title.to_lowercase()),
        urgency: Urgency::Low,
        location: "Main Street".to_string(),
        requester_id: requester.id,
        requester_name: requester.name.clone(),
        is_active: true,
    }
}
