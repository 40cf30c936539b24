//! # Domain Models
//!
//! These structs represent the core entities of Share Nest.
//! Records serialize with camelCase field names; generated ids are UUIDs.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Photo used when a donor lists an item without one.
pub const DEFAULT_ITEM_PHOTO: &str =
    "https://images.pexels.com/photos/3965545/pexels-photo-3965545.jpeg?auto=compress&cs=tinysrgb&w=400";

/// Community name given to users whose community id matches no seeded community.
pub const UNKNOWN_COMMUNITY: &str = "Unknown Community";

/// Implements `ALL`, `as_str`, `Display` and `FromStr` for a fieldless enum
/// whose serde names are its lowercase variant names.
macro_rules! keyword_enum {
    ($name:ident, $label:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    other => Err(AppError::validation(format!(
                        "unknown {} '{}'",
                        $label, other
                    ))),
                }
            }
        }
    };
}

/// What kind of thing an item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Furniture,
    Books,
    Tools,
    Sports,
    Other,
}

keyword_enum!(Category, "category", {
    Electronics => "electronics",
    Clothing => "clothing",
    Furniture => "furniture",
    Books => "books",
    Tools => "tools",
    Sports => "sports",
    Other => "other",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
    Fair,
}

keyword_enum!(Condition, "condition", {
    New => "new",
    Used => "used",
    Fair => "fair",
});

/// Whether an item is lent out for a while or given away for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Temporary,
    Permanent,
}

keyword_enum!(Availability, "availability", {
    Temporary => "temporary",
    Permanent => "permanent",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

keyword_enum!(Urgency, "urgency", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// The signed-in member. At most one exists per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub community_id: u32,
    pub community_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    pub join_date: DateTime<Utc>,
    /// Reputation score; fabricated at sign-in.
    pub community_score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
}

/// A donation or loan listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub condition: Condition,
    pub availability: Availability,
    /// URL or path of the listing photo
    pub photo: String,
    pub location: String,
    /// The user who listed the item. Never reassigned.
    pub donor_id: Uuid,
    pub donor_name: String,
    pub is_available: bool,
    pub date_posted: DateTime<Utc>,
}

/// Payload for `SessionStore::add_item`: an `Item` minus its generated fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub condition: Condition,
    pub availability: Availability,
    pub photo: String,
    pub location: String,
    pub donor_id: Uuid,
    pub donor_name: String,
    pub is_available: bool,
}

impl NewItem {
    /// Builds a listing owned by `donor`, available immediately.
    /// A blank photo falls back to [`DEFAULT_ITEM_PHOTO`].
    pub fn from_details(details: ItemDetails, donor: &User) -> Self {
        let photo = if details.photo.trim().is_empty() {
            DEFAULT_ITEM_PHOTO.to_string()
        } else {
            details.photo
        };
        Self {
            title: details.title,
            description: details.description,
            category: details.category,
            condition: details.condition,
            availability: details.availability,
            photo,
            location: details.location,
            donor_id: donor.id,
            donor_name: donor.name.clone(),
            is_available: true,
        }
    }
}

/// What a donor fills in when listing an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetails {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub condition: Condition,
    pub availability: Availability,
    #[serde(default)]
    pub photo: String,
    pub location: String,
}

/// Partial update for an `Item`. `None` leaves the field untouched.
///
/// Has no identity or ownership fields, so an item can never change donor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    pub availability: Option<Availability>,
    pub photo: Option<String>,
    pub location: Option<String>,
    pub is_available: Option<bool>,
}

impl ItemPatch {
    /// Patch that only sets the availability flag.
    pub fn available(is_available: bool) -> Self {
        Self {
            is_available: Some(is_available),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(self, item: &mut Item) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(condition) = self.condition {
            item.condition = condition;
        }
        if let Some(availability) = self.availability {
            item.availability = availability;
        }
        if let Some(photo) = self.photo {
            item.photo = photo;
        }
        if let Some(location) = self.location {
            item.location = location;
        }
        if let Some(is_available) = self.is_available {
            item.is_available = is_available;
        }
    }
}

/// A posting for something a member needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub urgency: Urgency,
    pub location: String,
    pub requester_id: Uuid,
    pub requester_name: String,
    pub date_requested: DateTime<Utc>,
    pub is_active: bool,
}

/// Payload for `SessionStore::add_request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRequest {
    pub title: String,
    pub description: String,
    pub urgency: Urgency,
    pub location: String,
    pub requester_id: Uuid,
    pub requester_name: String,
    pub is_active: bool,
}

impl NewRequest {
    pub fn from_details(details: RequestDetails, requester: &User) -> Self {
        Self {
            title: details.title,
            description: details.description,
            urgency: details.urgency,
            location: details.location,
            requester_id: requester.id,
            requester_name: requester.name.clone(),
            is_active: true,
        }
    }
}

/// What a member fills in when asking for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    pub title: String,
    pub description: String,
    pub urgency: Urgency,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub urgency: Option<Urgency>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}

impl RequestPatch {
    /// Patch that only sets the active flag.
    pub fn active(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply(self, request: &mut Request) {
        if let Some(title) = self.title {
            request.title = title;
        }
        if let Some(description) = self.description {
            request.description = description;
        }
        if let Some(urgency) = self.urgency {
            request.urgency = urgency;
        }
        if let Some(location) = self.location {
            request.location = location;
        }
        if let Some(is_active) = self.is_active {
            request.is_active = is_active;
        }
    }
}

/// A neighbourhood group. Reference data, seeded once per store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: u32,
    pub name: String,
    pub member_count: u32,
    pub items_shared: u32,
    /// Cumulative CO2 saved, in kilograms
    #[serde(rename = "co2Saved")]
    pub co2_saved_kg: u32,
}

impl Community {
    /// The fixed set of communities every store starts with.
    pub fn seed() -> Vec<Community> {
        [
            (1, "Downtown Community", 234, 1456, 2300),
            (2, "Suburban Circle", 189, 892, 1540),
            (3, "University District", 456, 2341, 3890),
        ]
        .into_iter()
        .map(|(id, name, member_count, items_shared, co2_saved_kg)| Community {
            id,
            name: name.to_string(),
            member_count,
            items_shared,
            co2_saved_kg,
        })
        .collect()
    }
}

/// Login form input. Only shape is checked; nothing is verified.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
    pub community_id: u32,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>, community_id: u32) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            community_id,
        }
    }

    /// Both email and password must be non-blank. Nothing else is checked.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() {
            return Err(AppError::validation("email is required"));
        }
        if self.password.expose_secret().trim().is_empty() {
            return Err(AppError::validation("password is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_item() -> Item {
        Item {
            id: Uuid::now_v7(),
            title: "Cordless drill".to_string(),
            description: "18V, two batteries".to_string(),
            category: Category::Tools,
            condition: Condition::Used,
            availability: Availability::Temporary,
            photo: DEFAULT_ITEM_PHOTO.to_string(),
            location: "Elm Street".to_string(),
            donor_id: Uuid::now_v7(),
            donor_name: "Dana".to_string(),
            is_available: true,
            date_posted: Utc::now(),
        }
    }

    #[test]
    fn test_keyword_parsing() {
        assert_eq!("books".parse::<Category>().unwrap(), Category::Books);
        assert_eq!(" Fair ".parse::<Condition>().unwrap(), Condition::Fair);
        assert_eq!("HIGH".parse::<Urgency>().unwrap(), Urgency::High);
        assert!(matches!(
            "vehicles".parse::<Category>(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_display_matches_serde_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
        assert_eq!(Availability::Permanent.to_string(), "permanent");
    }

    #[test]
    fn test_item_patch_touches_only_given_fields() {
        let mut item = sample_item();
        let before = item.clone();

        ItemPatch::available(false).apply(&mut item);

        assert!(!item.is_available);
        assert_eq!(item, Item { is_available: false, ..before });
    }

    #[test]
    fn test_empty_patch() {
        assert!(ItemPatch::default().is_empty());
        assert!(!RequestPatch::active(false).is_empty());
    }

    #[test]
    fn test_seed_communities() {
        let seeded = Community::seed();
        assert_eq!(seeded.len(), 3);
        assert_eq!(seeded[0].name, "Downtown Community");
        assert_eq!(seeded[2].member_count, 456);
        assert_eq!(seeded[1].co2_saved_kg, 1540);
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("sam@example.com", "hunter2", 1);
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }

    #[test]
    fn test_credentials_validate() {
        assert!(Credentials::new("sam@example.com", "pw", 1).validate().is_ok());
        assert_eq!(
            Credentials::new(" ", "pw", 1).validate(),
            Err(AppError::validation("email is required"))
        );
        assert_eq!(
            Credentials::new("sam@example.com", "  ", 1).validate(),
            Err(AppError::validation("password is required"))
        );
    }
}
