//! User profile entity
//!
//! Collections are not embedded here: recipes, shopping lists and pantry
//! entries live in their own collections keyed by the user's uid.

use serde::{Deserialize, Serialize};

use super::ids::{validate_id, OwnerId};
use super::owned::OwnedEntity;
use crate::error::DomainError;

/// Subscription level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Subscription {
    #[default]
    Free,
    Premium,
}

impl std::fmt::Display for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subscription::Free => write!(f, "FREE"),
            Subscription::Premium => write!(f, "PREMIUM"),
        }
    }
}

impl std::str::FromStr for Subscription {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FREE" => Ok(Subscription::Free),
            "PREMIUM" => Ok(Subscription::Premium),
            _ => Err(format!("Unknown subscription: {}", s)),
        }
    }
}

/// A user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub uid: OwnerId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub subscription: Subscription,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    pub fn new(uid: impl Into<OwnerId>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            email: None,
            photo_url: None,
            subscription: Subscription::Free,
            is_admin: false,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = subscription;
        self
    }

    pub fn is_premium(&self) -> bool {
        self.subscription == Subscription::Premium
    }
}

/// The profile is a single document owned by the user it describes, with the
/// uid as its id.
impl OwnedEntity for User {
    type Id = OwnerId;
    type Draft = User;

    const COLLECTION: &'static str = "users";
    const KIND: &'static str = "User";

    fn id(&self) -> &OwnerId {
        &self.uid
    }

    fn owner_id(&self) -> &OwnerId {
        &self.uid
    }

    fn draft_id(draft: &User) -> Option<&OwnerId> {
        Some(&draft.uid)
    }

    fn from_draft(draft: &User, _id: OwnerId, owner: OwnerId) -> Self {
        User {
            uid: owner,
            ..draft.clone()
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_id("user", &self.uid.0)
    }
}
