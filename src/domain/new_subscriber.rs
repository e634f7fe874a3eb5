use super::{ManagementToken, Preferences, SubscriberEmail};
use uuid::Uuid;

pub struct NewSubscriber {
    pub email: SubscriberEmail,
    pub preferences: Preferences,
    pub management_token: ManagementToken,
}

impl NewSubscriber {
    pub fn new(email: SubscriberEmail, preferences: Preferences) -> Self {
        Self {
            email,
            preferences,
            management_token: ManagementToken::generate(),
        }
    }
}

/// A subscriber resolved through their management token.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberProfile {
    pub id: Uuid,
    pub email: String,
    pub preferences: Preferences,
}
