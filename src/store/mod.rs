//! Persistence contract. These five operations are everything the service
//! needs from its backing database.

mod postgres;

use crate::domain::{
    ManagementToken, NewSubscriber, NewsItem, Preferences, SubscriberEmail, SubscriberProfile,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Failed to execute a query against the database.")]
    Query(#[from] diesel::result::Error),
}

#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Inserts the subscriber unless the email is already registered, in
    /// which case the existing row is left untouched.
    async fn insert_if_absent(&self, subscriber: &NewSubscriber) -> Result<(), StoreError>;

    async fn token_for_email(
        &self,
        email: &SubscriberEmail,
    ) -> Result<Option<ManagementToken>, StoreError>;

    async fn find_by_token(&self, token: &str) -> Result<Option<SubscriberProfile>, StoreError>;

    /// Returns whether a subscriber with `subscriber_id` existed.
    async fn update_preferences(
        &self,
        subscriber_id: Uuid,
        preferences: &Preferences,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Newest first by ingestion time.
    async fn recent_news(&self, limit: i64) -> Result<Vec<NewsItem>, StoreError>;
}
