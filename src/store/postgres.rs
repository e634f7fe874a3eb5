use super::{NewsStore, StoreError, SubscriberStore};
use crate::domain::{
    ManagementToken, NewSubscriber, NewsItem, Preferences, SubscriberEmail, SubscriberProfile,
};
use crate::models::{NewSubscriberRow, NewsItemRow};
use crate::startup::NewsletterDbConn;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl};
use secrecy::ExposeSecret;
use serde_json::Value;
use uuid::Uuid;

fn log_failure(e: diesel::result::Error) -> StoreError {
    tracing::error!("Failed to execute query: {:?}", e);
    StoreError::from(e)
}

#[async_trait]
impl SubscriberStore for NewsletterDbConn {
    #[tracing::instrument(
        name = "Saving new subscriber details in the database",
        skip(self, subscriber)
    )]
    async fn insert_if_absent(&self, subscriber: &NewSubscriber) -> Result<(), StoreError> {
        use crate::schema::subscribers;
        let email = subscriber.email.as_ref().to_string();
        let preferences = subscriber.preferences.to_document();
        let token = subscriber.management_token.expose_secret().clone();
        self.run(move |c| {
            let now = Utc::now();
            diesel::insert_into(subscribers::table)
                .values(NewSubscriberRow {
                    id: &Uuid::new_v4(),
                    email: &email,
                    preferences: &preferences,
                    management_token: &token,
                    created_at: &now,
                    updated_at: &now,
                })
                .on_conflict(subscribers::email)
                .do_nothing()
                .execute(c)
        })
        .await
        .map(|_| ())
        .map_err(log_failure)
    }

    #[tracing::instrument(name = "Get management token from email", skip(self, email))]
    async fn token_for_email(
        &self,
        email: &SubscriberEmail,
    ) -> Result<Option<ManagementToken>, StoreError> {
        use crate::schema::subscribers;
        let email = email.as_ref().to_string();
        self.run(move |c| {
            subscribers::table
                .select(subscribers::management_token)
                .filter(subscribers::email.eq(email))
                .first::<String>(c)
                .optional()
        })
        .await
        .map(|token| token.map(ManagementToken::from_stored))
        .map_err(log_failure)
    }

    #[tracing::instrument(name = "Get subscriber from management token", skip(self, token))]
    async fn find_by_token(&self, token: &str) -> Result<Option<SubscriberProfile>, StoreError> {
        use crate::schema::subscribers;
        let token = token.to_string();
        let row = self
            .run(move |c| {
                subscribers::table
                    .select((
                        subscribers::id,
                        subscribers::email,
                        subscribers::preferences,
                    ))
                    .filter(subscribers::management_token.eq(token))
                    .first::<(Uuid, String, Option<Value>)>(c)
                    .optional()
            })
            .await
            .map_err(log_failure)?;

        Ok(row.map(|(id, email, preferences)| SubscriberProfile {
            id,
            email,
            preferences: Preferences::from_stored(preferences.as_ref()),
        }))
    }

    #[tracing::instrument(name = "Update subscriber preferences", skip(self, preferences))]
    async fn update_preferences(
        &self,
        subscriber_id: Uuid,
        preferences: &Preferences,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        use crate::schema::subscribers;
        let document = preferences.to_document();
        self.run(move |c| {
            diesel::update(subscribers::table.filter(subscribers::id.eq(subscriber_id)))
                .set((
                    subscribers::preferences.eq(document),
                    subscribers::updated_at.eq(updated_at),
                ))
                .execute(c)
        })
        .await
        .map(|updated| updated > 0)
        .map_err(log_failure)
    }
}

#[async_trait]
impl NewsStore for NewsletterDbConn {
    #[tracing::instrument(name = "Get recent news items", skip(self))]
    async fn recent_news(&self, limit: i64) -> Result<Vec<NewsItem>, StoreError> {
        use crate::schema::news_items;
        self.run(move |c| {
            news_items::table
                .order(news_items::scraped_at.desc())
                .limit(limit)
                .load::<NewsItemRow>(c)
        })
        .await
        .map(|rows| rows.into_iter().map(NewsItem::from).collect())
        .map_err(log_failure)
    }
}
