use super::{ActionError, SAVE_FAILURE};
use crate::domain::{Preferences, SubscriberProfile, ValidationError};
use crate::store::SubscriberStore;
use chrono::Utc;
use uuid::Uuid;

/// The three states of the preferences page.
#[derive(Debug, Clone, PartialEq)]
pub enum PreferencesPage {
    /// No token: ask for an email to send a link to.
    Lookup,
    Editor(SubscriberProfile),
    /// Terminal state for unknown tokens and lookup failures.
    InvalidLink,
}

#[tracing::instrument(name = "Loading the preferences page", skip(store, token))]
pub async fn load_preferences_page<S>(store: &S, token: Option<&str>) -> PreferencesPage
where
    S: SubscriberStore + ?Sized,
{
    let token = match token.map(str::trim) {
        Some(token) if !token.is_empty() => token,
        _ => return PreferencesPage::Lookup,
    };
    match store.find_by_token(token).await {
        Ok(Some(profile)) => PreferencesPage::Editor(profile),
        Ok(None) => PreferencesPage::InvalidLink,
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, "Failed to resolve a management token");
            PreferencesPage::InvalidLink
        }
    }
}

/// Overwrites the stored preferences of the subscriber resolved earlier from
/// their token. Any combination of flags is accepted, including none.
#[tracing::instrument(
    name = "Saving subscriber preferences",
    skip(store, raw_preferences),
    fields(subscriber_id = raw_subscriber_id.unwrap_or_default())
)]
pub async fn save_preferences<S>(
    store: &S,
    raw_subscriber_id: Option<&str>,
    raw_preferences: Option<&str>,
) -> Result<(), ActionError>
where
    S: SubscriberStore + ?Sized,
{
    let subscriber_id = raw_subscriber_id
        .and_then(|id| Uuid::parse_str(id.trim()).ok())
        .ok_or(ValidationError::InvalidSubscriberId)?;
    let preferences = Preferences::from_submission(raw_preferences);
    let found = store
        .update_preferences(subscriber_id, &preferences, Utc::now())
        .await
        .map_err(ActionError::store(SAVE_FAILURE))?;
    if !found {
        tracing::warn!("No subscriber matched the submitted id, nothing was saved");
    }
    Ok(())
}
