use super::{ActionError, GENERIC_FAILURE};
use crate::domain::{NewSubscriber, Preferences, SubscriberEmail};
use crate::store::SubscriberStore;

/// Registers `raw_email` with the submitted topic preferences.
///
/// Succeeds whether or not the address was already subscribed; an existing
/// subscriber keeps their original preferences and token.
#[tracing::instrument(
    name = "Adding a new subscriber",
    skip(store, raw_email, raw_preferences),
    fields(subscriber_email = raw_email.unwrap_or_default())
)]
pub async fn subscribe<S>(
    store: &S,
    raw_email: Option<&str>,
    raw_preferences: Option<&str>,
) -> Result<(), ActionError>
where
    S: SubscriberStore + ?Sized,
{
    let email = SubscriberEmail::parse(raw_email.unwrap_or_default())?;
    let preferences = Preferences::from_submission(raw_preferences);
    let new_subscriber = NewSubscriber::new(email, preferences);
    store
        .insert_if_absent(&new_subscriber)
        .await
        .map_err(ActionError::store(GENERIC_FAILURE))
}
