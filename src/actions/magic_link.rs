use super::ActionError;
use crate::domain::{ManagementToken, SubscriberEmail};
use crate::email::Email;
use crate::store::SubscriberStore;
use crate::throttle::MagicLinkThrottle;

/// Everything needed to send a preferences-management link.
pub struct MagicLinkDelivery<'a> {
    pub email_client: &'a dyn Email,
    pub throttle: &'a MagicLinkThrottle,
    pub base_url: &'a str,
}

/// Sends a management link to `raw_email` if it belongs to a subscriber.
///
/// Only a malformed address produces an error. Unknown addresses, throttled
/// requests, lookup failures and delivery failures all return `Ok(())`, so
/// the response never reveals whether an address is registered.
#[tracing::instrument(
    name = "Requesting a magic link",
    skip(store, delivery, raw_email),
    fields(subscriber_email = raw_email.unwrap_or_default())
)]
pub async fn request_magic_link<S>(
    store: &S,
    delivery: &MagicLinkDelivery<'_>,
    raw_email: Option<&str>,
) -> Result<(), ActionError>
where
    S: SubscriberStore + ?Sized,
{
    let email = SubscriberEmail::parse(raw_email.unwrap_or_default())?;

    if !delivery.throttle.try_acquire(&email) {
        tracing::info!("Magic link requested again inside the cooldown, skipping delivery");
        return Ok(());
    }

    match store.token_for_email(&email).await {
        Ok(Some(token)) => {
            if let Err(e) = send_magic_link(delivery, &email, &token).await {
                tracing::error!(error.cause_chain = ?e, "Failed to send the magic link");
            }
        }
        Ok(None) => tracing::info!("No subscriber registered under the requested email"),
        Err(e) => tracing::error!(error.cause_chain = ?e, "Failed to look up the subscriber"),
    }
    Ok(())
}

#[tracing::instrument(name = "Send a magic link to a subscriber", skip_all)]
async fn send_magic_link(
    delivery: &MagicLinkDelivery<'_>,
    email: &SubscriberEmail,
    token: &ManagementToken,
) -> anyhow::Result<()> {
    let link = token.management_link(delivery.base_url);
    let html_body = format!(
        "Manage the topics in your daily brief.<br />\
        Click <a href=\"{}\">here</a> to update your preferences.",
        link
    );
    let plain_body = format!(
        "Manage the topics in your daily brief.\nVisit {} to update your preferences.",
        link
    );
    delivery
        .email_client
        .send_email(email, "Manage your preferences", &html_body, &plain_body)
        .await
}
