use crate::domain::SubscriberEmail;
use crate::email::Email;
use async_trait::async_trait;

/// Writes outgoing mail to the log instead of delivering it.
pub struct LogEmailClient {
    sender: SubscriberEmail,
}

impl LogEmailClient {
    pub fn new(sender: SubscriberEmail) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Email for LogEmailClient {
    async fn send_email(
        &self,
        recipient: &SubscriberEmail,
        subject: &str,
        _html_content: &str,
        text_content: &str,
    ) -> anyhow::Result<()> {
        tracing::info!(
            sender = %self.sender,
            recipient = %recipient,
            subject,
            body = text_content,
            "Email delivery is not configured, logging the message instead"
        );
        Ok(())
    }
}
