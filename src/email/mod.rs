mod log_email_client;

use crate::domain::SubscriberEmail;
use async_trait::async_trait;
pub use log_email_client::LogEmailClient;

#[async_trait]
pub trait Email: Send + Sync {
    async fn send_email(
        &self,
        recipient: &SubscriberEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), anyhow::Error>;
}
