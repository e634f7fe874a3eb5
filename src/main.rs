use alfred_brief::configuration::get_configuration;
use alfred_brief::email::LogEmailClient;
use alfred_brief::startup::Application;
use alfred_brief::telemetry::{get_subscriber, init_subscriber};
use std::sync::Arc;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("alfred-brief".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_configuration()?;
    let sender = configuration
        .email_client
        .sender()
        .map_err(anyhow::Error::msg)?;
    let email_client = LogEmailClient::new(sender);

    let application = Application::build(&configuration, Arc::new(email_client)).await?;
    application.server.launch().await?;
    Ok(())
}
