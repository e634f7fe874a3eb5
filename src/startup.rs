use crate::catchers::*;
use crate::configuration::Settings;
use crate::email::Email;
use crate::listening_port::{self, ListeningPort};
use crate::routes;
use crate::throttle::MagicLinkThrottle;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use rocket::fairing::{self, AdHoc};
use rocket::figment::util::map;
use rocket::{Build, Ignite, Rocket};
use rocket_sync_db_pools::database;
use secrecy::ExposeSecret;
use std::sync::Arc;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[database("newsletter")]
pub struct NewsletterDbConn(diesel::PgConnection);

/// Prefix for links sent to subscribers.
pub struct ApplicationBaseUrl(pub String);

pub struct Application {
    pub server: Rocket<Ignite>,
    pub port: ListeningPort,
}

impl Application {
    pub async fn build(
        configuration: &Settings,
        email_client: Arc<dyn Email>,
    ) -> Result<Application, rocket::Error> {
        let (port_reporter, port) = listening_port::create_pair();
        let database_url = configuration
            .database
            .connection_string()
            .expose_secret()
            .clone();
        let figment = rocket::Config::figment()
            .merge(("address", configuration.application.host))
            .merge(("port", configuration.application.port.unwrap_or(0)))
            .merge(("databases", map!["newsletter" => map!["url" => database_url]]));

        let server = rocket::custom(figment)
            .attach(NewsletterDbConn::fairing())
            .attach(AdHoc::try_on_ignite("Database Migrations", run_migrations))
            .attach(port_reporter)
            .manage(email_client)
            .manage(MagicLinkThrottle::new(configuration.magic_link.cooldown()))
            .manage(ApplicationBaseUrl(
                configuration.application.base_url.clone(),
            ))
            .manage(configuration.dashboard.clone())
            .mount("/", routes::all())
            .register("/", catchers![unprocessable_entity_to_bad_request])
            .ignite()
            .await?;
        Ok(Application { server, port })
    }
}

async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
    let conn = match NewsletterDbConn::get_one(&rocket).await {
        Some(conn) => conn,
        None => {
            tracing::error!("Failed to retrieve a connection to run migrations.");
            return Err(rocket);
        }
    };
    let outcome = conn
        .run(|c| {
            c.run_pending_migrations(MIGRATIONS)
                .map(|applied| applied.len())
                .map_err(|e| e.to_string())
        })
        .await;
    match outcome {
        Ok(applied) => {
            tracing::info!(applied, "Database migrations are up to date");
            Ok(rocket)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to run database migrations");
            Err(rocket)
        }
    }
}
