#[macro_use]
extern crate rocket;

pub mod actions;
pub mod catchers;
pub mod configuration;
pub mod domain;
pub mod email;
pub mod form_state;
pub mod guards;
pub mod listening_port;
pub mod models;
pub mod routes;
pub mod schema;
pub mod startup;
pub mod store;
pub mod telemetry;
pub mod throttle;
pub mod views;
