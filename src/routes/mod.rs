mod dashboard_page;
mod health;
mod magic_link;
mod preferences;
mod subscriptions;

pub use dashboard_page::*;
pub use health::*;
pub use magic_link::*;
pub use preferences::*;
pub use subscriptions::*;

use crate::actions::{ActionError, ActionResult};
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, Response, Route};

pub fn all() -> Vec<Route> {
    routes![
        health_check,
        dashboard,
        subscribe,
        request_magic_link,
        preferences_page,
        save_preferences
    ]
}

/// Answer to a form post: the JSON result for the page script, or the
/// re-rendered page for a plain browser submission.
#[derive(Responder)]
pub enum FormReply {
    Json(Result<Json<ActionResult>, ActionError>),
    Page(RawHtml<String>),
}

impl FormReply {
    pub fn json(outcome: Result<(), ActionError>) -> Self {
        FormReply::Json(outcome.map(|()| Json(ActionResult::success())))
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

impl<'r> Responder<'r, 'static> for ActionError {
    fn respond_to(self, request: &'r Request<'_>) -> rocket::response::Result<'static> {
        tracing::warn!("ActionError: {:?}", self);
        let status = match self {
            ActionError::Validation(_) => Status::BadRequest,
            ActionError::Store { .. } => Status::InternalServerError,
        };
        Response::build_from(Json(self.to_result()).respond_to(request)?)
            .status(status)
            .ok()
    }
}
