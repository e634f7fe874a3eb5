use super::FormReply;
use crate::actions::{self, ActionResult, MagicLinkDelivery};
use crate::email::Email;
use crate::form_state::FormStatus;
use crate::guards::Submission;
use crate::startup::{ApplicationBaseUrl, NewsletterDbConn};
use crate::throttle::MagicLinkThrottle;
use crate::views;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::State;
use std::sync::Arc;
use uuid::Uuid;

#[derive(FromForm)]
pub struct MagicLinkFormData {
    email: Option<String>,
}

#[tracing::instrument(
    name = "Handling a magic link request",
    skip(form, submission, conn, email_client, throttle, base_url),
    fields(request_id = %Uuid::new_v4())
)]
#[post("/preferences/magic-link", data = "<form>")]
pub async fn request_magic_link(
    form: Form<MagicLinkFormData>,
    submission: Submission,
    conn: NewsletterDbConn,
    email_client: &State<Arc<dyn Email>>,
    throttle: &State<MagicLinkThrottle>,
    base_url: &State<ApplicationBaseUrl>,
) -> FormReply {
    let delivery = MagicLinkDelivery {
        email_client: email_client.inner().as_ref(),
        throttle: throttle.inner(),
        base_url: &base_url.0,
    };
    let outcome = actions::request_magic_link(&conn, &delivery, form.email.as_deref()).await;
    match submission {
        Submission::Script => FormReply::json(outcome),
        Submission::Document => {
            let status = FormStatus::from(ActionResult::from(outcome));
            FormReply::Page(RawHtml(views::render_lookup(&status)))
        }
    }
}
