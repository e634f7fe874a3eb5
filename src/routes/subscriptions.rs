use super::FormReply;
use crate::actions;
use crate::configuration::DashboardSettings;
use crate::domain::CategoryFilter;
use crate::form_state::{ticked_topics, FormAction, FormStatus, SubscribeForm};
use crate::guards::Submission;
use crate::startup::NewsletterDbConn;
use crate::views;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::State;
use uuid::Uuid;

#[derive(FromForm)]
pub struct SubscribeFormData {
    email: Option<String>,
    /// JSON object of topic flags, set by the page script.
    preferences: Option<String>,
    /// Ticked topic boxes of a plain form post.
    topics: Vec<String>,
}

#[tracing::instrument(
    name = "Handling a subscription request",
    skip(form, submission, conn, settings),
    fields(request_id = %Uuid::new_v4())
)]
#[post("/subscriptions", data = "<form>")]
pub async fn subscribe(
    form: Form<SubscribeFormData>,
    submission: Submission,
    conn: NewsletterDbConn,
    settings: &State<DashboardSettings>,
) -> FormReply {
    match submission {
        Submission::Script => FormReply::json(
            actions::subscribe(&conn, form.email.as_deref(), form.preferences.as_deref()).await,
        ),
        Submission::Document => {
            let state = SubscribeForm::from_submission(
                form.email.as_deref().unwrap_or_default(),
                &ticked_topics(&form.topics),
            )
            .dispatch(FormAction::Submit);
            let state = if state.status == FormStatus::Submitting {
                let preferences = state.topics.to_document().to_string();
                let outcome =
                    actions::subscribe(&conn, Some(&state.email), Some(&preferences)).await;
                state.dispatch(FormAction::Resolve(outcome.into()))
            } else {
                state
            };
            let feed = actions::load_dashboard(&conn, settings.news_limit).await;
            FormReply::Page(RawHtml(views::render_dashboard(
                &feed,
                CategoryFilter::All,
                &state,
            )))
        }
    }
}
