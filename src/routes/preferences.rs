use super::FormReply;
use crate::actions::{self, PreferencesPage};
use crate::form_state::{ticked_topics, FormAction, FormStatus, PreferencesEditor};
use crate::guards::Submission;
use crate::startup::NewsletterDbConn;
use crate::views;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use uuid::Uuid;

const INVALID_LINK: &str = "Invalid or expired link";

#[tracing::instrument(
    name = "Rendering the preferences page",
    skip(token, conn),
    fields(request_id = %Uuid::new_v4())
)]
#[get("/preferences?<token>")]
pub async fn preferences_page(token: Option<String>, conn: NewsletterDbConn) -> RawHtml<String> {
    let token = token.unwrap_or_default();
    let page = actions::load_preferences_page(&conn, Some(&token)).await;
    RawHtml(match page {
        PreferencesPage::Lookup => views::render_lookup(&FormStatus::Idle),
        PreferencesPage::Editor(profile) => {
            views::render_editor(&PreferencesEditor::from(profile), &token)
        }
        PreferencesPage::InvalidLink => views::render_invalid_link(INVALID_LINK),
    })
}

#[derive(FromForm)]
pub struct SavePreferencesFormData {
    subscriber_id: Option<String>,
    /// JSON object of topic flags, set by the page script.
    preferences: Option<String>,
    /// Ticked topic boxes of a plain form post.
    topics: Vec<String>,
    /// Management token the editor was opened with.
    token: Option<String>,
}

#[tracing::instrument(
    name = "Handling a preferences update",
    skip(form, submission, conn),
    fields(request_id = %Uuid::new_v4())
)]
#[post("/preferences", data = "<form>")]
pub async fn save_preferences(
    form: Form<SavePreferencesFormData>,
    submission: Submission,
    conn: NewsletterDbConn,
) -> FormReply {
    if submission == Submission::Script {
        return FormReply::json(
            actions::save_preferences(
                &conn,
                form.subscriber_id.as_deref(),
                form.preferences.as_deref(),
            )
            .await,
        );
    }

    let token = form.token.clone().unwrap_or_default();
    let html = match actions::load_preferences_page(&conn, Some(&token)).await {
        PreferencesPage::Lookup => views::render_lookup(&FormStatus::Idle),
        PreferencesPage::InvalidLink => views::render_invalid_link(INVALID_LINK),
        PreferencesPage::Editor(profile) => {
            let editor = PreferencesEditor::from(profile)
                .with_ticked(&ticked_topics(&form.topics))
                .dispatch(FormAction::Submit);
            let outcome = actions::save_preferences(
                &conn,
                Some(&editor.subscriber_id.to_string()),
                Some(&editor.preferences.to_document().to_string()),
            )
            .await;
            let editor = editor.dispatch(FormAction::Resolve(outcome.into()));
            views::render_editor(&editor, &token)
        }
    };
    FormReply::Page(RawHtml(html))
}
