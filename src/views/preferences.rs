use super::{escape, layout, status_message, topic_checkboxes};
use crate::form_state::{FormStatus, PreferencesEditor};

const LINK_SENT: &str =
    "Check your inbox. If you're subscribed, we've sent a link to manage your preferences.";

pub fn render_lookup(status: &FormStatus) -> String {
    let body = format!(
        r#"<main class="preferences">
<header>
<h1>Manage Preferences</h1>
<p>Enter your email to receive a magic link for managing your preferences</p>
</header>
<form method="post" action="/preferences/magic-link" data-clear-on-success data-success="{success}">
<input type="email" name="email" placeholder="Enter your email" required />
<button type="submit">Send Magic Link</button>
{message}
</form>
<a href="/">Back to dashboard</a>
</main>"#,
        success = escape(LINK_SENT),
        message = status_message(status, LINK_SENT),
    );
    layout("Manage Preferences", &body)
}

/// `token` is echoed back so a plain form post can re-open the same editor.
pub fn render_editor(editor: &PreferencesEditor, token: &str) -> String {
    let body = format!(
        r#"<main class="preferences">
<header>
<h1>Email Preferences</h1>
<p>Choose which topics you want in your daily brief</p>
</header>
<p class="managing">Managing preferences for: <span class="email">{email}</span></p>
<form method="post" action="/preferences" data-success="Preferences saved successfully!">
<input type="hidden" name="subscriber_id" value="{subscriber_id}" />
<input type="hidden" name="token" value="{token}" />
<div class="topics">
{topics}
</div>
{message}
<button type="submit">Save Preferences</button>
</form>
</main>"#,
        email = escape(&editor.email),
        subscriber_id = editor.subscriber_id,
        token = escape(token),
        topics = topic_checkboxes(&editor.preferences, true),
        message = status_message(&editor.status, "Preferences saved successfully!"),
    );
    layout("Email Preferences", &body)
}

pub fn render_invalid_link(message: &str) -> String {
    let body = format!(
        r#"<main class="preferences">
<div class="invalid-link">
<h1>Invalid Link</h1>
<p>{}</p>
<p class="hint">Please use the link from your email to manage preferences.</p>
</div>
</main>"#,
        escape(message)
    );
    layout("Invalid Link", &body)
}
