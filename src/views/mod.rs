//! Server-rendered HTML. Every string that comes from the store or the
//! visitor goes through [`escape`]. Forms post as plain HTML forms; the inline
//! script upgrades them to background requests when it runs.

mod dashboard;
mod preferences;

pub use dashboard::render_dashboard;
pub use preferences::{render_editor, render_invalid_link, render_lookup};

use crate::domain::{Preferences, Topic};
use crate::form_state::FormStatus;

pub fn escape(s: &str) -> String {
    quick_xml::escape::escape(s).into_owned()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
</head>
<body>
{body}
<script>{script}</script>
</body>
</html>"#,
        title = escape(title),
        body = body,
        script = FORM_SCRIPT,
    )
}

fn topic_checkboxes(preferences: &Preferences, with_descriptions: bool) -> String {
    Topic::ALL
        .iter()
        .map(|topic| {
            let description = if with_descriptions {
                format!(r#"<p class="topic-description">{}</p>"#, topic.description())
            } else {
                String::new()
            };
            format!(
                r#"<label class="topic topic-{key}"><input type="checkbox" name="topics" value="{key}" data-topic="{key}"{checked} /> {label}</label>{description}"#,
                key = topic.as_str(),
                checked = if preferences.is_enabled(*topic) { " checked" } else { "" },
                label = topic.label(),
                description = description,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn status_message(status: &FormStatus, success_text: &str) -> String {
    let (kind, text) = match status {
        FormStatus::Idle | FormStatus::Submitting => ("", String::new()),
        FormStatus::Succeeded => ("success", escape(success_text)),
        FormStatus::Failed(message) => ("error", escape(message)),
    };
    format!(r#"<p class="message {}" data-message>{}</p>"#, kind, text)
}

// Serializes the topic checkboxes of a posted form into the `preferences`
// field and sends it in the background, asking for the JSON result.
const FORM_SCRIPT: &str = r#"
document.querySelectorAll("form[method=post]").forEach(function (form) {
  var topics = form.querySelectorAll("input[data-topic]");
  var submit = form.querySelector("button[type=submit]");
  var message = form.querySelector("[data-message]");
  function refresh() {
    if (form.hasAttribute("data-requires-topic") && submit) {
      submit.disabled = !Array.prototype.some.call(topics, function (t) { return t.checked; });
    }
  }
  topics.forEach(function (t) { t.addEventListener("change", function () { message.textContent = ""; refresh(); }); });
  refresh();
  form.addEventListener("submit", function (event) {
    event.preventDefault();
    var body = new URLSearchParams(new FormData(form));
    if (topics.length > 0) {
      var preferences = {};
      topics.forEach(function (t) { preferences[t.getAttribute("data-topic")] = t.checked; });
      body.set("preferences", JSON.stringify(preferences));
    }
    if (submit) { submit.disabled = true; }
    fetch(form.getAttribute("action"), { method: "POST", body: body, headers: { Accept: "application/json" } })
      .then(function (response) { return response.json(); })
      .then(function (result) {
        message.className = "message " + (result.success ? "success" : "error");
        message.textContent = result.success ? form.getAttribute("data-success") : (result.error || "Something went wrong");
        if (result.success && form.hasAttribute("data-clear-on-success")) { form.reset(); }
      })
      .catch(function () {
        message.className = "message error";
        message.textContent = "Something went wrong";
      })
      .finally(function () { if (submit) { submit.disabled = false; } refresh(); });
  });
});
"#;
