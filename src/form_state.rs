//! Per-visitor form state. Each form owns its value and changes only through
//! `dispatch`; pages render from these values. A plain (script-less) form
//! post is replayed through the same transitions before the page is
//! rendered again.

use crate::actions::ActionResult;
use crate::domain::{Preferences, SubscriberProfile, Topic, ValidationError};
use uuid::Uuid;

pub const NO_TOPIC_SELECTED: &str = "Select at least one topic";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    EditEmail(String),
    ToggleTopic(Topic),
    Submit,
    Resolve(ActionResult),
    Reset,
}

impl From<ActionResult> for FormStatus {
    fn from(result: ActionResult) -> Self {
        if result.success {
            FormStatus::Succeeded
        } else {
            FormStatus::Failed(
                result
                    .error
                    .unwrap_or_else(|| "Something went wrong".to_string()),
            )
        }
    }
}

/// Topics ticked in a posted form. Unknown values are ignored.
pub fn ticked_topics(values: &[String]) -> Vec<Topic> {
    values.iter().filter_map(|value| Topic::parse(value)).collect()
}

fn toggles_towards(current: &Preferences, ticked: &[Topic]) -> Vec<FormAction> {
    Topic::ALL
        .into_iter()
        .filter(|topic| current.is_enabled(*topic) != ticked.contains(topic))
        .map(FormAction::ToggleTopic)
        .collect()
}

/// The subscribe control on the dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubscribeForm {
    pub email: String,
    pub topics: Preferences,
    pub status: FormStatus,
}

impl SubscribeForm {
    /// Replays a posted form onto a fresh control: the typed email, then one
    /// toggle per topic whose box differs from the default.
    pub fn from_submission(email: &str, ticked: &[Topic]) -> Self {
        let form = SubscribeForm::default().dispatch(FormAction::EditEmail(email.to_string()));
        toggles_towards(&form.topics, ticked)
            .into_iter()
            .fold(form, SubscribeForm::dispatch)
    }

    /// At least one topic must be picked before subscribing. The store does
    /// not enforce this.
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty()
            && self.topics.any_enabled()
            && self.status != FormStatus::Submitting
    }

    pub fn dispatch(mut self, action: FormAction) -> Self {
        match action {
            FormAction::EditEmail(email) => self.email = email,
            FormAction::ToggleTopic(topic) => self.topics.toggle(topic),
            FormAction::Submit => {
                if self.status == FormStatus::Submitting {
                    return self;
                }
                self.status = if self.email.trim().is_empty() {
                    FormStatus::Failed(ValidationError::MissingEmail.to_string())
                } else if !self.topics.any_enabled() {
                    FormStatus::Failed(NO_TOPIC_SELECTED.to_string())
                } else {
                    FormStatus::Submitting
                };
            }
            FormAction::Resolve(result) => {
                if self.status == FormStatus::Submitting {
                    if result.success {
                        self.email.clear();
                    }
                    self.status = result.into();
                }
            }
            FormAction::Reset => {
                self.email.clear();
                self.status = FormStatus::Idle;
            }
        }
        self
    }
}

/// The editable form shown for a resolved management token. It carries the
/// subscriber id for the rest of the edit session.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferencesEditor {
    pub subscriber_id: Uuid,
    pub email: String,
    pub preferences: Preferences,
    pub status: FormStatus,
}

impl From<SubscriberProfile> for PreferencesEditor {
    fn from(profile: SubscriberProfile) -> Self {
        Self {
            subscriber_id: profile.id,
            email: profile.email,
            preferences: profile.preferences,
            status: FormStatus::Idle,
        }
    }
}

impl PreferencesEditor {
    /// Brings the checkboxes in line with the ones ticked in a posted form.
    pub fn with_ticked(self, ticked: &[Topic]) -> Self {
        toggles_towards(&self.preferences, ticked)
            .into_iter()
            .fold(self, PreferencesEditor::dispatch)
    }

    pub fn dispatch(mut self, action: FormAction) -> Self {
        match action {
            // The address is fixed once the token is resolved.
            FormAction::EditEmail(_) => {}
            FormAction::ToggleTopic(topic) => {
                self.preferences.toggle(topic);
                if self.status != FormStatus::Submitting {
                    self.status = FormStatus::Idle;
                }
            }
            FormAction::Submit => {
                if self.status != FormStatus::Submitting {
                    self.status = FormStatus::Submitting;
                }
            }
            FormAction::Resolve(result) => {
                if self.status == FormStatus::Submitting {
                    self.status = result.into();
                }
            }
            FormAction::Reset => self.status = FormStatus::Idle,
        }
        self
    }
}
