//! Server actions behind the form submissions and pages. Each one is an
//! independent request against the store; nothing is shared between calls
//! except the magic-link throttle.

mod dashboard;
mod magic_link;
mod preferences;
mod subscribe;

pub use dashboard::load_dashboard;
pub use magic_link::{request_magic_link, MagicLinkDelivery};
pub use preferences::{load_preferences_page, save_preferences, PreferencesPage};
pub use subscribe::subscribe;

use crate::domain::ValidationError;
use crate::routes::error_chain_fmt;
use crate::store::StoreError;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const SAVE_FAILURE: &str = "Failed to save preferences. Please try again.";

/// What the browser receives from every form submission.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// `message` is the only part shown to the caller.
    #[error("{message}")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ActionError {
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> ActionError {
        move |source| ActionError::Store { message, source }
    }

    pub fn to_result(&self) -> ActionResult {
        ActionResult::failure(self.to_string())
    }
}

impl std::fmt::Debug for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<Result<(), ActionError>> for ActionResult {
    fn from(outcome: Result<(), ActionError>) -> Self {
        match outcome {
            Ok(()) => ActionResult::success(),
            Err(e) => e.to_result(),
        }
    }
}
