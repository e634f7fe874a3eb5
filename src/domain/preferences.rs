use super::Topic;
use serde_json::Value;

/// Independent opt-in flags, one per [`Topic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Preferences {
    #[serde(default = "enabled")]
    pub immigration: bool,
    #[serde(default = "enabled")]
    pub tech: bool,
    #[serde(default = "enabled")]
    pub finance: bool,
}

fn enabled() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            immigration: true,
            tech: true,
            finance: true,
        }
    }
}

impl Preferences {
    /// Decodes the JSON document submitted alongside a form. Absent or
    /// unparsable input falls back to every topic enabled.
    pub fn from_submission(raw: Option<&str>) -> Preferences {
        let raw = match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Preferences::default(),
        };
        match serde_json::from_str::<Preferences>(raw) {
            Ok(preferences) => preferences,
            Err(e) => {
                tracing::debug!(error = %e, "Unparsable preferences, using defaults");
                Preferences::default()
            }
        }
    }

    /// Reads a stored preferences document. Flags that are missing or not
    /// booleans read as enabled; an explicit `false` is kept.
    pub fn from_stored(document: Option<&Value>) -> Preferences {
        let flags = match document.and_then(Value::as_object) {
            Some(flags) => flags,
            None => return Preferences::default(),
        };
        let flag = |topic: Topic| {
            flags
                .get(topic.as_str())
                .and_then(Value::as_bool)
                .unwrap_or(true)
        };
        Preferences {
            immigration: flag(Topic::Immigration),
            tech: flag(Topic::Tech),
            finance: flag(Topic::Finance),
        }
    }

    pub fn to_document(&self) -> Value {
        serde_json::json!({
            "immigration": self.immigration,
            "tech": self.tech,
            "finance": self.finance,
        })
    }

    pub fn is_enabled(&self, topic: Topic) -> bool {
        match topic {
            Topic::Immigration => self.immigration,
            Topic::Tech => self.tech,
            Topic::Finance => self.finance,
        }
    }

    pub fn toggle(&mut self, topic: Topic) {
        let flag = match topic {
            Topic::Immigration => &mut self.immigration,
            Topic::Tech => &mut self.tech,
            Topic::Finance => &mut self.finance,
        };
        *flag = !*flag;
    }

    pub fn enabled_topics(&self) -> impl Iterator<Item = Topic> + '_ {
        Topic::ALL
            .into_iter()
            .filter(move |topic| self.is_enabled(*topic))
    }

    pub fn any_enabled(&self) -> bool {
        self.enabled_topics().next().is_some()
    }
}
