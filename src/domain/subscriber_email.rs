use super::ValidationError;
use validator::validate_email;

/// A trimmed, lowercased address of the shape `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: &str) -> Result<SubscriberEmail, ValidationError> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if has_address_shape(&normalized) && validate_email(normalized.as_str()) {
            Ok(Self(normalized))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

// One `@`, no whitespace, and a dot inside the domain with text on both sides.
fn has_address_shape(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match s.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
