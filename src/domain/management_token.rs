use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use secrecy::{ExposeSecret, Secret};

const TOKEN_LENGTH: usize = 25;

/// Bearer credential granting edit access to one subscriber's preferences.
#[derive(Debug)]
pub struct ManagementToken(Secret<String>);

impl ManagementToken {
    pub fn generate() -> ManagementToken {
        let mut rng = thread_rng();
        let token = std::iter::repeat_with(|| rng.sample(Alphanumeric))
            .map(char::from)
            .take(TOKEN_LENGTH)
            .collect();
        Self(Secret::new(token))
    }

    pub fn from_stored(token: String) -> ManagementToken {
        Self(Secret::new(token))
    }

    /// `<base_url>/preferences?token=<token>`
    pub fn management_link(&self, base_url: &str) -> String {
        format!(
            "{}/preferences?token={}",
            base_url.trim_end_matches('/'),
            self.0.expose_secret()
        )
    }
}

impl ExposeSecret<String> for ManagementToken {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}
