use rocket::outcome::Outcome::Success;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use std::convert::Infallible;

/// How a form reached the server. The page script asks for JSON; a plain
/// browser post prefers HTML and gets the re-rendered page back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Script,
    Document,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Submission {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let prefers_html = request
            .accept()
            .map(|accept| accept.preferred().media_type().is_html())
            .unwrap_or(false);
        if prefers_html {
            Success(Submission::Document)
        } else {
            Success(Submission::Script)
        }
    }
}
