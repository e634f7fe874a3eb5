#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Invalid subscriber id")]
    InvalidSubscriberId,
}
