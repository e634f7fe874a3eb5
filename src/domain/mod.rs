mod management_token;
mod new_subscriber;
mod news;
mod preferences;
mod subscriber_email;
mod topic;
mod validation_error;

pub use management_token::ManagementToken;
pub use new_subscriber::{NewSubscriber, SubscriberProfile};
pub use news::{CategoryCounts, NewsFeed, NewsItem};
pub use preferences::Preferences;
pub use subscriber_email::SubscriberEmail;
pub use validation_error::ValidationError;
pub use topic::{CategoryFilter, Topic};
