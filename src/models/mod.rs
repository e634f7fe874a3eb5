mod news_item;
mod subscriber;

pub use news_item::NewsItemRow;
pub use subscriber::{NewSubscriberRow, SubscriberRow};
