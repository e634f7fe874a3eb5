use crate::domain::NewsFeed;
use crate::store::NewsStore;

/// Reads the latest `limit` items. A failed read renders as an empty feed.
#[tracing::instrument(name = "Loading the dashboard", skip(store))]
pub async fn load_dashboard<S>(store: &S, limit: i64) -> NewsFeed
where
    S: NewsStore + ?Sized,
{
    match store.recent_news(limit).await {
        Ok(items) => NewsFeed::new(items),
        Err(e) => {
            tracing::error!(error.cause_chain = ?e, "Failed to fetch news items");
            NewsFeed::default()
        }
    }
}
