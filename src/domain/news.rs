use super::{CategoryFilter, Topic};
use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub category: String,
    pub summary: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub scraped_at: DateTime<Utc>,
}

impl NewsItem {
    /// The article address, if it is an `http` or `https` URL. Items come
    /// from an external job, so anything else is never linked.
    pub fn link(&self) -> Option<Url> {
        Url::parse(self.url.trim())
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
    }
}

/// The most recently ingested items, newest first, as read for one page view.
#[derive(Debug, Clone, Default)]
pub struct NewsFeed {
    items: Vec<NewsItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    pub all: usize,
    pub immigration: usize,
    pub tech: usize,
    pub finance: usize,
}

impl CategoryCounts {
    pub fn get(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(Topic::Immigration) => self.immigration,
            CategoryFilter::Only(Topic::Tech) => self.tech,
            CategoryFilter::Only(Topic::Finance) => self.finance,
        }
    }
}

impl NewsFeed {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&NewsItem> {
        self.items
            .iter()
            .filter(|item| filter.admits(&item.category))
            .collect()
    }

    /// Counts are taken over the whole feed, whatever filter is active.
    pub fn counts(&self) -> CategoryCounts {
        let count = |topic: Topic| {
            self.items
                .iter()
                .filter(|item| topic.matches(&item.category))
                .count()
        };
        CategoryCounts {
            all: self.items.len(),
            immigration: count(Topic::Immigration),
            tech: count(Topic::Tech),
            finance: count(Topic::Finance),
        }
    }
}
