use crate::domain::NewsItem;
use chrono::offset::Utc;
use chrono::DateTime;
use diesel::prelude::*;

#[derive(Queryable, Debug)]
pub struct NewsItemRow {
    pub id: uuid::Uuid,
    pub title: String,
    pub url: String,
    pub category: String,
    pub summary: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub scraped_at: DateTime<Utc>,
}

impl From<NewsItemRow> for NewsItem {
    fn from(row: NewsItemRow) -> Self {
        NewsItem {
            id: row.id,
            title: row.title,
            url: row.url,
            category: row.category,
            summary: row.summary,
            published_at: row.published_at,
            scraped_at: row.scraped_at,
        }
    }
}
