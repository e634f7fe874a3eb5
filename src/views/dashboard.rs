use super::{escape, layout, status_message, topic_checkboxes};
use crate::domain::{CategoryFilter, NewsFeed, NewsItem, Topic};
use crate::form_state::SubscribeForm;

pub fn render_dashboard(feed: &NewsFeed, filter: CategoryFilter, form: &SubscribeForm) -> String {
    let body = format!(
        r#"<main class="dashboard">
{header}
<section class="news">
{news}
</section>
</main>"#,
        header = subscribe_header(form),
        news = news_section(feed, filter),
    );
    layout("The Alfred Brief", &body)
}

fn subscribe_header(form: &SubscribeForm) -> String {
    format!(
        r#"<header class="dashboard-header">
<h1>Your Daily Intelligence Brief</h1>
<p>Curated UK news on Immigration, Tech &amp; Finance.</p>
<form method="post" action="/subscriptions" data-requires-topic data-clear-on-success data-success="You're subscribed! Check your inbox tomorrow morning.">
<div class="topics">
{topics}
</div>
<input type="email" name="email" value="{email}" placeholder="Enter your email" required />
<button type="submit"{disabled}>Get the Brief</button>
{message}
</form>
<a href="/preferences">Already subscribed? Manage preferences</a>
</header>"#,
        topics = topic_checkboxes(&form.topics, false),
        email = escape(&form.email),
        disabled = if form.topics.any_enabled() { "" } else { " disabled" },
        message = status_message(&form.status, "You're subscribed!"),
    )
}

fn news_section(feed: &NewsFeed, filter: CategoryFilter) -> String {
    let visible = feed.filtered(filter);
    let summary = match (visible.len(), filter) {
        (1, CategoryFilter::All) => "1 item".to_string(),
        (n, CategoryFilter::All) => format!("{} items", n),
        (1, CategoryFilter::Only(topic)) => format!("1 item in {}", topic),
        (n, CategoryFilter::Only(topic)) => format!("{} items in {}", n, topic),
    };
    let content = if visible.is_empty() {
        empty_state(filter)
    } else {
        format!(
            r#"<div class="news-grid">
{}
</div>"#,
            visible
                .iter()
                .map(|item| news_card(item))
                .collect::<Vec<_>>()
                .join("\n")
        )
    };
    format!(
        r#"<div class="news-header">
<h2>Latest Intelligence</h2>
<p class="news-count">{summary}</p>
{tabs}
</div>
{content}"#,
        summary = summary,
        tabs = category_tabs(feed, filter),
        content = content,
    )
}

fn category_tabs(feed: &NewsFeed, active: CategoryFilter) -> String {
    let counts = feed.counts();
    let tabs = CategoryFilter::choices()
        .iter()
        .map(|filter| {
            let href = match filter {
                CategoryFilter::All => "/".to_string(),
                CategoryFilter::Only(topic) => format!("/?category={}", topic),
            };
            format!(
                r#"<a class="tab tab-{key}{active}" href="{href}">{label} <span class="count">{count}</span></a>"#,
                key = filter.as_str(),
                active = if *filter == active { " active" } else { "" },
                href = href,
                label = filter.label(),
                count = counts.get(*filter),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<nav class="category-filter">{}</nav>"#, tabs)
}

fn empty_state(filter: CategoryFilter) -> String {
    let (headline, hint) = match filter {
        CategoryFilter::All => (
            "No news items available yet.".to_string(),
            "Check back later for the latest updates.",
        ),
        CategoryFilter::Only(topic) => (
            format!("No {} news available.", topic),
            "Try selecting a different category.",
        ),
    };
    format!(
        r#"<div class="empty-state"><p>{}</p><p class="hint">{}</p></div>"#,
        headline, hint
    )
}

fn news_card(item: &NewsItem) -> String {
    let badge_class = Topic::parse(&item.category)
        .map(|topic| topic.as_str())
        .unwrap_or("default");
    let published = item
        .published_at
        .map(|at| {
            format!(
                r#"<time datetime="{}">{}</time>"#,
                at.to_rfc3339(),
                at.format("%-d %b")
            )
        })
        .unwrap_or_default();
    let summary = item
        .summary
        .as_deref()
        .map(|summary| format!(r#"<p class="summary">{}</p>"#, escape(summary)))
        .unwrap_or_default();
    let link = match item.link() {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">Read article</a>"#,
            escape(url.as_str())
        ),
        None => r#"<span class="link-unavailable">Link unavailable</span>"#.to_string(),
    };
    format!(
        r#"<article class="news-card">
<div class="card-header"><span class="badge badge-{badge_class}">{category}</span>{published}</div>
<h3>{title}</h3>
{summary}
{link}
</article>"#,
        badge_class = badge_class,
        category = escape(&item.category),
        published = published,
        title = escape(&item.title),
        summary = summary,
        link = link,
    )
}
