use crate::helpers::spawn_app;
use chrono::{Duration, Utc};

#[tokio::test]
async fn the_dashboard_shows_the_newest_items_first() {
    // arrange
    let mut app = spawn_app().await;
    let now = Utc::now();
    for i in 0..25 {
        app.insert_news_item(
            &format!("Story {:02}", i),
            "tech",
            now - Duration::minutes(25 - i),
        );
    }

    // act
    let response = app.get_dashboard(None).await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("20 items"));
    assert_eq!(html.matches(r#"<article class="news-card">"#).count(), 20);
    for i in 0..5 {
        assert!(!html.contains(&format!("Story {:02}", i)));
    }
    let newest = html.find("Story 24").unwrap();
    let oldest = html.find("Story 05").unwrap();
    assert!(newest < oldest);
}

#[tokio::test]
async fn the_category_filter_narrows_the_cards() {
    // arrange
    let mut app = spawn_app().await;
    let now = Utc::now();
    app.insert_news_item("Visa rules change", "Immigration", now);
    app.insert_news_item("Chip plant opens", "tech", now);
    app.insert_news_item("AI bill passes", "TECH", now);
    app.insert_news_item("Rates held", "finance", now);

    // act
    let response = app.get_dashboard(Some("tech")).await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Chip plant opens"));
    assert!(html.contains("AI bill passes"));
    assert!(!html.contains("Visa rules change"));
    assert!(!html.contains("Rates held"));
    assert!(html.contains("2 items in tech"));
    assert!(html.contains(r#"All <span class="count">4</span>"#));
}

#[tokio::test]
async fn an_unknown_category_shows_everything() {
    // arrange
    let mut app = spawn_app().await;
    let now = Utc::now();
    app.insert_news_item("Chip plant opens", "tech", now);
    app.insert_news_item("Rates held", "finance", now);

    // act
    let response = app.get_dashboard(Some("sport")).await;

    // assert
    let html = response.text().await.unwrap();
    assert!(html.contains("Chip plant opens"));
    assert!(html.contains("Rates held"));
    assert!(html.contains("2 items"));
}

#[tokio::test]
async fn the_dashboard_may_be_cached_until_it_is_stale() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get_dashboard(None).await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let cache_control = response
        .headers()
        .get("Cache-Control")
        .expect("No Cache-Control header.")
        .to_str()
        .unwrap()
        .to_owned();
    assert_eq!(cache_control, "public, max-age=300");
}

#[tokio::test]
async fn an_empty_store_renders_the_empty_state() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app.get_dashboard(None).await;

    // assert
    let html = response.text().await.unwrap();
    assert!(html.contains("No news items available yet."));
    assert!(html.contains(r#"action="/subscriptions""#));
}
