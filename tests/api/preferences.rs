use crate::helpers::spawn_app;
use alfred_brief::domain::Preferences;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn preferences_without_a_token_asks_for_an_email() {
    // arrange
    let app = spawn_app().await;

    for token in [None, Some(""), Some("   ")] {
        // act
        let response = app.get_preferences(token).await;

        // assert
        assert_eq!(200, response.status().as_u16());
        let html = response.text().await.unwrap();
        assert!(html.contains("Manage Preferences"));
        assert!(html.contains(r#"action="/preferences/magic-link""#));
    }
}

#[tokio::test]
async fn an_unknown_token_shows_the_invalid_link_view() {
    // arrange
    let mut app = spawn_app().await;
    app.subscribe("ursula_le_guin@gmail.com").await;

    // act
    let response = app.get_preferences(Some("not-a-real-token")).await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Invalid Link"));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn a_valid_token_opens_the_editor_with_the_stored_preferences() {
    // arrange
    let mut app = spawn_app().await;
    app.post_subscriptions(&[
        ("email", "ursula_le_guin@gmail.com"),
        (
            "preferences",
            r#"{"immigration":false,"tech":true,"finance":false}"#,
        ),
    ])
    .await;
    let subscriber = app.saved_subscriber("ursula_le_guin@gmail.com");

    // act
    let response = app
        .get_preferences(Some(&subscriber.management_token))
        .await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Email Preferences"));
    assert!(html.contains("ursula_le_guin@gmail.com"));
    assert!(html.contains(&format!(
        r#"name="subscriber_id" value="{}""#,
        subscriber.id
    )));
    assert!(html.contains(r#"data-topic="immigration" />"#));
    assert!(html.contains(r#"data-topic="tech" checked"#));
}

#[tokio::test]
async fn saved_preferences_are_shown_on_the_next_visit() {
    // arrange
    let mut app = spawn_app().await;
    let subscriber = app.subscribe("ursula_le_guin@gmail.com").await;
    let subscriber_id = subscriber.id.to_string();

    // act
    let response = app
        .post_preferences(&[
            ("subscriber_id", subscriber_id.as_str()),
            (
                "preferences",
                r#"{"immigration":false,"tech":true,"finance":false}"#,
            ),
        ])
        .await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let result: serde_json::Value = response.json().await.unwrap();
    assert_eq!(result, json!({ "success": true }));

    let saved = app.saved_subscriber("ursula_le_guin@gmail.com");
    assert_eq!(
        Preferences::from_stored(saved.preferences.as_ref()),
        Preferences {
            immigration: false,
            tech: true,
            finance: false,
        }
    );
    assert!(saved.updated_at > subscriber.updated_at);
    assert_eq!(saved.management_token, subscriber.management_token);

    let html = app
        .get_preferences(Some(&saved.management_token))
        .await
        .text()
        .await
        .unwrap();
    assert!(html.contains(r#"data-topic="immigration" />"#));
    assert!(html.contains(r#"data-topic="tech" checked"#));
    assert!(html.contains(r#"data-topic="finance" />"#));
}

#[tokio::test]
async fn every_topic_can_be_turned_off() {
    // arrange
    let mut app = spawn_app().await;
    let subscriber = app.subscribe("ursula_le_guin@gmail.com").await;
    let subscriber_id = subscriber.id.to_string();

    // act
    let response = app
        .post_preferences(&[
            ("subscriber_id", subscriber_id.as_str()),
            (
                "preferences",
                r#"{"immigration":false,"tech":false,"finance":false}"#,
            ),
        ])
        .await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let saved = app.saved_subscriber("ursula_le_guin@gmail.com");
    assert!(!Preferences::from_stored(saved.preferences.as_ref()).any_enabled());
}

#[tokio::test]
async fn saving_for_an_unknown_subscriber_changes_nothing() {
    // arrange
    let mut app = spawn_app().await;
    let subscriber = app.subscribe("ursula_le_guin@gmail.com").await;
    let unknown_id = Uuid::new_v4().to_string();

    // act
    let response = app
        .post_preferences(&[
            ("subscriber_id", unknown_id.as_str()),
            (
                "preferences",
                r#"{"immigration":false,"tech":false,"finance":false}"#,
            ),
        ])
        .await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let saved = app.saved_subscriber("ursula_le_guin@gmail.com");
    assert_eq!(saved.preferences, subscriber.preferences);
    assert_eq!(saved.updated_at, subscriber.updated_at);
}

#[tokio::test]
async fn saving_returns_a_400_for_a_malformed_subscriber_id() {
    // arrange
    let app = spawn_app().await;
    let test_cases = vec![
        vec![("preferences", r#"{"tech":false}"#)],
        vec![
            ("subscriber_id", "not-a-uuid"),
            ("preferences", r#"{"tech":false}"#),
        ],
    ];

    for body in test_cases {
        // act
        let response = app.post_preferences(&body).await;

        // assert
        assert_eq!(400, response.status().as_u16());
        let result: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            result,
            json!({ "success": false, "error": "Invalid subscriber id" })
        );
    }
}

#[tokio::test]
async fn a_plain_form_post_saves_and_shows_the_editor_again() {
    // arrange
    let mut app = spawn_app().await;
    let subscriber = app.subscribe("ursula_le_guin@gmail.com").await;
    let subscriber_id = subscriber.id.to_string();

    // act
    let html = app
        .post_page(
            "/preferences",
            &[
                ("subscriber_id", subscriber_id.as_str()),
                ("token", subscriber.management_token.as_str()),
                ("topics", "immigration"),
            ],
        )
        .await;

    // assert
    assert!(html.contains("Preferences saved successfully!"));
    assert!(html.contains(r#"data-topic="immigration" checked"#));
    assert!(html.contains(r#"data-topic="tech" />"#));
    assert!(html.contains(r#"data-topic="finance" />"#));
    let saved = app.saved_subscriber("ursula_le_guin@gmail.com");
    assert_eq!(
        Preferences::from_stored(saved.preferences.as_ref()),
        Preferences {
            immigration: true,
            tech: false,
            finance: false,
        }
    );
}

#[tokio::test]
async fn a_plain_form_post_with_an_unknown_token_saves_nothing() {
    // arrange
    let mut app = spawn_app().await;
    let subscriber = app.subscribe("ursula_le_guin@gmail.com").await;
    let subscriber_id = subscriber.id.to_string();

    // act
    let html = app
        .post_page(
            "/preferences",
            &[
                ("subscriber_id", subscriber_id.as_str()),
                ("token", "not-a-real-token"),
            ],
        )
        .await;

    // assert
    assert!(html.contains("Invalid Link"));
    let saved = app.saved_subscriber("ursula_le_guin@gmail.com");
    assert_eq!(saved.preferences, subscriber.preferences);
}
