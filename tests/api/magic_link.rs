use crate::helpers::spawn_app;
use serde_json::json;

#[tokio::test]
async fn a_subscriber_receives_a_link_to_their_preferences() {
    // arrange
    let mut app = spawn_app().await;
    let subscriber = app.subscribe("ursula_le_guin@gmail.com").await;

    // act
    let response = app
        .post_magic_link(&[("email", "URSULA_LE_GUIN@gmail.com")])
        .await;

    // assert
    assert_eq!(200, response.status().as_u16());
    let emails = app.email_client.sent_emails.lock().unwrap().clone();
    assert_eq!(emails.len(), 1, "Expected 1 email, {} were sent", emails.len());
    assert_eq!(emails[0].recipient, "ursula_le_guin@gmail.com");
    assert_eq!(emails[0].subject, "Manage your preferences");

    let magic_link = app.get_magic_link(&emails[0]);
    assert_eq!(magic_link.path(), "/preferences");
    let token = magic_link
        .query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned());
    assert_eq!(token.as_deref(), Some(subscriber.management_token.as_str()));
    assert!(emails[0].html.contains(&subscriber.management_token));
}

#[tokio::test]
async fn following_the_magic_link_opens_the_editor() {
    // arrange
    let mut app = spawn_app().await;
    app.subscribe("ursula_le_guin@gmail.com").await;
    app.post_magic_link(&[("email", "ursula_le_guin@gmail.com")])
        .await;
    let email = app.email_client.sent_emails.lock().unwrap()[0].clone();
    let magic_link = app.get_magic_link(&email);

    // act
    let response = reqwest::get(magic_link).await.unwrap();

    // assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("Email Preferences"));
    assert!(html.contains("ursula_le_guin@gmail.com"));
}

#[tokio::test]
async fn unknown_emails_get_the_same_response_as_subscribers() {
    // arrange
    let mut app = spawn_app().await;
    app.subscribe("ursula_le_guin@gmail.com").await;

    // act
    let known = app
        .post_magic_link(&[("email", "ursula_le_guin@gmail.com")])
        .await;
    let unknown = app
        .post_magic_link(&[("email", "nobody@example.com")])
        .await;

    // assert
    assert_eq!(known.status(), unknown.status());
    assert_eq!(known.text().await.unwrap(), unknown.text().await.unwrap());
    let emails = app.email_client.sent_emails.lock().unwrap();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].recipient, "ursula_le_guin@gmail.com");
}

#[tokio::test]
async fn repeated_requests_inside_the_cooldown_send_a_single_link() {
    // arrange
    let mut app = spawn_app().await;
    app.subscribe("ursula_le_guin@gmail.com").await;

    // act
    for _ in 0..3 {
        let response = app
            .post_magic_link(&[("email", "ursula_le_guin@gmail.com")])
            .await;
        assert_eq!(200, response.status().as_u16());
    }

    // assert
    assert_eq!(app.email_client.sent_emails.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn magic_link_returns_a_400_for_invalid_emails() {
    // arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (vec![], "Email is required"),
        (vec![("email", "definitely-not-an-email")], "Invalid email format"),
        (vec![("email", "ursula@localhost")], "Invalid email format"),
    ];

    for (body, message) in test_cases {
        // act
        let response = app.post_magic_link(&body).await;

        // assert
        assert_eq!(400, response.status().as_u16());
        let result: serde_json::Value = response.json().await.unwrap();
        assert_eq!(result, json!({ "success": false, "error": message }));
    }
    assert!(app.email_client.sent_emails.lock().unwrap().is_empty());
}

#[tokio::test]
async fn a_plain_form_post_confirms_on_the_lookup_page() {
    // arrange
    let mut app = spawn_app().await;
    app.subscribe("ursula_le_guin@gmail.com").await;

    // act
    let known = app
        .post_page(
            "/preferences/magic-link",
            &[("email", "ursula_le_guin@gmail.com")],
        )
        .await;
    let unknown = app
        .post_page("/preferences/magic-link", &[("email", "nobody@example.com")])
        .await;

    // assert
    assert!(known.contains("Check your inbox."));
    assert_eq!(known, unknown);
    assert_eq!(app.email_client.sent_emails.lock().unwrap().len(), 1);
}
