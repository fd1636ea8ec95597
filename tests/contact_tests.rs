
use serde_json::{json, Value};
use test_utils::*;

use reqwest::StatusCode;

fn valid_submission(email: &str) -> Value {
    json!({
        "name": "Ada",
        "email": email,
        "message": "I would love to commission a piece.",
        "website": ""
    })
}

#[actix_rt::test]
async fn valid_submission_is_sent() {
    let app = TestApp::spawn().await;

    let response = app.post_contact(&valid_submission("ada@example.com")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Your message has been sent successfully!");

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].reply_to, "ada@example.com");
    assert_eq!(sent[0].to, app.config.mail.to);
    assert!(app.state.cooldowns().last_accepted("ada@example.com").is_some());
}

#[actix_rt::test]
async fn urlencoded_form_posts_are_accepted() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(&format!("{}/api/v1/contact", app.address))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("name=Ada&email=form%40example.com&message=hello+from+the+form&website=")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.mailer.sent().len(), 1);
}

#[actix_rt::test]
async fn honeypot_submission_pretends_to_succeed() {
    let app = TestApp::spawn().await;

    let mut bot = valid_submission("bot@example.com");
    bot["website"] = json!("http://cheap-pills.example");

    let response = app.post_contact(&bot).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Form submitted successfully");
    assert!(app.mailer.sent().is_empty());
    assert!(app.state.cooldowns().is_empty());
}

#[actix_rt::test]
async fn missing_name_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post_contact(&json!({ "email": "a@b.com", "message": "hello world!" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Name is required");
    assert!(app.mailer.sent().is_empty());
}

#[actix_rt::test]
async fn repeat_submission_is_rate_limited() {
    let app = TestApp::spawn().await;

    let first = app.post_contact(&valid_submission("repeat@example.com")).await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.post_contact(&valid_submission("repeat@example.com")).await;
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = second.json().await.unwrap();
    assert_eq!(body["message"], "Please wait a minute before submitting again");

    let other = app.post_contact(&valid_submission("other@example.com")).await;
    assert_eq!(other.status(), StatusCode::OK);
    assert_eq!(app.mailer.sent().len(), 2);
}

#[actix_rt::test]
async fn transport_failure_returns_generic_message() {
    let app = TestApp::spawn().await;
    app.mailer.fail_from_now_on();

    let response = app.post_contact(&valid_submission("ada@example.com")).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to send your message. Please try again later.");
    assert!(app.state.cooldowns().last_accepted("ada@example.com").is_none());
}

#[actix_rt::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(&format!("{}/api/v1/contact", app.address))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.mailer.sent().is_empty());
}

#[actix_rt::test]
async fn oversized_body_is_refused_before_the_pipeline() {
    let app = TestApp::spawn().await;

    let mut body = valid_submission("big@example.com");
    body["message"] = json!("x".repeat(20 * 1024));

    let response = app.post_contact(&body).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("JSON payload error"));
    assert!(app.mailer.sent().is_empty());
    assert!(app.state.cooldowns().is_empty());
}
