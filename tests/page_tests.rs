
use serde_json::Value;
use test_utils::*;

use reqwest::StatusCode;

#[actix_rt::test]
async fn home_reports_version() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_rt::test]
async fn scroll_effects_halfway_down_the_hero() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/page/scroll?scroll_y=400&viewport_height=800").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["hero"]["opacity"], 0.5);
    assert_eq!(body["hero"]["blur"], 7.5);
    assert_eq!(body["intro"]["visible"], false);
    assert_eq!(body["navbar_opacity"], 0.0);
    assert_eq!(body["navbar_scrolled"], true);
}

#[actix_rt::test]
async fn scroll_effects_require_both_parameters() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/page/scroll?scroll_y=400").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Query error"));
}

#[actix_rt::test]
async fn hero_frame_follows_the_timeline() {
    let app = TestApp::spawn().await;

    let spinning: Value = app.get("/api/v1/page/hero?elapsed_ms=3000").await.json().await.unwrap();
    assert_eq!(spinning["phase"], "spinning");
    assert_eq!(spinning["is_spinning"], true);
    assert_eq!(spinning["current_word"], "loss");

    let done: Value = app.get("/api/v1/page/hero?elapsed_ms=9000").await.json().await.unwrap();
    assert_eq!(done["current_word"], "gain");
    assert_eq!(done["animation_complete"], true);
    assert_eq!(done["sequence"].as_array().unwrap().len(), 5);
}

#[actix_rt::test]
async fn donation_info_carries_the_handle() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/donate").await.json().await.unwrap();

    assert_eq!(body["handle"], "@CoGaineum-Art");
    assert_eq!(body["reasons"].as_array().unwrap().len(), 3);
}

#[actix_rt::test]
async fn portfolio_lists_categories_and_404s_unknown_ones() {
    let app = TestApp::spawn().await;

    let list: Value = app.get("/api/v1/portfolio").await.json().await.unwrap();
    assert_eq!(list["total_works"], 6);

    let visual = app.get("/api/v1/portfolio/visual").await;
    assert_eq!(visual.status(), StatusCode::OK);
    let visual: Value = visual.json().await.unwrap();
    assert_eq!(visual["label"], "Visual Art");

    let missing = app.get("/api/v1/portfolio/sculpture").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn health_reports_cooldown_table() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["cooldown_entries"].is_u64());
}
