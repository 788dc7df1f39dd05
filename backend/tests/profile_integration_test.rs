//! Integration tests for profile endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_new_account_has_empty_profile() {
    let app = common::TestApp::new().await;
    let token = app.register_user().await;

    let (status, response) = app.get_auth("/api/v1/profile", &token).await;

    assert_eq!(status, StatusCode::OK);
    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(profile["name"], "");
    assert!(profile.get("goal").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_partial_update_leaves_other_fields() {
    let app = common::TestApp::new().await;
    let token = app.register_user().await;

    let update = json!({ "name": "Sam", "goal": "strength" });
    let (status, _) = app.put_auth("/api/v1/profile", &update.to_string(), &token).await;
    assert_eq!(status, StatusCode::OK);

    let update = json!({ "workouts_per_week": "4" });
    let (status, response) = app.put_auth("/api/v1/profile", &update.to_string(), &token).await;
    assert_eq!(status, StatusCode::OK);

    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(profile["name"], "Sam");
    assert_eq!(profile["goal"], "strength");
    assert_eq!(profile["workouts_per_week"], "4");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_unknown_goal_token_rejected() {
    let app = common::TestApp::new().await;
    let token = app.register_user().await;

    let update = json!({ "goal": "get swole" });
    let (status, response) = app.put_auth("/api/v1/profile", &update.to_string(), &token).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.contains("VALIDATION_ERROR"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_blank_clears_a_field() {
    let app = common::TestApp::new().await;
    let token = app.register_user().await;

    let update = json!({ "goal": "strength" });
    app.put_auth("/api/v1/profile", &update.to_string(), &token).await;

    let update = json!({ "goal": "" });
    let (status, response) = app.put_auth("/api/v1/profile", &update.to_string(), &token).await;

    assert_eq!(status, StatusCode::OK);
    let profile: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(profile["goal"], "");
}
