use axum::http::StatusCode;
use serde_json::json;

mod helpers;

use helpers::{FakeFoodDatabase, setup_test_app};

#[tokio::test]
async fn test_health_and_ready() -> anyhow::Result<()> {
    let app = setup_test_app(FakeFoodDatabase::default()).await?;

    let health = app.request("GET", "/health", None, None).await?;
    assert_eq!(health.status, StatusCode::OK);

    let ready = app.request("GET", "/ready", None, None).await?;
    assert_eq!(ready.status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_protected_routes_require_cookie() -> anyhow::Result<()> {
    let app = setup_test_app(FakeFoodDatabase::default()).await?;

    for (method, uri) in [
        ("GET", "/accounts/profile"),
        ("GET", "/accounts/health-summary"),
        ("GET", "/accounts/diet-plan"),
        ("GET", "/accounts/history"),
    ] {
        let response = app.request(method, uri, None, None).await?;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["error"], "Authentication required");
    }

    let forged = app
        .request("GET", "/accounts/profile", Some("auth_token=garbage"), None)
        .await?;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_signup_sets_session() -> anyhow::Result<()> {
    let app = setup_test_app(FakeFoodDatabase::default()).await?;
    let cookie = app.signup("priya").await?;

    assert!(cookie.starts_with("auth_token="));

    let profile = app
        .request("GET", "/accounts/profile", Some(&cookie), None)
        .await?;

    assert_eq!(profile.status, StatusCode::OK);
    assert_eq!(profile.body["username"], "priya");
    assert_eq!(profile.body["email"], "priya@healthscan.localhost");

    Ok(())
}

#[tokio::test]
async fn test_signup_duplicate_username() -> anyhow::Result<()> {
    let app = setup_test_app(FakeFoodDatabase::default()).await?;
    app.signup("priya").await?;

    let response = app
        .request(
            "POST",
            "/accounts/signup",
            None,
            Some(json!({
                "username": "priya",
                "email": "other@healthscan.localhost",
                "password": "my_password",
            })),
        )
        .await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "Username already exists");
    assert!(response.cookie.is_none());

    Ok(())
}

#[tokio::test]
async fn test_login() -> anyhow::Result<()> {
    let app = setup_test_app(FakeFoodDatabase::default()).await?;
    app.signup("rahul").await?;

    let wrong = app
        .request(
            "POST",
            "/accounts/login",
            None,
            Some(json!({"username": "rahul", "password": "not_my_password"})),
        )
        .await?;

    assert_eq!(wrong.body["success"], false);
    assert_eq!(wrong.body["error"], "Invalid username or password");
    assert!(wrong.cookie.is_none());

    let response = app
        .request(
            "POST",
            "/accounts/login",
            None,
            Some(json!({"username": "rahul", "password": "my_password"})),
        )
        .await?;

    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["username"], "rahul");

    let cookie = response
        .cookie
        .ok_or_else(|| anyhow::anyhow!("login did not set a cookie"))?;
    let profile = app
        .request("GET", "/accounts/profile", Some(&cookie), None)
        .await?;
    assert_eq!(profile.body["username"], "rahul");

    Ok(())
}

#[tokio::test]
async fn test_logout_clears_cookie() -> anyhow::Result<()> {
    let app = setup_test_app(FakeFoodDatabase::default()).await?;
    let cookie = app.signup("anita").await?;

    let response = app
        .request("POST", "/accounts/logout", Some(&cookie), None)
        .await?;

    assert_eq!(response.body["success"], true);
    assert_eq!(response.cookie.as_deref(), Some("auth_token="));

    Ok(())
}

#[tokio::test]
async fn test_health_profile_summary() -> anyhow::Result<()> {
    let app = setup_test_app(FakeFoodDatabase::default()).await?;
    let cookie = app.signup("meera").await?;

    let empty = app
        .request("GET", "/accounts/health-summary", Some(&cookie), None)
        .await?;
    assert_eq!(empty.body, json!({"exists": false}));

    let saved = app
        .request(
            "POST",
            "/accounts/health-profile",
            Some(&cookie),
            Some(json!({"condition": "Type 2 Diabetes", "allergies": "", "diet": "veg"})),
        )
        .await?;
    assert_eq!(saved.body["success"], true);

    let summary = app
        .request("GET", "/accounts/health-summary", Some(&cookie), None)
        .await?;
    assert_eq!(
        summary.body,
        json!({
            "exists": true,
            "condition": "Type 2 Diabetes",
            "allergies": "None",
            "diet": "veg",
        })
    );

    app.request(
        "POST",
        "/accounts/health-profile",
        Some(&cookie),
        Some(json!({"condition": "bp", "allergies": "nuts", "diet": ""})),
    )
    .await?;

    let updated = app
        .request("GET", "/accounts/health-summary", Some(&cookie), None)
        .await?;
    assert_eq!(updated.body["condition"], "bp");
    assert_eq!(updated.body["allergies"], "nuts");
    assert_eq!(updated.body["diet"], "Not set");

    Ok(())
}
