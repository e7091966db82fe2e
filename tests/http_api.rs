//! Integration tests for the HTTP API

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use readme_icons::server::{create_router, AppState};
use readme_icons::{Icon, IconCatalog, ServerConfig};

fn test_app() -> axum::Router {
    let catalog = IconCatalog::new(vec![
        Icon::new("rust", "Rust", "000000", "M0 0h24v24H0z"),
        Icon::new("go", "Go", "00ADD8", "M12 0L24 24H0z"),
        Icon::new("gitlab", "GitLab", "FC6D26", "M0 0h24L12 24z"),
    ]);
    create_router(AppState::new(catalog, &ServerConfig::default()))
}

/// Helper to make a GET request and return status, headers and body text.
async fn get(app: &axum::Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let (status, _, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_icons_returns_svg() {
    let app = test_app();
    let (status, headers, body) = get(&app, "/api/icons?i=rust,go").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/svg+xml");
    assert_eq!(
        headers[header::CACHE_CONTROL],
        "public, max-age=86400, must-revalidate"
    );
    assert!(body.starts_with("<svg"));
    assert!(body.contains(r#"width="105.6""#));
    assert!(body.find("<title>Rust</title>") < body.find("<title>Go</title>"));
}

#[tokio::test]
async fn test_icons_cache_header_follows_config() {
    let mut config = ServerConfig::default();
    config.server.cache_max_age = 60;
    let app = create_router(AppState::new(IconCatalog::builtin().clone(), &config));

    let (status, headers, _) = get(&app, "/api/icons?i=rust").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers[header::CACHE_CONTROL],
        "public, max-age=60, must-revalidate"
    );
}

#[tokio::test]
async fn test_icons_light_theme_and_parameters() {
    let app = test_app();
    let (status, _, body) = get(&app, "/api/icons?i=go&t=light&size=32&perline=3").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"width="32""#));
    assert!(body.contains(r##"<rect width="32" height="32" rx="6.4" fill="white"/>"##));
    assert!(body.contains(r##"fill="#00ADD8" transform"##));
}

#[tokio::test]
async fn test_icons_invalid_numbers_fall_back() {
    let app = test_app();
    let (_, _, fallback) = get(&app, "/api/icons?i=rust&size=abc&perline=").await;
    let (_, _, default) = get(&app, "/api/icons?i=rust").await;
    assert_eq!(fallback, default);

    let (_, _, clamped) = get(&app, "/api/icons?i=rust&size=9999").await;
    assert!(clamped.contains(r#"width="128""#));
}

#[tokio::test]
async fn test_icons_missing_parameter() {
    let app = test_app();

    let (status, _, body) = get(&app, "/api/icons").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"Missing "i" parameter"#);

    let (status, _, _) = get(&app, "/api/icons?i=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_icons_no_valid_icons() {
    let app = test_app();

    let (status, _, body) = get(&app, "/api/icons?i=nope,also-nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "No valid icons found");

    let (status, _, _) = get(&app, "/api/icons?i=%20,%20").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_icons_skips_unknown_identifiers() {
    let app = test_app();
    let (status, _, body) = get(&app, "/api/icons?i=nope,RUST").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("<g ").count(), 1);
}

#[tokio::test]
async fn test_search() {
    let app = test_app();
    let (status, _, body) = get(&app, "/api/search?q=go").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    let slugs: Vec<&str> = json["icons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|icon| icon["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["go"]);
    assert!(json["icons"][0].get("path").is_none());
}

#[tokio::test]
async fn test_search_limit() {
    let app = test_app();
    let (_, _, body) = get(&app, "/api/search?q=g").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["icons"].as_array().unwrap().len(), 2);

    let (_, _, body) = get(&app, "/api/search?q=g&limit=1").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["icons"].as_array().unwrap().len(), 1);

    let (_, _, body) = get(&app, "/api/search").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["icons"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_app();
    let (status, _, _) = get(&app, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
