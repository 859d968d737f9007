use avalon_server::config::ServerConfig;
use avalon_server::{app, CACHE_CONTROL_VALUE};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::path::PathBuf;
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><html><body>avalon</body></html>";

struct SiteDir(PathBuf);

impl SiteDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("avalon-dist-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        std::fs::write(dir.join("styles.css"), "body { margin: 0; }").unwrap();
        Self(dir)
    }

    fn config(&self) -> ServerConfig {
        let dist = self.0.display().to_string();
        ServerConfig::from_lookup(|key| (key == "SITE_DIST_DIR").then(|| dist.clone())).unwrap()
    }
}

impl Drop for SiteDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

async fn get(site: &SiteDir, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app(&site.config())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|value| value.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, cache, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn health_check_answers_ok() {
    let site = SiteDir::new();
    let (status, _, body) = get(&site, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn serves_index_at_root() {
    let site = SiteDir::new();
    let (status, cache, body) = get(&site, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
    assert_eq!(cache.as_deref(), Some(CACHE_CONTROL_VALUE));
}

#[tokio::test]
async fn serves_bundle_assets() {
    let site = SiteDir::new();
    let (status, _, body) = get(&site, "/styles.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("margin"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_index() {
    let site = SiteDir::new();
    let (status, _, body) = get(&site, "/consulting").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[test]
fn validation_accepts_a_built_bundle() {
    let site = SiteDir::new();
    assert!(site.config().validate().is_ok());
}
