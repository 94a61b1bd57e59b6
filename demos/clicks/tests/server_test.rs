#![allow(missing_docs)]
#![cfg(not(target_arch = "wasm32"))]

use clicks::server::respond;
use http::{Method, StatusCode};
use http_body_util::BodyExt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Scratch static directory, removed when the test ends.
struct StaticDir(PathBuf);

impl Deref for StaticDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl Drop for StaticDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn static_dir(name: &str) -> StaticDir {
    let dir = std::env::temp_dir().join(format!("clicks-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    StaticDir(dir)
}

#[test]
fn test_static_dir_is_removed_after_use() {
    let dir = static_dir("cleanup");
    std::fs::write(dir.join("client.js"), "").unwrap();
    let path = dir.to_path_buf();

    drop(dir);
    assert!(!path.exists());
}

async fn body_text(response: http::Response<http_body_util::Full<bytes::Bytes>>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_home_page() {
    let routes = clicks::routes().unwrap();
    let dir = static_dir("home");

    let response = respond(&Method::GET, "/", &routes, &dir).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/html; charset=utf-8"
    );

    let body = body_text(response).await;
    assert!(body.contains("<h1>Hello</h1><p>Clicks: 0</p><button>Click me</button>"));
}

#[tokio::test]
async fn test_unknown_page_is_404_with_shell() {
    let routes = clicks::routes().unwrap();
    let dir = static_dir("unknown");

    for path in ["/twist", "/resources", "/nope"] {
        let response = respond(&Method::GET, path, &routes, &dir).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_text(response).await;
        assert!(body.contains("<a href=\"/resources\">Resources</a>"));
        assert!(body.contains("This page could not be found."));
    }
}

#[tokio::test]
async fn test_static_file_served_with_content_type() {
    let routes = clicks::routes().unwrap();
    let dir = static_dir("static");
    std::fs::write(dir.join("client.js"), "export default function init() {}").unwrap();

    let response = respond(&Method::GET, "/pkg/client.js", &routes, &dir).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .contains("javascript")
    );
    assert_eq!(body_text(response).await, "export default function init() {}");
}

#[tokio::test]
async fn test_static_traversal_and_missing_files_rejected() {
    let routes = clicks::routes().unwrap();
    let dir = static_dir("traversal");

    for path in ["/pkg/../Cargo.toml", "/pkg/", "/pkg/missing.wasm", "/pkg//etc/passwd"] {
        let response = respond(&Method::GET, path, &routes, &dir).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_only_get_and_head_allowed() {
    let routes = clicks::routes().unwrap();
    let dir = static_dir("methods");

    let response = respond(&Method::POST, "/", &routes, &dir).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = respond(&Method::HEAD, "/", &routes, &dir).await;
    assert_eq!(response.status(), StatusCode::OK);
}
