use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn scratch_site_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("storefront-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("assets")).unwrap();
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    root
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
    let root = scratch_site_root("healthz");
    assert_eq!(status_of(static_routes(&root), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn assets_are_served_from_site_root() {
    let root = scratch_site_root("assets");
    std::fs::write(root.join("assets").join("logo.svg"), "<svg/>").unwrap();
    std::fs::write(root.join("pkg").join("storefront.css"), "body{}").unwrap();

    assert_eq!(status_of(static_routes(&root), "/assets/logo.svg").await, StatusCode::OK);
    assert_eq!(status_of(static_routes(&root), "/pkg/storefront.css").await, StatusCode::OK);
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let root = scratch_site_root("missing");
    assert_eq!(status_of(static_routes(&root), "/pkg/storefront.wasm").await, StatusCode::NOT_FOUND);
    assert_eq!(status_of(static_routes(&root), "/assets/nope.jpg").await, StatusCode::NOT_FOUND);
}
