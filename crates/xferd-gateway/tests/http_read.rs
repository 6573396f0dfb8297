//! End-to-end HTTP behavior, driving the router in-process.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use xferd_core::PolicyConfig;
use xferd_gateway::{app_state::AppState, router::build_router};

struct Home {
    _tmp: TempDir,
    base: PathBuf,
}

impl Home {
    fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let base = fs::canonicalize(tmp.path()).unwrap();
        fs::create_dir_all(base.join("Downloads")).unwrap();
        fs::create_dir_all(base.join("Desktop")).unwrap();
        Self { _tmp: tmp, base }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.base.join(rel)
    }

    fn write(&self, rel: &str, data: &[u8]) -> PathBuf {
        let p = self.path(rel);
        fs::write(&p, data).unwrap();
        p
    }

    fn app(&self, secret: Option<&str>, max_bytes: Option<u64>) -> Router {
        let policy = PolicyConfig::new(
            secret.map(str::to_string),
            &[self.path("Downloads")],
            &[".png"],
            max_bytes,
        );
        build_router(AppState::new(policy))
    }
}

fn read_req(path: &Path, auth: Option<&str>) -> Request<Body> {
    let body = json!({ "path": path.to_string_lossy() }).to_string();
    raw_req(Method::POST, "/v1/read", auth, body)
}

fn raw_req(method: Method, uri: &str, auth: Option<&str>, body: String) -> Request<Body> {
    let mut b = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(a) = auth {
        b = b.header(header::AUTHORIZATION, a);
    }
    b.body(Body::from(body)).unwrap()
}

async fn call(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(ct.starts_with("application/json"), "content-type={ct}");
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn downloads_scenario() {
    let home = Home::new();
    let png: Vec<u8> = (0..500u32).map(|i| (i % 251) as u8).collect();
    home.write("Downloads/pic.png", &png);
    home.write("Desktop/pic.png", &png);
    home.write("Downloads/pic.bmp", &png);
    let app = home.app(None, Some(1024));

    let dotted = home.path("Downloads/../Downloads/pic.png");
    let (status, v) = call(app.clone(), read_req(&dotted, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["filename"], "pic.png");
    assert_eq!(v["mime"], "image/png");
    assert_eq!(v["bytes"], 500);
    let decoded = STANDARD.decode(v["data_base64"].as_str().unwrap()).unwrap();
    assert_eq!(decoded, png);

    let (status, v) = call(app.clone(), read_req(&home.path("Desktop/pic.png"), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(v, json!({"error": "path_denied"}));

    let (status, v) = call(app, read_req(&home.path("Downloads/pic.bmp"), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(v, json!({"error": "extension_denied", "ext": ".bmp"}));
}

#[tokio::test]
async fn auth_runs_before_any_path_check() {
    let home = Home::new();
    home.write("Downloads/pic.png", b"png");
    let app = home.app(Some("s3cret"), None);
    let missing = home.path("Downloads/missing.png");

    for auth in [None, Some(""), Some("Bearer nope"), Some("s3cret")] {
        let (status, v) = call(app.clone(), read_req(&missing, auth)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "auth={auth:?}");
        assert_eq!(v, json!({"error": "unauthorized"}));
    }

    let (status, v) = call(app.clone(), raw_req(Method::POST, "/v1/read", None, "{".into())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(v["error"], "unauthorized");

    let (status, v) = call(
        app,
        read_req(&home.path("Downloads/pic.png"), Some("Bearer s3cret")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["bytes"], 3);
}

#[tokio::test]
async fn body_errors() {
    let home = Home::new();
    let app = home.app(None, None);

    let (status, v) = call(app.clone(), raw_req(Method::POST, "/v1/read", None, "nope".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v, json!({"error": "invalid_json"}));

    let (status, v) = call(app.clone(), raw_req(Method::POST, "/v1/read", None, String::new())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v, json!({"error": "missing_path"}));

    let (status, v) = call(app, raw_req(Method::POST, "/v1/read", None, r#"{"path":" "}"#.into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v, json!({"error": "missing_path"}));
}

#[tokio::test]
async fn filesystem_rejections() {
    let home = Home::new();
    home.write("Downloads/big.png", &[7u8; 33]);
    fs::create_dir_all(home.path("Downloads/folder.png")).unwrap();
    let app = home.app(None, Some(32));

    let (status, v) = call(app.clone(), read_req(&home.path("Downloads/none.png"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v, json!({"error": "not_found"}));

    let (status, v) = call(app.clone(), read_req(&home.path("Downloads/folder.png"), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v, json!({"error": "not_a_file"}));

    let (status, v) = call(app, read_req(&home.path("Downloads/big.png"), None)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(v, json!({"error": "too_large", "bytes": 33, "max_bytes": 32}));
}

#[tokio::test]
async fn health_reports_policy_without_auth() {
    let home = Home::new();
    let app = home.app(Some("s3cret"), None);

    let (status, v) = call(app, raw_req(Method::GET, "/health", None, String::new())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["ok"], true);
    assert_eq!(
        v["allow_roots"],
        json!([home.path("Downloads").to_string_lossy()])
    );
    assert_eq!(v["allow_exts"], json!([".png"]));
    assert!(v["max_bytes"].is_null());
    assert!(v.get("token").is_none());
}

#[tokio::test]
async fn unknown_routes_and_methods_are_not_found() {
    let home = Home::new();
    let app = home.app(None, Some(1024));

    for (method, uri) in [
        (Method::GET, "/v1/read"),
        (Method::POST, "/health"),
        (Method::GET, "/"),
        (Method::POST, "/v1/write"),
        (Method::DELETE, "/v1/read"),
    ] {
        let (status, v) = call(app.clone(), raw_req(method.clone(), uri, None, String::new())).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(v, json!({"error": "not_found"}));
    }
}

#[tokio::test]
async fn head_on_health_is_not_found() {
    let home = Home::new();
    let app = home.app(None, None);

    let req = raw_req(Method::HEAD, "/health", None, String::new());
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
