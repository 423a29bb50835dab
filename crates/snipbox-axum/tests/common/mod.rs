//! Shared helpers for snipbox-axum integration tests.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use snipbox_axum::{AxumContext, ServerConfig, create_router};
use snipbox_core::{Profile, UserId};
use snipbox_db::TestDb;

/// Collection path under the default configuration.
pub const API: &str = "/snippets-api";

/// Router over a fresh in-memory database.
pub struct TestApp {
    pub router: Router,
    pub db: TestDb,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(&ServerConfig::with_defaults()).await
    }

    pub async fn with_config(config: &ServerConfig) -> Self {
        let db = TestDb::new().await.expect("test database");
        let router = create_router(AxumContext::new(db.repos()), config);
        Self { router, db }
    }

    /// Create a user with a profile and a non-expiring token.
    pub async fn user(&self, username: &str) -> (UserId, String) {
        let identity = self.db.identity();
        let user = identity.create_user().await.unwrap();
        identity
            .save_profile(&Profile {
                id: user.clone(),
                username: Some(username.to_string()),
                avatar_url: Some(format!("https://avatars.example/{username}.png")),
            })
            .await
            .unwrap();
        let token = identity.issue_token(&user, None).await.unwrap();
        (user, token)
    }

    /// Send a request and return the raw response.
    pub async fn raw(&self, request: Request<Body>) -> axum::response::Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty).
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.raw(request).await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    /// Create a snippet through the API and return its id.
    pub async fn create(&self, token: &str, body: Value) -> String {
        let (status, json) = self
            .send(request(Method::POST, API, Some(token), Some(&body)))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
        json["data"]["id"].as_str().unwrap().to_string()
    }
}

/// Build a request with an optional bearer token and JSON body.
pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// GET without credentials.
pub fn get(uri: &str) -> Request<Body> {
    request(Method::GET, uri, None, None)
}
