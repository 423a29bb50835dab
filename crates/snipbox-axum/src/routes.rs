//! Route definitions and router construction.
//!
//! The collection lives at `ServerConfig::api_path()` and single snippets
//! at `{api_path}/{id}`. Layers, innermost first: panic recovery, request
//! tracing, CORS.

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, Request};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::bootstrap::{AxumContext, CorsConfig, ServerConfig};
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Headers a browser client may send on API requests.
fn allowed_headers() -> [HeaderName; 4] {
    [
        AUTHORIZATION,
        HeaderName::from_static("x-client-info"),
        HeaderName::from_static("apikey"),
        CONTENT_TYPE,
    ]
}

/// Build CORS layer from configuration.
pub(crate) fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(allowed_headers());

    match config {
        CorsConfig::AllowAll => layer.allow_origin(AnyOrigin),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            layer.allow_origin(allowed)
        }
    }
}

fn collection_routes() -> MethodRouter<AppState> {
    get(handlers::snippets::list)
        .post(handlers::snippets::create)
        .fallback(method_not_allowed)
}

fn item_routes() -> MethodRouter<AppState> {
    get(handlers::snippets::get)
        .put(handlers::snippets::update)
        .delete(handlers::snippets::delete)
        .fallback(method_not_allowed)
}

/// Snippet routes under `api_path`, without state applied.
pub(crate) fn api_routes(api_path: &str) -> Router<AppState> {
    Router::new()
        .route(api_path, collection_routes())
        .route(&format!("{api_path}/"), collection_routes())
        .route(&format!("{api_path}/{{id}}"), item_routes())
}

/// Create the main router.
pub fn create_router(ctx: AxumContext, config: &ServerConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes(&config.api_path()).with_state(state))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http().on_request(|request: &Request<Body>, _span: &Span| {
                tracing::debug!("{} {}", request.method(), request.uri().path());
            }),
        )
        .layer(build_cors_layer(&config.cors))
}

pub(crate) async fn health_check() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> HttpError {
    HttpError::MethodNotAllowed
}

async fn not_found() -> HttpError {
    HttpError::NotFound("Not found".to_string())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = %detail, "Request handler panicked");

    HttpError::Internal("Internal server error".to_string()).into_response()
}
