//! HTTP server setup and route handlers.
//!
//! # Responsibilities
//! - Create the Axum router with the fixture's routes
//! - Wire up middleware (request ID, timeout, tracing)
//! - Bind the server to a listener and serve until shutdown
//!
//! The fixture exposes one logical operation — snapshot the request's
//! headers — on two surfaces: a JSON page-data endpoint and a
//! server-rendered HTML page.

use axum::{
    http::{HeaderMap, Method, Uri},
    response::Html,
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::EchoConfig;
use crate::http::render::render_page;
use crate::http::request::{EchoMakeRequestId, X_REQUEST_ID};
use crate::snapshot::snapshot;

/// Page data payload handed to the rendering layer and served as JSON.
#[derive(Serialize)]
pub struct PageData {
    pub headers: serde_json::Value,
}

/// HTTP server for the header echo fixture.
pub struct HttpServer {
    router: Router,
    config: EchoConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &EchoConfig) -> Router {
        Router::new()
            .route("/", any(render_headers))
            .route("/headers", any(load_headers))
            .route("/status", get(status))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(EchoMakeRequestId))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &EchoConfig {
        &self.config
    }
}

/// SSR surface: render the snapshot into an HTML page.
async fn render_headers(method: Method, uri: Uri, headers: HeaderMap) -> Html<String> {
    log_request(&method, &uri, &headers);

    let snap = snapshot(&headers);
    let data = snap.clone().into_plain_data();
    Html(render_page(&snap, &data))
}

/// Page-data surface: the snapshot as JSON.
async fn load_headers(method: Method, uri: Uri, headers: HeaderMap) -> Json<PageData> {
    log_request(&method, &uri, &headers);

    Json(PageData {
        headers: snapshot(&headers).into_plain_data(),
    })
}

/// Liveness probe for harnesses waiting on the fixture.
async fn status() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

fn log_request(method: &Method, uri: &Uri, headers: &HeaderMap) {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %uri.path(),
        header_count = headers.len(),
        "Snapshotting request headers"
    );
}
