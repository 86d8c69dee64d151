use std::sync::Once;

use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,portal_smoke=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// In-process stand-in for a Document Portal deployment.
///
/// Serves the portal's well-known paths on an ephemeral port so probes can
/// run against a real HTTP surface without any external service.
pub struct MockPortal {
    pub base_url: String,
}

impl MockPortal {
    /// Spawn a portal that satisfies every probe.
    pub async fn spawn() -> Self {
        Self::spawn_with(
            json!({"status": "ok", "service": "document-portal"}),
            json!({"openapi": "3.0.0", "info": {"title": "Document Portal", "version": "1.0.0"}}),
        )
        .await
    }

    /// Spawn a portal with custom `/health` and `/openapi.json` bodies.
    pub async fn spawn_with(health: Value, openapi: Value) -> Self {
        let page = || async { Html("<html><body>Document Portal</body></html>") };
        let router = Router::new()
            .route("/health", get(move || async move { Json(health) }))
            .route("/", get(page))
            .route("/docs", get(page))
            .route("/redoc", get(page))
            .route("/openapi.json", get(move || async move { Json(openapi) }));
        Self::serve(router).await
    }

    /// Spawn an arbitrary router, for probes that need a misbehaving portal.
    pub async fn serve(router: Router) -> Self {
        init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock portal listener");
        let port = listener.local_addr().expect("Failed to read local addr").port();

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
        }
    }
}

/// A base URL nothing listens on: bind an ephemeral port, then release it.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to read local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
