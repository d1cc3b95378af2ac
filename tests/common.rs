#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

/// Nothing listens here; requests fail with connection refused.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

pub fn inv() -> Command {
    cargo_bin_cmd!("invscan")
}

/// `invscan` with an isolated, empty HOME so no real config is read or written.
pub fn inv_in(home: &TempDir) -> Command {
    let mut cmd = inv();
    cmd.env("HOME", home.path()).env("APPDATA", home.path());
    cmd
}

pub fn temp_home() -> TempDir {
    tempfile::tempdir().expect("create temp home")
}

/// How long the stub sits on a request before answering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Delays {
    pub health: Duration,
    pub catalog: Duration,
}

#[derive(Clone)]
struct StubState {
    healthy: bool,
    delays: Delays,
    received: Arc<Mutex<Vec<Value>>>,
    catalog_hits: Arc<AtomicUsize>,
}

/// In-process inventory backend.
///
/// `POST /api/scan` answers by barcode:
/// - `missing` → 404 `{"error": "Unknown barcode"}`
/// - `plain`   → 400 with the JSON string `"Out of stock"`
/// - `boom`    → 500 with a non-JSON body
/// - `nak`     → 200 `{"ok": false}`
/// - anything else → 200 `{"ok": true, "productId": "p-<code>", "qty": 5}`
pub struct Backend {
    pub base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
    catalog_hits: Arc<AtomicUsize>,
}

impl Backend {
    pub fn start() -> Self {
        Self::start_with(true)
    }

    pub fn start_with(healthy: bool) -> Self {
        Self::spawn(healthy, Delays::default())
    }

    /// A healthy backend that answers slowly.
    pub fn start_delayed(delays: Delays) -> Self {
        Self::spawn(true, delays)
    }

    fn spawn(healthy: bool, delays: Delays) -> Self {
        let state = StubState {
            healthy,
            delays,
            received: Arc::new(Mutex::new(Vec::new())),
            catalog_hits: Arc::new(AtomicUsize::new(0)),
        };
        let received = state.received.clone();
        let catalog_hits = state.catalog_hits.clone();

        let app = Router::new()
            .route("/api/health", get(health))
            .route("/api/products", get(products))
            .route("/api/scan", post(scan))
            .with_state(state);

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub backend");
                tx.send(listener.local_addr().expect("stub address"))
                    .expect("send stub address");
                axum::serve(listener, app).await.expect("serve stub backend");
            });
        });

        let addr = rx.recv().expect("stub backend address");
        Self {
            base_url: format!("http://{}", addr),
            received,
            catalog_hits,
        }
    }

    /// Bodies received on `POST /api/scan`, oldest first.
    pub fn adjustments(&self) -> Vec<Value> {
        self.received.lock().clone()
    }

    pub fn catalog_hits(&self) -> usize {
        self.catalog_hits.load(Ordering::SeqCst)
    }
}

async fn health(State(state): State<StubState>) -> StatusCode {
    tokio::time::sleep(state.delays.health).await;
    if state.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn products(State(state): State<StubState>) -> Json<Value> {
    state.catalog_hits.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(state.delays.catalog).await;
    Json(json!([
        { "barcode": "123", "name": "Blue Widget", "sku": "BW-1" },
        { "barcode": "456", "name": "Red Gadget" },
        { "barcode": "789" },
        { "name": "Loose item without barcode" }
    ]))
}

async fn scan(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    state.received.lock().push(body.clone());

    match body.get("barcode").and_then(Value::as_str).unwrap_or("") {
        "missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Unknown barcode" })),
        )
            .into_response(),
        "plain" => (StatusCode::BAD_REQUEST, Json(json!("Out of stock"))).into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "oops").into_response(),
        "nak" => Json(json!({ "ok": false })).into_response(),
        code => Json(json!({ "ok": true, "productId": format!("p-{}", code), "qty": 5 }))
            .into_response(),
    }
}
