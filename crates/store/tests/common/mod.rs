//! In-process fake card service for store client tests.
//!
//! Serves the same contract as the real remote: `apitarjetas.php` with
//! method-based CRUD and a `status` discriminator on mutations, plus
//! `api.php?endpoint=usuarios` for the roster. State lives in memory so
//! tests can seed rows and inspect the request count.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Shared handle to the fake service state.
#[derive(Clone, Default)]
pub struct FakeRemote {
    state: Arc<Mutex<RemoteState>>,
}

#[derive(Default)]
struct RemoteState {
    /// owner id -> card rows, in insertion order.
    cards: HashMap<i64, Vec<Value>>,
    users: Vec<Value>,
    next_id: u64,
    /// Requests seen on the card endpoint, any method.
    card_hits: usize,
}

impl FakeRemote {
    /// Insert card rows for an owner, verbatim.
    pub fn seed_cards(&self, owner: i64, rows: Vec<Value>) {
        self.state.lock().unwrap().cards.insert(owner, rows);
    }

    /// Replace the user roster.
    pub fn seed_users(&self, users: Vec<Value>) {
        self.state.lock().unwrap().users = users;
    }

    /// Number of requests the card endpoint has served.
    pub fn card_hits(&self) -> usize {
        self.state.lock().unwrap().card_hits
    }
}

fn owner_param(params: &HashMap<String, String>) -> i64 {
    params
        .get("id")
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

async fn list_cards(
    State(remote): State<FakeRemote>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut state = remote.state.lock().unwrap();
    state.card_hits += 1;
    let rows = state
        .cards
        .get(&owner_param(&params))
        .cloned()
        .unwrap_or_default();
    Json(Value::Array(rows))
}

async fn create_card(
    State(remote): State<FakeRemote>,
    Query(params): Query<HashMap<String, String>>,
    Json(mut body): Json<Value>,
) -> Json<Value> {
    let mut state = remote.state.lock().unwrap();
    state.card_hits += 1;
    let id = loop {
        state.next_id += 1;
        let candidate = format!("card{}", state.next_id);
        let taken = state
            .cards
            .values()
            .flatten()
            .any(|row| row["id"] == json!(candidate));
        if !taken {
            break candidate;
        }
    };
    body["id"] = json!(id);
    state
        .cards
        .entry(owner_param(&params))
        .or_default()
        .push(body.clone());
    Json(json!({ "status": "success", "tarjeta": body }))
}

async fn update_card(
    State(remote): State<FakeRemote>,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = remote.state.lock().unwrap();
    state.card_hits += 1;
    let owner = owner_param(&params);
    let target = body["id"].clone();
    if let Some(rows) = state.cards.get_mut(&owner) {
        if let Some(row) = rows.iter_mut().find(|row| row["id"] == target) {
            *row = body.clone();
            return Json(json!({ "status": "success", "tarjeta": body }));
        }
    }
    Json(json!({ "status": "not_found", "message": "no such card" }))
}

async fn delete_card(
    State(remote): State<FakeRemote>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut state = remote.state.lock().unwrap();
    state.card_hits += 1;
    let owner = owner_param(&params);
    let target = json!(params.get("tarjeta").cloned().unwrap_or_default());
    if let Some(rows) = state.cards.get_mut(&owner) {
        let before = rows.len();
        rows.retain(|row| row["id"] != target);
        if rows.len() != before {
            return Json(json!({ "status": "success" }));
        }
    }
    Json(json!({ "status": "not_found", "message": "no such card" }))
}

async fn list_users(State(remote): State<FakeRemote>) -> Json<Value> {
    Json(Value::Array(remote.state.lock().unwrap().users.clone()))
}

/// Bind the fake service to an ephemeral port and serve it in the
/// background. Returns the base URL and the state handle.
pub async fn spawn_fake_remote() -> (String, FakeRemote) {
    let remote = FakeRemote::default();
    let app = Router::new()
        .route(
            "/apitarjetas.php",
            get(list_cards)
                .post(create_card)
                .put(update_card)
                .delete(delete_card),
        )
        .route("/api.php", get(list_users))
        .with_state(remote.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake remote");
    });

    (format!("http://{addr}"), remote)
}

/// Serve a fixed status and body for every request on every path.
///
/// Used to exercise the transport-level error paths (non-2xx, malformed
/// payloads) without the stateful fake.
pub async fn spawn_static_remote(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().fallback(move || async move { (status, body) });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve static remote");
    });

    format!("http://{addr}")
}
