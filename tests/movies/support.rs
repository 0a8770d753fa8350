//! Shared helpers: start a server on a free port and talk to it.

use std::sync::Arc;

use moviehub::http::MoviesServer;
use moviehub::MoviesStore;
use serde_json::{json, Value};

/// Start a server on port 0 with a fresh store. Returns the handle, the
/// store and the base URL.
pub async fn start_server() -> (MoviesServer, Arc<MoviesStore>, String) {
    let store = Arc::new(MoviesStore::new());
    let server = MoviesServer::start(store.clone(), "127.0.0.1:0")
        .await
        .unwrap();
    let base = format!("http://{}", server.local_addr());
    (server, store, base)
}

/// POST a movie and return the created JSON, asserting a 201.
pub async fn add_movie(client: &reqwest::Client, base: &str, title: &str, year: i32) -> Value {
    let resp = client
        .post(format!("{base}/movies"))
        .json(&json!({ "title": title, "year": year }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

/// POST a raw body with the JSON content type.
pub async fn post_raw(client: &reqwest::Client, base: &str, body: &str) -> reqwest::Response {
    client
        .post(format!("{base}/movies"))
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}
