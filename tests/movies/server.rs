//! Server lifecycle tests.

use crate::support::{add_movie, start_server};

#[tokio::test]
async fn binds_an_ephemeral_port() {
    let (server, _store, _base) = start_server().await;
    assert_ne!(server.local_addr().port(), 0);
    server.stop().await.unwrap();
}

#[tokio::test]
async fn stop_closes_the_listener() {
    let (server, store, base) = start_server().await;
    let client = reqwest::Client::new();

    add_movie(&client, &base, "Heat", 1995).await;
    server.stop().await.unwrap();

    let fresh = reqwest::Client::new();
    let result = fresh.get(format!("{base}/movies")).send().await;
    assert!(result.is_err());

    // The store outlives the server.
    assert_eq!(store.len().unwrap(), 1);
}
