use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use coinlist_data::infra::external::cgecko::CoinGeckoProvider;
use coinlist_data::infra::provider::{CoinProvider, ProviderError};
use warp::Filter;

fn markets_body() -> serde_json::Value {
    serde_json::json!([{
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "image": "https://assets.example/bitcoin.png",
        "current_price": 60000.0,
        "market_cap": 1.2e12,
        "price_change_percentage_24h": 2.5,
        "total_volume": 3.0e10,
        "market_cap_rank": 1,
        "last_updated": "2024-09-10T00:00:00.000Z"
    }])
}

/// Stub of `/api/v3/coins/markets` counting how often it is hit.
fn spawn_upstream(hits: Arc<AtomicUsize>) -> String {
    let route = warp::path!("api" / "v3" / "coins" / "markets").map(move || {
        hits.fetch_add(1, Ordering::SeqCst);
        warp::reply::json(&markets_body())
    });
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    format!("http://{addr}")
}

#[tokio::test]
async fn fetch_within_the_window_is_served_from_cache() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base_url = spawn_upstream(hits.clone());

    let provider = CoinGeckoProvider::new(base_url, "usd", 250, 1, Duration::from_secs(60));
    let first = provider.coins().await.unwrap();
    let second = provider.coins().await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].id, "bitcoin");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn expired_window_refetches() {
    let hits = Arc::new(AtomicUsize::new(0));
    let base_url = spawn_upstream(hits.clone());

    let provider = CoinGeckoProvider::new(base_url, "usd", 250, 1, Duration::ZERO);
    provider.coins().await.unwrap();
    provider.coins().await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn upstream_error_status_is_surfaced() {
    let route = warp::path!("api" / "v3" / "coins" / "markets").map(|| {
        warp::reply::with_status("rate limited", warp::http::StatusCode::TOO_MANY_REQUESTS)
    });
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let provider = CoinGeckoProvider::new(
        format!("http://{addr}"),
        "usd",
        250,
        1,
        Duration::from_secs(60),
    );
    let err = provider.coins().await.unwrap_err();
    assert!(matches!(err, ProviderError::UpstreamStatus(status) if status == 429));
}

#[tokio::test]
async fn unreachable_upstream_is_an_upstream_error() {
    // nothing listens on this port
    let provider = CoinGeckoProvider::new(
        "http://127.0.0.1:1",
        "usd",
        250,
        1,
        Duration::from_secs(60),
    );
    let err = provider.coins().await.unwrap_err();
    assert!(matches!(err, ProviderError::Upstream(_)));
}
