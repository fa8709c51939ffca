// tests/metrics.rs
//
// The Prometheus recorder is process-global, so this binary holds a single test.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use hots_aggregator::hot::transport::Transport;
use hots_aggregator::hot::types::RequestSpec;
use hots_aggregator::metrics::Metrics;
use hots_aggregator::{create_router, AppState, CacheKeyMode, HotCache, HotError, HotService};

struct Bilibili;

#[async_trait]
impl Transport for Bilibili {
    async fn execute(&self, _req: &RequestSpec) -> Result<String, HotError> {
        std::fs::read_to_string("tests/fixtures/bilibili.json")
            .map_err(|e| HotError::Transport(e.to_string()))
    }
}

async fn body_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    // axum::body::to_bytes requires an explicit limit
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn metrics_endpoint_reports_cache_and_fetch_series() {
    let metrics = Metrics::init(120).expect("recorder installs once");
    let hots = HotService::new(
        Arc::new(HotCache::new(Duration::from_secs(120))),
        Arc::new(Bilibili),
        CacheKeyMode::Source,
    );
    let app = create_router(AppState {
        hots: Arc::new(hots),
    })
    .merge(metrics.router());

    // MISS then HIT
    for _ in 0..2 {
        let (status, _) = body_text(&app, "/api/hot/bili").await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, text) = body_text(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    for needle in [
        "hot_cache_hits_total",
        "hot_cache_misses_total",
        "hot_items_total",
        "hot_fetch_ms",
        "hot_cache_ttl_seconds",
    ] {
        assert!(text.contains(needle), "missing series {needle}\n{text}");
    }
    assert!(text.contains(r#"source="bili""#));
}
