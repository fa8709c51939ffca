// src/hot/mod.rs
pub mod decode;
pub mod error;
pub mod normalize;
pub mod providers;
pub mod transport;
pub mod types;

use std::time::Instant;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, histogram};
use once_cell::sync::OnceCell;

use crate::hot::transport::Transport;
use crate::hot::types::{HotProvider, HotResponse};

/// One-time metrics registration (so series show up on /metrics).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("hot_items_total", "Items normalized from upstream sources.");
        describe_counter!(
            "hot_provider_errors_total",
            "Provider fetch/decode/parse failures."
        );
        describe_counter!("hot_cache_hits_total", "Listings served from cache.");
        describe_counter!(
            "hot_cache_misses_total",
            "Listings that required an upstream fetch."
        );
        describe_histogram!(
            "hot_fetch_ms",
            "Upstream fetch + normalize time in milliseconds."
        );
        describe_gauge!("hot_cache_entries", "Entries currently held by the cache.");
        describe_gauge!("hot_cache_ttl_seconds", "Configured cache entry TTL.");
    });
}

/// Fetch → decode → normalize for one provider.
///
/// Never fails: transport, decode and shape errors all collapse into a
/// `code = 1` envelope with an empty list. Nothing is retried.
pub async fn run_provider(
    transport: &dyn Transport,
    provider: &dyn HotProvider,
    variant: Option<&str>,
) -> HotResponse {
    ensure_metrics_described();
    let t0 = Instant::now();

    let req = provider.request(variant);
    let outcome = match transport.execute(&req).await {
        Ok(body) => provider.parse(&body),
        Err(e) => Err(e),
    };

    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    histogram!("hot_fetch_ms", "source" => provider.id()).record(ms);

    match outcome {
        Ok(items) => {
            counter!("hot_items_total", "source" => provider.id()).increment(items.len() as u64);
            HotResponse::ok(items)
        }
        Err(e) => {
            tracing::warn!(
                target: "hot",
                source = provider.id(),
                url = %req.url,
                error = %e,
                "provider failed"
            );
            counter!("hot_provider_errors_total", "source" => provider.id()).increment(1);
            HotResponse::failed(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hot::error::HotError;
    use crate::hot::types::{HotItem, RequestSpec};
    use async_trait::async_trait;

    struct Canned(Result<String, HotError>);

    #[async_trait]
    impl Transport for Canned {
        async fn execute(&self, _req: &RequestSpec) -> Result<String, HotError> {
            self.0.clone()
        }
    }

    struct Echo;

    impl HotProvider for Echo {
        fn id(&self) -> &'static str {
            "echo"
        }
        fn request(&self, _variant: Option<&str>) -> RequestSpec {
            RequestSpec::get("http://upstream.test/echo")
        }
        fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
            let titles: Vec<String> = decode::json(body)?;
            Ok(titles
                .into_iter()
                .enumerate()
                .map(|(i, title)| HotItem {
                    title,
                    pos: i as i64 + 1,
                    ..Default::default()
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn success_wraps_items() {
        let t = Canned(Ok(r#"["a","b"]"#.to_string()));
        let resp = run_provider(&t, &Echo, None).await;
        assert_eq!(resp.code, 0);
        assert_eq!(resp.succ, "ok");
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[1].pos, 2);
    }

    #[tokio::test]
    async fn empty_upstream_is_still_ok() {
        let t = Canned(Ok("[]".to_string()));
        let resp = run_provider(&t, &Echo, None).await;
        assert!(resp.is_ok());
        assert!(resp.data.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_becomes_envelope() {
        let t = Canned(Err(HotError::Transport("refused".into())));
        let resp = run_provider(&t, &Echo, None).await;
        assert_eq!(resp.code, 1);
        assert_eq!(resp.err, "failed to fetch");
        assert!(resp.data.is_empty());
    }

    #[tokio::test]
    async fn non_json_body_becomes_decode_failure() {
        let t = Canned(Ok("<html>nope</html>".to_string()));
        let resp = run_provider(&t, &Echo, None).await;
        assert_eq!(resp.code, 1);
        assert_eq!(resp.err, "failed to decode");
        assert!(resp.data.is_empty());
    }
}
