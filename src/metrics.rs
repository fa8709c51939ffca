use anyhow::Context;
use axum::{routing::get, Router};
use metrics::gauge;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const METRICS_PATH: &str = "/metrics";

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder and publish the configured cache TTL.
    pub fn init(ttl_secs: u64) -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("prometheus: install recorder")?;

        gauge!("hot_cache_ttl_seconds").set(ttl_secs as f64);

        Ok(Self { handle })
    }

    /// Scrape endpoint; merged into the API router at startup.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(METRICS_PATH, get(move || std::future::ready(handle.render())))
    }
}
