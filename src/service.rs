// src/service.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Context;
use metrics::counter;

use crate::cache::{cache_key, CacheKeyMode, HotCache};
use crate::config::AppConfig;
use crate::hot::error::HotError;
use crate::hot::providers;
use crate::hot::transport::{HttpTransport, Transport};
use crate::hot::types::{HotProvider, HotResponse};
use crate::hot::{ensure_metrics_described, run_provider};

/// Dispatch facade: source id → cached-or-fresh envelope.
#[derive(Clone)]
pub struct HotService {
    cache: Arc<HotCache>,
    transport: Arc<dyn Transport>,
    key_mode: CacheKeyMode,
    providers: BTreeMap<&'static str, &'static dyn HotProvider>,
}

impl HotService {
    /// Service over the built-in provider registry.
    pub fn new(cache: Arc<HotCache>, transport: Arc<dyn Transport>, key_mode: CacheKeyMode) -> Self {
        Self::with_providers(cache, transport, key_mode, providers::ALL)
    }

    pub fn with_providers(
        cache: Arc<HotCache>,
        transport: Arc<dyn Transport>,
        key_mode: CacheKeyMode,
        list: &[&'static dyn HotProvider],
    ) -> Self {
        ensure_metrics_described();
        let providers = list.iter().map(|p| (p.id(), *p)).collect();
        Self {
            cache,
            transport,
            key_mode,
            providers,
        }
    }

    /// Build the production service (reqwest transport, configured TTL).
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(cfg.http_timeout(), cfg.connect_timeout())
            .context("building upstream http client")?;
        let cache = Arc::new(HotCache::new(cfg.cache_ttl()));
        Ok(Self::new(cache, Arc::new(transport), cfg.cache.key_mode))
    }

    pub fn cache(&self) -> &Arc<HotCache> {
        &self.cache
    }

    pub fn key_mode(&self) -> CacheKeyMode {
        self.key_mode
    }

    /// Known source ids, sorted.
    pub fn sources(&self) -> Vec<&'static str> {
        self.providers.keys().copied().collect()
    }

    /// Cache lookup, else fetch + normalize + store. Failure envelopes are
    /// stored too, with the same TTL. The only error is an unknown source.
    pub async fn listing(
        &self,
        source_id: &str,
        variant: Option<&str>,
    ) -> Result<Arc<HotResponse>, HotError> {
        let provider = *self
            .providers
            .get(source_id)
            .ok_or_else(|| HotError::UnknownSource(source_id.to_string()))?;

        let key = cache_key(
            &provider.cache_flag(variant),
            self.key_mode,
            chrono::Local::now(),
        );

        if let Some(hit) = self.cache.get(&key) {
            counter!("hot_cache_hits_total", "source" => provider.id()).increment(1);
            tracing::info!(target: "hot", key = %key, "cache hit");
            return Ok(hit);
        }
        counter!("hot_cache_misses_total", "source" => provider.id()).increment(1);

        let resp = Arc::new(run_provider(self.transport.as_ref(), provider, variant).await);
        self.cache.insert(key.clone(), Arc::clone(&resp));
        tracing::info!(target: "hot", key = %key, code = resp.code, items = resp.data.len(), "cache set");
        Ok(resp)
    }
}
