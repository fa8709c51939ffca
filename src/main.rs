//! Hots aggregator: binary entrypoint.
//! Loads config, wires the service, and serves the HTTP API.

use std::sync::Arc;

use anyhow::Context;
use hots_aggregator::{
    api::{create_router, AppState},
    cache::spawn_sweeper,
    config::{AppConfig, LogConfig},
    metrics::Metrics,
    service::HotService,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact (or JSON) logs to stdout, plus an optional file sink.
/// The returned guard must live as long as the process so the file writer flushes.
fn init_tracing(log: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match &log.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| ".".into());
            let name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "hots.log".into());
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let (json, compact) = if log.json {
        (Some(fmt::layer().json()), None)
    } else {
        (None, Some(fmt::layer().compact()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(compact)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    let cfg = AppConfig::load_default().context("loading configuration")?;
    let _log_guard = init_tracing(&cfg.log);

    let metrics = Metrics::init(cfg.cache.ttl_secs)?;
    let hots = Arc::new(HotService::from_config(&cfg)?);
    let _sweeper = spawn_sweeper(Arc::clone(hots.cache()), cfg.sweep_interval());

    let app = create_router(AppState {
        hots: Arc::clone(&hots),
    })
    .merge(metrics.router());

    let addr = cfg.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(
        %addr,
        sources = hots.sources().len(),
        ttl_secs = cfg.cache.ttl_secs,
        key_mode = ?cfg.cache.key_mode,
        "hots aggregator listening"
    );

    axum::serve(listener, app).await.context("http server")?;
    Ok(())
}
