// src/api.rs
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::hot::types::HotResponse;
use crate::service::HotService;

#[derive(Clone)]
pub struct AppState {
    pub hots: Arc<HotService>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/sources", get(list_sources))
        .route("/api/hot/zhihu/v1", get(zhihu_v1))
        .route("/api/hot/zhihu/v2", get(zhihu_v2))
        .route("/api/hot/{source}", get(hot_listing))
        .layer(middleware::from_fn(log_requests))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct HotQuery {
    /// Sub-list selector, e.g. `?t=s` for the single-day box office.
    t: Option<String>,
}

async fn hot_listing(
    State(state): State<AppState>,
    Path(source): Path<String>,
    Query(q): Query<HotQuery>,
) -> Response {
    respond(&state, &source, q.t.as_deref()).await
}

async fn zhihu_v1(State(state): State<AppState>) -> Response {
    respond(&state, "zhihu-html", None).await
}

async fn zhihu_v2(State(state): State<AppState>) -> Response {
    respond(&state, "zhihu", None).await
}

async fn list_sources(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(state.hots.sources())
}

// Known sources always answer 200; the envelope carries success or failure.
async fn respond(state: &AppState, source: &str, variant: Option<&str>) -> Response {
    match state.hots.listing(source, variant).await {
        Ok(resp) => Json(resp.as_ref()).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, Json(HotResponse::failed(&e))).into_response(),
    }
}

async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let t0 = Instant::now();

    let resp = next.run(req).await;

    tracing::info!(
        target: "http",
        %method,
        path = %path,
        status = resp.status().as_u16(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "request"
    );
    resp
}
