// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod cache;
pub mod config;
pub mod hot;
pub mod metrics;
pub mod service;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::cache::{CacheKeyMode, HotCache};
pub use crate::config::AppConfig;
pub use crate::hot::error::HotError;
pub use crate::hot::types::{HotItem, HotProvider, HotResponse};
pub use crate::service::HotService;
