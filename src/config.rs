// src/config.rs
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::CacheKeyMode;

pub const ENV_CONFIG_PATH: &str = "HOTS_CONFIG_PATH";
pub const DEFAULT_TOML_PATH: &str = "config/hots.toml";
pub const DEFAULT_JSON_PATH: &str = "config/hots.json";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TTL_SECS: u64 = 120;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 4;
/// Upper bound for every configured period (TTL, sweep, timeouts).
pub const MAX_PERIOD_SECS: u64 = 86_400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind: String,
    pub port: u16,
    pub cache: CacheConfig,
    pub http: HttpConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_secs: u64,
    pub key_mode: CacheKeyMode,
    /// Sweeper period; unset means 5 × TTL.
    pub sweep_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub json: bool,
    /// Optional log file, written through a non-blocking appender.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            cache: CacheConfig::default(),
            http: HttpConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
            key_mode: CacheKeyMode::Source,
            sweep_secs: None,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Load from an explicit path. TOML or JSON, picked by extension.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg: AppConfig = match ext.as_str() {
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?,
            "toml" | "" => {
                toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?
            }
            other => bail!("unsupported config format `.{other}`"),
        };
        Ok(cfg.sanitized())
    }

    /// Env var + fallbacks:
    /// 1) $HOTS_CONFIG_PATH
    /// 2) config/hots.toml
    /// 3) config/hots.json
    /// 4) built-in defaults
    ///
    /// Env overrides are applied on top in every case.
    pub fn load_default() -> Result<Self> {
        let base = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(&p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path {p}"));
            }
            Self::load_from(&pb)?
        } else if Path::new(DEFAULT_TOML_PATH).exists() {
            Self::load_from(Path::new(DEFAULT_TOML_PATH))?
        } else if Path::new(DEFAULT_JSON_PATH).exists() {
            Self::load_from(Path::new(DEFAULT_JSON_PATH))?
        } else {
            Self::default()
        };
        base.with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|k| std::env::var(k).ok())
    }

    /// Apply overrides from any key lookup (env in production, a map in tests).
    pub fn with_overrides_from<F>(mut self, get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = get("PORT") {
            self.port = v
                .trim()
                .parse()
                .with_context(|| format!("PORT=`{v}` is not a port number"))?;
        }
        if let Some(v) = get("HOTS_BIND") {
            self.bind = v.trim().to_string();
        }
        if let Some(v) = get("HOTS_CACHE_TTL_SECS") {
            self.cache.ttl_secs = v
                .trim()
                .parse()
                .with_context(|| format!("HOTS_CACHE_TTL_SECS=`{v}`"))?;
        }
        if let Some(v) = get("HOTS_CACHE_KEY_MODE") {
            self.cache.key_mode = v.parse().map_err(|e: String| anyhow!(e))?;
        }
        if let Some(v) = get("HOTS_HTTP_TIMEOUT_SECS") {
            self.http.timeout_secs = v
                .trim()
                .parse()
                .with_context(|| format!("HOTS_HTTP_TIMEOUT_SECS=`{v}`"))?;
        }
        if let Some(v) = get("HOTS_LOG_JSON") {
            self.log.json = matches!(v.trim(), "1" | "true" | "yes");
        }
        if let Some(v) = get("HOTS_LOG_FILE") {
            let v = v.trim();
            self.log.file = (!v.is_empty()).then(|| PathBuf::from(v));
        }
        Ok(self.sanitized())
    }

    /// Zero TTL/timeouts fall back to defaults, periods are capped at one day,
    /// and a blank bind means all interfaces.
    pub fn sanitized(mut self) -> Self {
        if self.cache.ttl_secs == 0 {
            self.cache.ttl_secs = DEFAULT_TTL_SECS;
        }
        if self.cache.sweep_secs == Some(0) {
            self.cache.sweep_secs = None;
        }
        if self.http.timeout_secs == 0 {
            self.http.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        if self.http.connect_timeout_secs == 0 {
            self.http.connect_timeout_secs = DEFAULT_CONNECT_TIMEOUT_SECS;
        }
        self.cache.ttl_secs = self.cache.ttl_secs.min(MAX_PERIOD_SECS);
        self.cache.sweep_secs = self.cache.sweep_secs.map(|s| s.min(MAX_PERIOD_SECS));
        self.http.timeout_secs = self.http.timeout_secs.min(MAX_PERIOD_SECS);
        self.http.connect_timeout_secs = self.http.connect_timeout_secs.min(MAX_PERIOD_SECS);
        if self.bind.trim().is_empty() {
            self.bind = "0.0.0.0".to_string();
        }
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self
            .cache
            .sweep_secs
            .unwrap_or(self.cache.ttl_secs.saturating_mul(5)))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.http.connect_timeout_secs)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.bind, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_are_sane() {
        let c = AppConfig::default();
        assert_eq!(c.cache_ttl(), Duration::from_secs(120));
        assert_eq!(c.sweep_interval(), Duration::from_secs(600));
        assert_eq!(c.http_timeout(), Duration::from_secs(10));
        assert_eq!(c.connect_timeout(), Duration::from_secs(4));
        assert_eq!(c.cache.key_mode, CacheKeyMode::Source);
        assert_eq!(c.listen_addr().unwrap().port(), 8080);
    }

    #[test]
    fn overrides_apply_and_sanitize() {
        let c = AppConfig::default()
            .with_overrides_from(lookup(&[
                ("PORT", "9000"),
                ("HOTS_CACHE_TTL_SECS", "0"),
                ("HOTS_CACHE_KEY_MODE", "minute"),
                ("HOTS_LOG_JSON", "1"),
            ]))
            .unwrap();
        assert_eq!(c.port, 9000);
        assert_eq!(c.cache.ttl_secs, 120);
        assert_eq!(c.cache.key_mode, CacheKeyMode::MinuteBucket);
        assert!(c.log.json);
    }

    #[test]
    fn bad_override_is_an_error() {
        let err = AppConfig::default()
            .with_overrides_from(lookup(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(AppConfig::default()
            .with_overrides_from(lookup(&[("HOTS_CACHE_KEY_MODE", "hourly")]))
            .is_err());
    }

    #[test]
    fn huge_periods_are_capped() {
        let c = AppConfig::default()
            .with_overrides_from(lookup(&[
                ("HOTS_CACHE_TTL_SECS", "18446744073709551615"),
                ("HOTS_HTTP_TIMEOUT_SECS", "18446744073709551615"),
            ]))
            .unwrap();
        assert_eq!(c.cache.ttl_secs, MAX_PERIOD_SECS);
        assert_eq!(c.http.timeout_secs, MAX_PERIOD_SECS);
        assert_eq!(c.sweep_interval(), Duration::from_secs(MAX_PERIOD_SECS * 5));

        let mut raw = AppConfig::default();
        raw.cache.ttl_secs = u64::MAX;
        raw.cache.sweep_secs = Some(u64::MAX);
        raw.http.connect_timeout_secs = u64::MAX;
        let c = raw.sanitized();
        assert_eq!(c.cache.sweep_secs, Some(MAX_PERIOD_SECS));
        assert_eq!(c.connect_timeout(), Duration::from_secs(MAX_PERIOD_SECS));

        // unsanitized values must not overflow either
        let mut raw = AppConfig::default();
        raw.cache.ttl_secs = u64::MAX;
        assert_eq!(raw.sweep_interval(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c: AppConfig = toml::from_str("port = 3000\n[cache]\nkey_mode = \"minute\"\n").unwrap();
        assert_eq!(c.port, 3000);
        assert_eq!(c.cache.ttl_secs, 120);
        assert_eq!(c.cache.key_mode, CacheKeyMode::MinuteBucket);
        assert_eq!(c.http.timeout_secs, 10);
    }
}
