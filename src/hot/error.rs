use thiserror::Error;

/// Everything that can go wrong between "fetch source X" and a normalized list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HotError {
    /// DNS/connect/timeout or a non-2xx upstream status.
    #[error("transport error: {0}")]
    Transport(String),

    /// Body was not valid JSON/HTML for the expected shell.
    #[error("decode error: {0}")]
    Decode(String),

    /// Decoded fine, but an expected sub-structure is missing.
    #[error("shape error: {0}")]
    Shape(String),

    #[error("unknown source: {0}")]
    UnknownSource(String),
}

impl HotError {
    /// Short text surfaced to callers in the `err` field.
    pub fn category(&self) -> &'static str {
        match self {
            HotError::Transport(_) => "failed to fetch",
            HotError::Decode(_) => "failed to decode",
            HotError::Shape(_) => "failed to parse",
            HotError::UnknownSource(_) => "unknown source",
        }
    }
}

impl From<serde_json::Error> for HotError {
    fn from(e: serde_json::Error) -> Self {
        HotError::Decode(format!("json: {e}"))
    }
}

impl From<reqwest::Error> for HotError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            HotError::Transport(format!("timed out: {e}"))
        } else {
            HotError::Transport(e.to_string())
        }
    }
}
