// src/hot/transport.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::hot::error::HotError;
use crate::hot::types::{Method, RequestBody, RequestSpec};

/// Issues exactly one upstream request and hands back the body text.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, req: &RequestSpec) -> Result<String, HotError>;
}

/// reqwest-backed transport shared by every provider.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// `timeout` bounds the whole exchange, `connect_timeout` just the dial.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, HotError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| HotError::Transport(format!("building http client: {e}")))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, req: &RequestSpec) -> Result<String, HotError> {
        let mut rb = match req.method {
            Method::Get => self.client.get(&req.url),
            Method::Post => self.client.post(&req.url),
        };
        for (name, value) in &req.headers {
            rb = rb.header(*name, *value);
        }
        rb = match &req.body {
            RequestBody::Empty => rb,
            RequestBody::Json(v) => rb.json(v),
            RequestBody::Form(fields) => rb.form(fields),
        };

        let resp = rb.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(HotError::Transport(format!(
                "upstream {} answered {status}",
                req.url
            )));
        }
        Ok(resp.text().await?)
    }
}
