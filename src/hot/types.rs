// src/hot/types.rs
use serde::{Deserialize, Serialize};

use crate::hot::error::HotError;

/// Position reserved for pinned/featured entries that carry no natural rank.
pub const TOP_POSITION: i64 = 999;

/// One normalized trending entry. Wire names stay stable across every source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotItem {
    pub title: String,
    pub desc: String,
    pub hot_val: String, // source-formatted text, "" when absent
    pub icon: String,
    pub pos: i64,
    pub to_url: String,
    pub label: String,
    pub is_top: u8,
}

impl HotItem {
    /// Mark the entry as pinned: sentinel position, top flag, neutral hot value.
    pub fn pin(mut self) -> Self {
        self.pos = TOP_POSITION;
        self.is_top = 1;
        self.hot_val = "0".to_string();
        self
    }

    pub fn is_pinned(&self) -> bool {
        self.is_top == 1
    }
}

/// Envelope returned for every source, success or not.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotResponse {
    pub succ: String,
    pub err: String,
    pub code: i32,
    pub data: Vec<HotItem>,
}

impl HotResponse {
    pub const OK: &'static str = "ok";

    pub fn ok(data: Vec<HotItem>) -> Self {
        Self {
            succ: Self::OK.to_string(),
            err: String::new(),
            code: 0,
            data,
        }
    }

    /// Failure envelope: empty data, short category text only.
    pub fn failed(err: &HotError) -> Self {
        Self {
            succ: String::new(),
            err: err.category().to_string(),
            code: 1,
            data: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

/// Everything the transport needs to issue the single upstream call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: RequestBody,
}

impl RequestSpec {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn post_json(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![("Content-Type", "application/json")],
            body: RequestBody::Json(body),
        }
    }

    pub fn post_form(url: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::Form(fields),
        }
    }

    pub fn headers(mut self, headers: &[(&'static str, &'static str)]) -> Self {
        self.headers.extend_from_slice(headers);
        self
    }
}

/// Per-source descriptor: how to ask upstream and how to read the answer.
///
/// Providers are stateless; the shared pipeline (`hot::run_provider`) owns
/// the transport call and turns any error into a failure envelope.
pub trait HotProvider: Send + Sync {
    /// Route slug, e.g. `"bili"`.
    fn id(&self) -> &'static str;

    /// Cache flag; sources with sub-lists fold the variant in here.
    fn cache_flag(&self, _variant: Option<&str>) -> String {
        self.id().to_string()
    }

    fn request(&self, variant: Option<&str>) -> RequestSpec;

    /// Decode the upstream body and normalize it into display order.
    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_forces_sentinel_and_zero_hot() {
        let it = HotItem {
            title: "x".into(),
            hot_val: "12345".into(),
            pos: 3,
            ..Default::default()
        }
        .pin();
        assert_eq!(it.pos, TOP_POSITION);
        assert_eq!(it.is_top, 1);
        assert_eq!(it.hot_val, "0");
    }

    #[test]
    fn failure_envelope_serializes_empty_array() {
        let resp = HotResponse::failed(&HotError::Decode("bad".into()));
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["code"], 1);
        assert_eq!(v["succ"], "");
        assert_eq!(v["err"], "failed to decode");
        assert!(v["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn item_wire_names_are_stable() {
        let v = serde_json::to_value(HotItem::default()).unwrap();
        for k in [
            "title", "desc", "hot_val", "icon", "pos", "to_url", "label", "is_top",
        ] {
            assert!(v.get(k).is_some(), "missing {k}");
        }
    }
}
