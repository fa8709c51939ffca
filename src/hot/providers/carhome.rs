use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://content.api.autohome.com.cn/pc/rank/list?ranktype=1&count=20";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    result: Vec<Entry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Entry {
    title: String,
    subtitle: String,
    order: i64,
    url: String,
}

/// Autohome (汽车之家) content rank.
pub struct Carhome;

impl HotProvider for Carhome {
    fn id(&self) -> &'static str {
        "carhome"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .result
            .into_iter()
            .enumerate()
            .map(|(i, e)| HotItem {
                title: e.title,
                desc: e.subtitle,
                hot_val: e.order.to_string(),
                pos: i as i64 + 1,
                to_url: e.url,
                ..Default::default()
            })
            .collect())
    }
}
