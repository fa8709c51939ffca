use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://www.qctt.cn/channelDataList?page=1&id=1";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Entry {
    title: String,
    pic_url_list: Vec<String>,
}

/// Qctt (汽车头条) channel feed. The body is a bare array; no links or hotness.
pub struct Qctt;

impl HotProvider for Qctt {
    fn id(&self) -> &'static str {
        "qctt"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let entries: Vec<Entry> = decode::json(body)?;
        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| HotItem {
                title: e.title,
                icon: e.pic_url_list.into_iter().next().unwrap_or_default(),
                pos: i as i64 + 1,
                ..Default::default()
            })
            .collect())
    }
}
