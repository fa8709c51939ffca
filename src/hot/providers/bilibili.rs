use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::fill_template;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://app.bilibili.com/x/v2/search/trending/ranking?limit=30";
const SEARCH_URL: &str = "https://search.bilibili.com/all?keyword={keyword}&from_source=webtop_search&spm_id_from=333.1007&search_source=4";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Data {
    list: Vec<Entry>,
    top_list: Vec<Entry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Entry {
    keyword: String,
    hot_id: i64,
    position: i64,
}

impl Entry {
    fn into_item(self) -> HotItem {
        HotItem {
            to_url: fill_template(SEARCH_URL, "keyword", &self.keyword),
            hot_val: self.hot_id.to_string(),
            pos: self.position,
            title: self.keyword,
            ..Default::default()
        }
    }
}

/// Bilibili app search trending: a separate `top_list` carries pinned entries.
pub struct Bilibili;

impl HotProvider for Bilibili {
    fn id(&self) -> &'static str {
        "bili"
    }

    fn cache_flag(&self, _variant: Option<&str>) -> String {
        "bilibili".to_string()
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        let pinned = shell.data.top_list.into_iter().map(|e| e.into_item().pin());
        let ranked = shell.data.list.into_iter().map(Entry::into_item);
        Ok(pinned.chain(ranked).collect())
    }
}
