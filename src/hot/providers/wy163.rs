use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::fill_template;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://gw.m.163.com/search/api/v2/hot-search";
const SEARCH_URL: &str = "https://m.163.com/search?keyword={keyword}";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Data {
    hot_rank: Vec<Rank>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Rank {
    hot_word: String,
    exp: String,
    rank: i64,
}

/// NetEase News mobile hot search.
pub struct Wy163;

impl HotProvider for Wy163 {
    fn id(&self) -> &'static str {
        "wy163"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .hot_rank
            .into_iter()
            .map(|r| HotItem {
                to_url: fill_template(SEARCH_URL, "keyword", &r.hot_word),
                hot_val: r.exp,
                pos: r.rank,
                title: r.hot_word,
                ..Default::default()
            })
            .collect())
    }
}
