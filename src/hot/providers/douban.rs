use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::format_hot_count;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://m.douban.com/rexxar/api/v2/search/hots?ck=";

// rexxar rejects requests that don't look like the mobile web client.
const HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json, text/javascript, */*; q=0.01"),
    ("Accept-Language", "zh-CN,zh;q=0.9"),
    ("Origin", "https://www.douban.com"),
    ("Priority", "u=1, i"),
    ("Referer", "https://www.douban.com/"),
    ("Sec-Fetch-Dest", "empty"),
    ("Sec-Fetch-Mode", "cors"),
    ("Sec-Fetch-Site", "same-site"),
    ("User-Agent", "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1"),
];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    gallery_topics: Vec<Topic>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Topic {
    title: String,
    card_subtitle: String,
    read_count: i64,
    url: String,
    tail_icon: TailIcon,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TailIcon {
    text: String,
}

pub struct Douban;

impl HotProvider for Douban {
    fn id(&self) -> &'static str {
        "douban"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL).headers(HEADERS)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .gallery_topics
            .into_iter()
            .enumerate()
            .map(|(i, t)| HotItem {
                title: t.title,
                desc: t.card_subtitle,
                hot_val: format_hot_count(t.read_count),
                pos: i as i64 + 1,
                to_url: t.url,
                label: t.tail_icon.text,
                ..Default::default()
            })
            .collect())
    }
}
