use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::{fill_template, format_hot_count, map_label};
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://aweme-lq.snssdk.com/aweme/v1/hot/search/list/?device_platform=webapp&aid=6383&channel=channel_pc_web&detail_list=1&source=6&main_billboard_count=5&update_version_code=170400&pc_client_type=1&pc_libra_divert=Windows&version_code=170400&version_name=17.4.0&cookie_enabled=true&screen_width=1920&screen_height=1080&browser_language=zh-CN&browser_platform=Win32&browser_name=Chrome&browser_version=131.0.0.0&browser_online=true&engine_name=Blink&engine_version=131.0.0.0&os_name=Windows";
const SEARCH_URL: &str =
    "https://www.douyin.com/root/search/{keyword}?aid=8f302f2a-b661-4a1b-a88a-1027f4475461&type=general";

/// Badge codes used by the hot search list.
pub const LABELS: &[(i64, &str)] = &[(3, "热"), (1, "新"), (8, "独家"), (5, "首发")];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Data {
    word_list: Vec<Word>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Word {
    word: String,
    hot_value: i64,
    position: i64,
    label: i64,
    is_n1: bool,
}

pub struct Douyin;

impl HotProvider for Douyin {
    fn id(&self) -> &'static str {
        "douyin"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .word_list
            .into_iter()
            .map(|w| {
                // the n1 slot (or an unranked zero-heat entry) is the pinned one
                let pinned = w.is_n1 || (w.hot_value == 0 && w.position == 0);
                let item = HotItem {
                    to_url: fill_template(SEARCH_URL, "keyword", &w.word),
                    hot_val: format_hot_count(w.hot_value),
                    pos: w.position,
                    label: map_label(LABELS, w.label).to_string(),
                    title: w.word,
                    ..Default::default()
                };
                if pinned {
                    item.pin()
                } else {
                    item
                }
            })
            .collect())
    }
}
