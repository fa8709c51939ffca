use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::{format_hot_count, synthesize_url};
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

// article board; the video board lives under rank_type=pgc_video_total_rank
const URL: &str = "https://www.dongchedi.com/motor/pc/content/pgc_content_rank?aid=1839&app_name=auto_web_pc&rank_type=pgc_article_total_rank";
const ARTICLE_URL: &str = "https://www.dongchedi.com/article/{id}";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Data {
    list: Vec<Entry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Entry {
    title: String,
    count: i64,
    group_id: String,
}

pub struct Dongchedi;

impl HotProvider for Dongchedi {
    fn id(&self) -> &'static str {
        "dongchedi"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .list
            .into_iter()
            .enumerate()
            .map(|(i, e)| HotItem {
                to_url: synthesize_url(ARTICLE_URL, &e.group_id),
                title: e.title,
                hot_val: format_hot_count(e.count),
                pos: i as i64 + 1,
                ..Default::default()
            })
            .collect())
    }
}
