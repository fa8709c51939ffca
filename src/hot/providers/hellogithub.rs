use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::{format_hot_count, synthesize_url};
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://abroad.hellogithub.com/v1/?sort_by=all&tid=&page=1";
const REPO_URL: &str = "https://hellogithub.com/repository/{id}";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Vec<Repo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Repo {
    title: String,
    summary: String,
    clicks_total: i64,
    item_id: String,
}

pub struct HelloGithub;

impl HotProvider for HelloGithub {
    fn id(&self) -> &'static str {
        "hellogithub"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .into_iter()
            .enumerate()
            .map(|(i, r)| HotItem {
                to_url: synthesize_url(REPO_URL, &r.item_id),
                title: r.title,
                desc: r.summary,
                hot_val: format_hot_count(r.clicks_total),
                pos: i as i64 + 1,
                ..Default::default()
            })
            .collect())
    }
}
