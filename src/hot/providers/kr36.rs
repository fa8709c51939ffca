use serde::Deserialize;
use serde_json::json;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::{format_hot_count, synthesize_url};
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://gateway.36kr.com/api/mis/nav/home/nav/rank/hot";
const ARTICLE_URL: &str = "https://m.36kr.com/p/{id}";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Data {
    hot_rank_list: Vec<Rank>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Rank {
    item_id: i64,
    template_material: Material,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Material {
    widget_title: String,
    stat_read: i64,
    widget_image: String,
}

/// 36Kr hot ranking; the gateway only answers POSTs with a wap partner body.
pub struct Kr36;

impl HotProvider for Kr36 {
    fn id(&self) -> &'static str {
        "36kr"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        let body = json!({
            "partner_id": "wap",
            "timestamp": chrono::Utc::now().timestamp(),
            "param": { "siteId": 1, "platformId": 2 },
        });
        RequestSpec::post_json(URL, body)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .hot_rank_list
            .into_iter()
            .enumerate()
            .map(|(i, r)| HotItem {
                title: r.template_material.widget_title,
                hot_val: format_hot_count(r.template_material.stat_read),
                icon: r.template_material.widget_image,
                pos: i as i64 + 1,
                to_url: synthesize_url(ARTICLE_URL, &r.item_id.to_string()),
                ..Default::default()
            })
            .collect())
    }
}
