use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::format_hot_count;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://r.inews.qq.com/gw/event/hot_ranking_list?page_size=51";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    idlist: Vec<IdList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IdList {
    newslist: Vec<News>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct News {
    longtitle: String,
    share_url: String,
    mini_pro_share_image: String,
    hot_event: HotEvent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HotEvent {
    title: String,
    #[serde(rename = "hotScore")]
    hot_score: i64,
    ranking: i64,
    is_top: i64,
}

/// Tencent News hot ranking. Ranking 1 is a header slot, so real ranks are shifted by one.
pub struct Qq;

impl HotProvider for Qq {
    fn id(&self) -> &'static str {
        "qq"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        let first = shell
            .idlist
            .into_iter()
            .next()
            .ok_or_else(|| HotError::Shape("qq: empty idlist".to_string()))?;

        Ok(first
            .newslist
            .into_iter()
            .filter(|n| !n.share_url.is_empty() && !n.longtitle.is_empty())
            .map(|n| {
                let pinned = n.hot_event.is_top == 1 && n.hot_event.ranking == 1;
                let item = HotItem {
                    title: n.hot_event.title,
                    desc: n.longtitle,
                    hot_val: format_hot_count(n.hot_event.hot_score),
                    pos: n.hot_event.ranking - 1,
                    to_url: n.share_url,
                    icon: n.mini_pro_share_image,
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
