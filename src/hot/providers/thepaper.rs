use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::synthesize_url;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://cache.thepaper.cn/contentapi/wwwIndex/rightSidebar";
const ARTICLE_URL: &str = "https://www.thepaper.cn/newsDetail_forward_{id}";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Data {
    hot_news: Vec<News>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct News {
    name: String,
    share_pic: String,
    cont_id: String,
    pub_time_new: String,
    praise_times: String,
    interaction_num: String,
}

pub struct Thepaper;

impl HotProvider for Thepaper {
    fn id(&self) -> &'static str {
        "thepaper"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .hot_news
            .into_iter()
            .enumerate()
            .map(|(i, n)| HotItem {
                desc: format!(
                    "评论数: {} 点赞数: {} 更新时间: {}",
                    n.interaction_num, n.praise_times, n.pub_time_new
                ),
                pos: i as i64 + 1,
                to_url: synthesize_url(ARTICLE_URL, &n.cont_id),
                icon: n.share_pic,
                title: n.name,
                ..Default::default()
            })
            .collect())
    }
}
