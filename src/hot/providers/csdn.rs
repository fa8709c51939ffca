use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Vec<Article>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Article {
    article_title: String,
    article_detail_url: String,
    pc_hot_rank_score: String,
    pic_list: Vec<String>,
}

/// CSDN blog hot rank. One shape, two boards.
pub struct Csdn {
    id: &'static str,
    url: &'static str,
}

impl Csdn {
    /// Site-wide board.
    pub const OVERALL: Csdn = Csdn {
        id: "csdn",
        url: "https://blog.csdn.net/phoenix/web/blog/hot-rank?page=0&pageSize=30",
    };

    /// 人工智能 channel board.
    pub const AI: Csdn = Csdn {
        id: "csdn-content",
        url: "https://blog.csdn.net/phoenix/web/blog/hot-rank?page=0&pageSize=50&child_channel=%E4%BA%BA%E5%B7%A5%E6%99%BA%E8%83%BD&type=",
    };
}

impl HotProvider for Csdn {
    fn id(&self) -> &'static str {
        self.id
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(self.url)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .into_iter()
            .enumerate()
            .map(|(i, a)| HotItem {
                icon: a.pic_list.into_iter().next().unwrap_or_default(),
                title: a.article_title,
                hot_val: a.pc_hot_rank_score,
                pos: i as i64 + 1,
                to_url: a.article_detail_url,
                ..Default::default()
            })
            .collect())
    }
}
