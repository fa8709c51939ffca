use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::{format_hot_count, synthesize_url};
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const POST_URL: &str = "https://juejin.cn/post/{id}";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Vec<Entry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Entry {
    content: Content,
    content_counter: Counter,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Content {
    content_id: String,
    title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Counter {
    hot_rank: i64,
}

/// Juejin article rank for one category.
pub struct Juejin {
    id: &'static str,
    url: &'static str,
}

impl Juejin {
    pub const BACKEND: Juejin = Juejin {
        id: "juejin",
        url: "https://api.juejin.cn/content_api/v1/content/article_rank?category_id=1&type=hot",
    };

    pub const AI: Juejin = Juejin {
        id: "juejin-aibox",
        url: "https://api.juejin.cn/content_api/v1/content/article_rank?category_id=6809637773935378440&type=hot",
    };
}

impl HotProvider for Juejin {
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
            .map(|(i, e)| HotItem {
                to_url: synthesize_url(POST_URL, &e.content.content_id),
                title: e.content.title,
                hot_val: format_hot_count(e.content_counter.hot_rank),
                pos: i as i64 + 1,
                ..Default::default()
            })
            .collect())
    }
}
