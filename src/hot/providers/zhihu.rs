//! Zhihu billboard. Two adapters over the same page: the state blob the
//! frontend hydrates from, and the server-rendered list markup.

use once_cell::sync::OnceCell;
use regex::Regex;
use serde::Deserialize;

use crate::hot::decode::{self, FieldSpec, ListSpec};
use crate::hot::error::HotError;
use crate::hot::normalize::parse_position;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://www.zhihu.com/billboard";

fn initial_data_re() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)<script id="js-initialData" type="text/json">(.*?)</script>"#)
            .expect("initialData regex")
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct InitialData {
    initial_state: State,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct State {
    topstory: Topstory,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Topstory {
    hot_list: Vec<Hot>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Hot {
    target: Target,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Target {
    title_area: Text,
    excerpt_area: Text,
    metrics_area: Text,
    image_area: Image,
    link: Link,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Text {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Image {
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Link {
    url: String,
}

/// `/api/hot/zhihu` (and `/zhihu/v2`): decode the embedded `js-initialData` state.
pub struct Zhihu;

impl HotProvider for Zhihu {
    fn id(&self) -> &'static str {
        "zhihu"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let data: InitialData = decode::embedded_json(body, initial_data_re())?;
        Ok(data
            .initial_state
            .topstory
            .hot_list
            .into_iter()
            .enumerate()
            .map(|(i, h)| {
                let t = h.target;
                HotItem {
                    title: t.title_area.text,
                    desc: t.excerpt_area.text,
                    hot_val: t.metrics_area.text,
                    icon: t.image_area.url,
                    pos: i as i64 + 1,
                    to_url: t.link.url,
                    ..Default::default()
                }
            })
            .collect())
    }
}

const LIST: ListSpec = ListSpec {
    item: ".Card .HotList-item",
    fields: &[
        FieldSpec::text("hot", ".HotList-itemMetrics"),
        FieldSpec::text("title", ".HotList-itemTitle"),
        FieldSpec::text("pos", ".HotList-itemIndex"),
        FieldSpec::attr("img", ".HotList-itemImgContainer img", "src"),
    ],
    limit: None,
};

/// `/api/hot/zhihu/v1`: scrape the rendered list.
pub struct ZhihuHtml;

impl HotProvider for ZhihuHtml {
    fn id(&self) -> &'static str {
        "zhihu-html"
    }

    fn cache_flag(&self, _variant: Option<&str>) -> String {
        "zhihu_html".to_string()
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let rows = decode::html_list(body, &LIST)?;
        Ok(rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let item = HotItem {
                    title: row.trimmed("title").to_string(),
                    hot_val: row.trimmed("hot").to_string(),
                    icon: row.trimmed("img").to_string(),
                    pos: parse_position(row.get("pos")),
                    ..Default::default()
                };
                if i == 0 && row.trimmed("pos").is_empty() {
                    item.pin()
                } else {
                    item
                }
            })
            .collect())
    }
}
