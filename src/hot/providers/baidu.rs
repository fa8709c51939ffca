use crate::hot::decode::{self, FieldSpec, ListSpec};
use crate::hot::error::HotError;
use crate::hot::normalize::{parse_position, strip_tail};
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://top.baidu.com/board?tab=realtime";

/// Boilerplate link text appended to every abstract.
const MORE_SUFFIX: &str = "查看更多>";

const LIST: ListSpec = ListSpec {
    item: ".category-wrap_iQLoo",
    fields: &[
        FieldSpec::text("hot", ".hot-index_1Bl1a"),
        FieldSpec::text("title", ".c-single-text-ellipsis"),
        FieldSpec::text("pos", ".index_1Ew5p"),
        FieldSpec::attr("href", ".title_dIF3B", "href"),
        FieldSpec::text("label", ".c-text"),
        FieldSpec::text("desc", ".small_Uvkd3"),
        FieldSpec::attr("img", "a img", "src"),
    ],
    limit: None,
};

/// Baidu realtime board, scraped from the rendered HTML.
pub struct Baidu;

impl HotProvider for Baidu {
    fn id(&self) -> &'static str {
        "baidu"
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
                let desc = row.trimmed("desc");
                let item = HotItem {
                    title: row.trimmed("title").to_string(),
                    desc: if desc.is_empty() {
                        String::new()
                    } else {
                        strip_tail(desc, MORE_SUFFIX.len())
                    },
                    hot_val: row.trimmed("hot").to_string(),
                    icon: row.trimmed("img").to_string(),
                    pos: parse_position(row.get("pos")),
                    to_url: row.trimmed("href").to_string(),
                    label: row.trimmed("label").to_string(),
                    ..Default::default()
                };
                // the first card has no rank number when it is the pinned headline
                if i == 0 && row.trimmed("pos").is_empty() {
                    item.pin()
                } else {
                    item
                }
            })
            .collect())
    }
}
