use crate::hot::decode::{self, FieldSpec, ListSpec};
use crate::hot::error::HotError;
use crate::hot::normalize::parse_position;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://m.ithome.com/rankm/";

const LIST: ListSpec = ListSpec {
    item: ".rank-box .placeholder",
    fields: &[
        FieldSpec::text("title", ".plc-title"),
        FieldSpec::text("hot", ".review-num"),
        FieldSpec::text("pos", ".rank-num"),
        FieldSpec::attr("href", "a", "href"),
        FieldSpec::attr("img", "img", "data-original"),
    ],
    // only the first (daily) board
    limit: Some(10),
};

pub struct Ithome;

impl HotProvider for Ithome {
    fn id(&self) -> &'static str {
        "ithome"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let rows = decode::html_list(body, &LIST)?;
        Ok(rows
            .iter()
            .map(|row| HotItem {
                title: row.trimmed("title").to_string(),
                hot_val: row.trimmed("hot").to_string(),
                icon: row.trimmed("img").to_string(),
                pos: parse_position(row.get("pos")),
                to_url: row.trimmed("href").to_string(),
                ..Default::default()
            })
            .collect())
    }
}
