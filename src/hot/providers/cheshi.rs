use crate::hot::decode::{self, FieldSpec, ListSpec};
use crate::hot::error::HotError;
use crate::hot::normalize::remove_whitespace;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://news.cheshi.com/djbd/";

const LIST: ListSpec = ListSpec {
    item: ".fall_list",
    fields: &[
        FieldSpec::text("title", ".list_txt h3 a"),
        FieldSpec::text("desc", ".list_txt .txt"),
        FieldSpec::attr("img", ".list_img a img", "data-original"),
        FieldSpec::attr("href", ".list_img a", "href"),
    ],
    limit: Some(30),
};

/// Cheshi (网上车市) exclusive reports. The page carries no hotness figure.
pub struct Cheshi;

impl HotProvider for Cheshi {
    fn id(&self) -> &'static str {
        "cheshi"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let rows = decode::html_list(body, &LIST)?;
        Ok(rows
            .iter()
            .enumerate()
            .map(|(i, row)| HotItem {
                title: row.trimmed("title").to_string(),
                desc: remove_whitespace(row.get("desc")),
                hot_val: "0".to_string(),
                icon: row.trimmed("img").to_string(),
                pos: i as i64 + 1,
                to_url: row.trimmed("href").to_string(),
                ..Default::default()
            })
            .collect())
    }
}
