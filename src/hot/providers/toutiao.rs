use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://www.toutiao.com/hot-event/hot-board/?origin=toutiao_pc";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Vec<Board>,
    fixed_top_data: Vec<Fixed>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct Board {
    title: String,
    hot_value: String,
    label: String,
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct Fixed {
    title: String,
    url: String,
}

pub struct Toutiao;

impl HotProvider for Toutiao {
    fn id(&self) -> &'static str {
        "toutiao"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;

        let pinned = shell.fixed_top_data.into_iter().map(|f| {
            HotItem {
                title: f.title,
                to_url: f.url,
                ..Default::default()
            }
            .pin()
        });
        let ranked = shell.data.into_iter().enumerate().map(|(i, b)| HotItem {
            title: b.title,
            hot_val: b.hot_value,
            pos: i as i64 + 1,
            to_url: b.url,
            label: b.label,
            ..Default::default()
        });

        Ok(pinned.chain(ranked).collect())
    }
}
