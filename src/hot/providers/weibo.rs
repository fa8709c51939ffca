use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::{fill_template, format_hot_count, remove_char};
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://weibo.com/ajax/side/hotSearch";
const SEARCH_URL: &str = "https://s.weibo.com/weibo?q=%23{keyword}%23&t=31";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Data {
    realtime: Vec<Realtime>,
    hotgovs: Vec<Gov>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Realtime {
    word: String,
    num: i64,
    realpos: i64,
    label_name: String,
    flag_desc: String,
}

// Government/pinned topics arrive wrapped in `#...#`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Gov {
    word: String,
    icon_desc: String,
}

pub struct Weibo;

impl HotProvider for Weibo {
    fn id(&self) -> &'static str {
        "weibo"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        let mut out = Vec::with_capacity(shell.data.hotgovs.len() + shell.data.realtime.len());

        for g in shell.data.hotgovs {
            let title = remove_char(&g.word, '#');
            out.push(
                HotItem {
                    to_url: fill_template(SEARCH_URL, "keyword", &title),
                    title,
                    label: g.icon_desc,
                    ..Default::default()
                }
                .pin(),
            );
        }

        for r in shell.data.realtime {
            out.push(HotItem {
                to_url: fill_template(SEARCH_URL, "keyword", &r.word),
                hot_val: format!("{}{}", r.flag_desc, format_hot_count(r.num)),
                pos: r.realpos,
                title: r.word,
                label: r.label_name,
                ..Default::default()
            });
        }

        Ok(out)
    }
}
