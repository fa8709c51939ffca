use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://edith.xiaohongshu.com/api/sns/v1/search/hot_list";

// Captured from the iOS app; the endpoint refuses requests without them.
const HEADERS: &[(&str, &str)] = &[
    ("xy-direction", "22"),
    ("accept-language", "zh-Hans-CN;q=1"),
    ("shield", "XYAAAAAQAAAAEAAABTAAAAUzUWEe4xG1IYD9/c+qCLOlKGmTtFa+lG434Oe+FTRagxxoaz6rUWSZ3+juJYz8RZqct+oNMyZQxLEBaBEL+H3i0RhOBVGrauzVSARchIWFYwbwkV"),
    ("xy-platform-info", "platform=iOS&version=8.7&build=8070515&deviceId=C323D3A5-6A27-4CE6-AA0E-51C9D4C26A24&bundle=com.xingin.discover"),
    ("xy-common-params", "app_id=ECFAAF02&build=8070515&channel=AppStore&deviceId=C323D3A5-6A27-4CE6-AA0E-51C9D4C26A24&device_fingerprint=20230920120211bd7b71a80778509cf4211099ea911000010d2f20f6050264&device_fingerprint1=20230920120211bd7b71a80778509cf4211099ea911000010d2f20f6050264&device_model=phone&fid=1695182528-0-0-63b29d709954a1bb8c8733eb2fb58f29&gid=7dc4f3d168c355f1a886c54a898c6ef21fe7b9a847359afc77fc24ad&identifier_flag=0&lang=zh-Hans&launch_id=716882697&platform=iOS&project_id=ECFAAF&sid=session.1695189743787849952190&t=1695190591&teenager=0&tz=Asia/Shanghai&uis=light&version=8.7"),
    ("referer", "https://app.xhs.cn/"),
];

/// `word_type` placeholder meaning "no badge".
const NO_LABEL: &str = "无";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Data {
    items: Vec<Entry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Entry {
    title: String,
    score: String,
    word_type: String,
}

pub struct Xiaohongshu;

impl HotProvider for Xiaohongshu {
    fn id(&self) -> &'static str {
        "xhs"
    }

    fn cache_flag(&self, _variant: Option<&str>) -> String {
        "xiaohongshu".to_string()
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL).headers(HEADERS)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .items
            .into_iter()
            .enumerate()
            .map(|(i, e)| HotItem {
                title: e.title,
                hot_val: e.score,
                pos: i as i64 + 1,
                label: if e.word_type == NO_LABEL {
                    String::new()
                } else {
                    e.word_type
                },
                ..Default::default()
            })
            .collect())
    }
}
