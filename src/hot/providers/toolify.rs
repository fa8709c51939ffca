use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::format_hot_value;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const URL: &str = "https://www.toolify.ai/self-api/v1/top/month-top?page=1&per_page=50&direction=desc&order_by=growth";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Page,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Page {
    data: Vec<Tool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Tool {
    name: String,
    month_visited_count: f64,
    growth: f64,
    growth_rate: f64,
    description: String,
    tags: Vec<String>,
}

/// Toolify monthly AI-tool growth board, folded into the common item shape:
/// monthly visits become the hot value, growth becomes the label, tags trail the description.
pub struct Toolify;

impl HotProvider for Toolify {
    fn id(&self) -> &'static str {
        "toolify"
    }

    fn request(&self, _variant: Option<&str>) -> RequestSpec {
        RequestSpec::get(URL)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .data
            .into_iter()
            .enumerate()
            .map(|(i, t)| HotItem {
                hot_val: format_hot_value(t.month_visited_count),
                label: format!(
                    "+{} ({:.2}%)",
                    format_hot_value(t.growth),
                    t.growth_rate * 100.0
                ),
                desc: with_tags(t.description, &t.tags),
                title: t.name,
                pos: i as i64 + 1,
                ..Default::default()
            })
            .collect())
    }
}

fn with_tags(mut desc: String, tags: &[String]) -> String {
    for tag in tags.iter().filter(|t| !t.trim().is_empty()) {
        if !desc.is_empty() {
            desc.push(' ');
        }
        desc.push('#');
        desc.push_str(tag.trim());
    }
    desc
}
