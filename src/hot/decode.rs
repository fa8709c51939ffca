//! Decode strategies shared by providers:
//! plain JSON envelopes, declarative HTML list extraction, and JSON blobs
//! embedded in an HTML `<script>` tag.

use std::collections::HashMap;

use regex::Regex;
use scraper::{Html, Selector};
use serde::de::DeserializeOwned;

use crate::hot::error::HotError;

/// Decode a JSON body into a source-specific shell.
pub fn json<T: DeserializeOwned>(body: &str) -> Result<T, HotError> {
    Ok(serde_json::from_str(body)?)
}

/// One field pulled out of a repeated list node.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub selector: &'static str,
    /// `None` = concatenated text of all matches, `Some(a)` = attribute of the first match.
    pub attr: Option<&'static str>,
}

impl FieldSpec {
    pub const fn text(name: &'static str, selector: &'static str) -> Self {
        Self {
            name,
            selector,
            attr: None,
        }
    }

    pub const fn attr(name: &'static str, selector: &'static str, attr: &'static str) -> Self {
        Self {
            name,
            selector,
            attr: Some(attr),
        }
    }
}

/// Declarative description of an HTML list: item selector + fields + optional cap.
#[derive(Debug, Clone, Copy)]
pub struct ListSpec {
    pub item: &'static str,
    pub fields: &'static [FieldSpec],
    pub limit: Option<usize>,
}

/// Extracted values of one list node, keyed by `FieldSpec::name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    values: HashMap<&'static str, String>,
}

impl Row {
    /// Raw (untrimmed) value; missing fields read as "".
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn trimmed(&self, name: &str) -> &str {
        self.get(name).trim()
    }
}

fn compile(selector: &'static str) -> Result<Selector, HotError> {
    Selector::parse(selector).map_err(|e| HotError::Decode(format!("selector `{selector}`: {e}")))
}

/// Run `spec` over `body` and return one `Row` per matching list node, in document order.
pub fn html_list(body: &str, spec: &ListSpec) -> Result<Vec<Row>, HotError> {
    let item_sel = compile(spec.item)?;
    let field_sels = spec
        .fields
        .iter()
        .map(|f| compile(f.selector).map(|sel| (f, sel)))
        .collect::<Result<Vec<_>, _>>()?;

    let doc = Html::parse_document(body);
    let limit = spec.limit.unwrap_or(usize::MAX);

    let rows = doc
        .select(&item_sel)
        .take(limit)
        .map(|node| {
            let mut row = Row::default();
            for (field, sel) in &field_sels {
                let value = match field.attr {
                    None => node
                        .select(sel)
                        .flat_map(|m| m.text())
                        .collect::<String>(),
                    Some(attr) => node
                        .select(sel)
                        .next()
                        .and_then(|m| m.value().attr(attr))
                        .unwrap_or_default()
                        .to_string(),
                };
                row.values.insert(field.name, value);
            }
            row
        })
        .collect();

    Ok(rows)
}

/// Pull capture group 1 of `pattern` out of an HTML page and JSON-decode it.
pub fn embedded_json<T: DeserializeOwned>(body: &str, pattern: &Regex) -> Result<T, HotError> {
    let blob = pattern
        .captures(body)
        .and_then(|c| c.get(1))
        .ok_or_else(|| HotError::Shape("no embedded json blob in page".to_string()))?;
    json(blob.as_str())
}
